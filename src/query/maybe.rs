//! Query entry points for [`Maybe`].

use crate::control::Maybe;

impl<T> Maybe<T> {
    /// Projects the payload through a selector. Query-shaped alias of
    /// [`Maybe::map`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(21).select(|x| x * 2), Maybe::Just(42));
    /// ```
    #[inline]
    pub fn select<U, F>(self, selector: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(selector)
    }

    /// Binds a dependent container and combines source and bound values.
    ///
    /// `collection` produces the dependent `Maybe` from a borrowed source
    /// value; `selector` combines the source with the bound value. Absence
    /// at either step propagates without evaluating the rest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// let result = Maybe::Just(2).select_many(
    ///     |x| Maybe::Just(x * 10),
    ///     |source, bound| source + bound,
    /// );
    /// assert_eq!(result, Maybe::Just(22));
    /// ```
    #[inline]
    pub fn select_many<C, U, F, G>(self, collection: F, selector: G) -> Maybe<U>
    where
        F: FnOnce(&T) -> Maybe<C>,
        G: FnOnce(T, C) -> U,
    {
        self.bind(|source| collection(&source).map(|bound| selector(source, bound)))
    }
}
