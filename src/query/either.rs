//! Query entry points for [`Either`].

use crate::control::Either;

impl<L, R> Either<L, R> {
    /// Projects the right value through a selector. Query-shaped alias of
    /// [`Either::map`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let either: Either<String, i32> = Either::Right(21);
    /// assert_eq!(either.select(|x| x * 2), Either::Right(42));
    /// ```
    #[inline]
    pub fn select<U, F>(self, selector: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        self.map(selector)
    }

    /// Binds a dependent container on the right track and combines source
    /// and bound values.
    ///
    /// A `Left` at either step propagates without evaluating the rest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let result = Either::<String, i32>::Right(2).select_many(
    ///     |x| Either::Right(x * 10),
    ///     |source, bound| source + bound,
    /// );
    /// assert_eq!(result, Either::Right(22));
    /// ```
    #[inline]
    pub fn select_many<C, U, F, G>(self, collection: F, selector: G) -> Either<L, U>
    where
        F: FnOnce(&R) -> Either<L, C>,
        G: FnOnce(R, C) -> U,
    {
        self.bind(|source| collection(&source).map(|bound| selector(source, bound)))
    }
}
