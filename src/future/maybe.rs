//! Async combinators for [`Maybe`].

use std::future::Future;

use crate::control::{Either, Maybe};

impl<T> Maybe<T> {
    /// Applies an async mapping to the payload if present.
    ///
    /// `Nothing` propagates without invoking the mapping, so no future is
    /// ever created for the absent case. The mapping's future is awaited
    /// exactly once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let result = Maybe::Just(21).map_async(|x| async move { x * 2 }).await;
    /// assert_eq!(result, Maybe::Just(42));
    /// # });
    /// ```
    pub async fn map_async<U, F, Fut>(self, mapping: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Just(value) => Maybe::Just(mapping(value).await),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies an async container-producing mapping to the payload,
    /// flattening the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let result = Maybe::Just(21)
    ///     .bind_async(|x| async move { Maybe::Just(x * 2) })
    ///     .await;
    /// assert_eq!(result, Maybe::Just(42));
    /// # });
    /// ```
    pub async fn bind_async<U, F, Fut>(self, mapping: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        match self {
            Self::Just(value) => mapping(value).await,
            Self::Nothing => Maybe::Nothing,
        }
    }
}

/// Async combinators for any future resolving to a [`Maybe`].
///
/// Blanket-implemented for every `Future<Output = Maybe<T>>`. The container
/// future always resolves before the mapping runs, preserving left-to-right
/// order.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
/// use monadic::future::MaybeFutureExt;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let deferred = async { Maybe::Just(21) };
/// assert_eq!(deferred.then_map(|x| x * 2).await, Maybe::Just(42));
/// # });
/// ```
pub trait MaybeFutureExt<T>: Future<Output = Maybe<T>> + Sized {
    /// Awaits the container, then applies a sync mapping to the payload if
    /// present.
    #[inline]
    async fn then_map<U, F>(self, mapping: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.await.map(mapping)
    }

    /// Awaits the container, then applies a sync container-producing
    /// mapping, flattening the result.
    #[inline]
    async fn then_bind<U, F>(self, mapping: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.await.bind(mapping)
    }

    /// Awaits the container, then applies an async mapping to the payload
    /// if present.
    #[inline]
    async fn then_map_async<U, F, Fut>(self, mapping: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        self.await.map_async(mapping).await
    }

    /// Awaits the container, then applies an async container-producing
    /// mapping, flattening the result.
    #[inline]
    async fn then_bind_async<U, F, Fut>(self, mapping: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        self.await.bind_async(mapping).await
    }

    /// Awaits the container, then converts it into an [`Either`] with the
    /// supplied filler for the absent case.
    #[inline]
    async fn then_to_either<L>(self, left: L) -> Either<L, T> {
        self.await.to_either(left)
    }
}

impl<T, F> MaybeFutureExt<T> for F where F: Future<Output = Maybe<T>> {}
