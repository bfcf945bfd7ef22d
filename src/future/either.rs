//! Async combinators for [`Either`].

use std::future::Future;

use crate::control::{Either, Maybe};

impl<L, R> Either<L, R> {
    /// Applies an async mapping to the right value if present.
    ///
    /// `Left` propagates without invoking the mapping, so no future is
    /// ever created for the inactive side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let either: Either<String, i32> = Either::Right(21);
    /// let result = either.map_async(|x| async move { x * 2 }).await;
    /// assert_eq!(result, Either::Right(42));
    /// # });
    /// ```
    pub async fn map_async<U, F, Fut>(self, mapping: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(mapping(value).await),
        }
    }

    /// Applies an async mapping to the left value if present; `Right`
    /// passes through unchanged.
    pub async fn map_left_async<U, F, Fut>(self, mapping: F) -> Either<U, R>
    where
        F: FnOnce(L) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Left(value) => Either::Left(mapping(value).await),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies an async either-producing mapping to the right value,
    /// flattening the result.
    pub async fn bind_async<U, F, Fut>(self, mapping: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = Either<L, U>>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => mapping(value).await,
        }
    }

    /// Applies an async either-producing mapping to the left value,
    /// flattening the result.
    pub async fn bind_left_async<U, F, Fut>(self, mapping: F) -> Either<U, R>
    where
        F: FnOnce(L) -> Fut,
        Fut: Future<Output = Either<U, R>>,
    {
        match self {
            Self::Left(value) => mapping(value).await,
            Self::Right(value) => Either::Right(value),
        }
    }
}

/// Async combinators for any future resolving to an [`Either`].
///
/// Blanket-implemented for every `Future<Output = Either<L, R>>`. The
/// container future always resolves before the mapping runs.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Either;
/// use monadic::future::EitherFutureExt;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let deferred = async { Either::<String, i32>::Right(21) };
/// assert_eq!(deferred.then_map(|x| x * 2).await, Either::Right(42));
/// # });
/// ```
pub trait EitherFutureExt<L, R>: Future<Output = Either<L, R>> + Sized {
    /// Awaits the container, then applies a sync mapping to the right
    /// value if present.
    #[inline]
    async fn then_map<U, F>(self, mapping: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        self.await.map(mapping)
    }

    /// Awaits the container, then applies a sync mapping to the left value
    /// if present.
    #[inline]
    async fn then_map_left<U, F>(self, mapping: F) -> Either<U, R>
    where
        F: FnOnce(L) -> U,
    {
        self.await.map_left(mapping)
    }

    /// Awaits the container, then applies a sync either-producing mapping
    /// to the right value, flattening the result.
    #[inline]
    async fn then_bind<U, F>(self, mapping: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        self.await.bind(mapping)
    }

    /// Awaits the container, then applies a sync either-producing mapping
    /// to the left value, flattening the result.
    #[inline]
    async fn then_bind_left<U, F>(self, mapping: F) -> Either<U, R>
    where
        F: FnOnce(L) -> Either<U, R>,
    {
        self.await.bind_left(mapping)
    }

    /// Awaits the container, then applies an async mapping to the right
    /// value if present.
    #[inline]
    async fn then_map_async<U, F, Fut>(self, mapping: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = U>,
    {
        self.await.map_async(mapping).await
    }

    /// Awaits the container, then applies an async mapping to the left
    /// value if present.
    #[inline]
    async fn then_map_left_async<U, F, Fut>(self, mapping: F) -> Either<U, R>
    where
        F: FnOnce(L) -> Fut,
        Fut: Future<Output = U>,
    {
        self.await.map_left_async(mapping).await
    }

    /// Awaits the container, then applies an async either-producing
    /// mapping to the right value, flattening the result.
    #[inline]
    async fn then_bind_async<U, F, Fut>(self, mapping: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = Either<L, U>>,
    {
        self.await.bind_async(mapping).await
    }

    /// Awaits the container, then applies an async either-producing
    /// mapping to the left value, flattening the result.
    #[inline]
    async fn then_bind_left_async<U, F, Fut>(self, mapping: F) -> Either<U, R>
    where
        F: FnOnce(L) -> Fut,
        Fut: Future<Output = Either<U, R>>,
    {
        self.await.bind_left_async(mapping).await
    }

    /// Awaits the container, then converts it into a [`Maybe`] of the
    /// right value.
    #[inline]
    async fn then_to_maybe(self) -> Maybe<R> {
        self.await.to_maybe()
    }
}

impl<L, R, F> EitherFutureExt<L, R> for F where F: Future<Output = Either<L, R>> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test]
    async fn bind_async_skips_mapping_for_left() {
        let invocations = Cell::new(0);
        let either: Either<&str, i32> = Either::Left("inactive");
        let result = either
            .bind_async(|x| {
                invocations.set(invocations.get() + 1);
                async move { Either::Right(x * 2) }
            })
            .await;
        assert_eq!(result, Either::Left("inactive"));
        assert_eq!(invocations.get(), 0);
    }

    #[tokio::test]
    async fn then_map_left_transforms_only_left() {
        let result = async { Either::<i32, String>::Left(42) }
            .then_map_left(|x| x + 1)
            .await;
        assert_eq!(result, Either::Left(43));
    }
}
