//! Query entry points for futures of containers.

use std::future::Future;

use crate::control::{Either, Maybe};

/// Query combinators for any future resolving to a [`Maybe`].
///
/// Blanket-implemented for every `Future<Output = Maybe<T>>`.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
/// use monadic::query::MaybeFutureQueryExt;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let result = async { Maybe::Just(21) }.then_select(|x| x * 2).await;
/// assert_eq!(result, Maybe::Just(42));
/// # });
/// ```
pub trait MaybeFutureQueryExt<T>: Future<Output = Maybe<T>> + Sized {
    /// Awaits the container, then projects the payload through a selector.
    #[inline]
    async fn then_select<U, F>(self, selector: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.await.select(selector)
    }

    /// Awaits the container, then binds a dependent container and combines
    /// source and bound values.
    #[inline]
    async fn then_select_many<C, U, F, G>(self, collection: F, selector: G) -> Maybe<U>
    where
        F: FnOnce(&T) -> Maybe<C>,
        G: FnOnce(T, C) -> U,
    {
        self.await.select_many(collection, selector)
    }
}

impl<T, F> MaybeFutureQueryExt<T> for F where F: Future<Output = Maybe<T>> {}

/// Query combinators for any future resolving to an [`Either`].
///
/// Blanket-implemented for every `Future<Output = Either<L, R>>`.
pub trait EitherFutureQueryExt<L, R>: Future<Output = Either<L, R>> + Sized {
    /// Awaits the container, then projects the right value through a
    /// selector.
    #[inline]
    async fn then_select<U, F>(self, selector: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        self.await.select(selector)
    }

    /// Awaits the container, then binds a dependent container on the right
    /// track and combines source and bound values.
    #[inline]
    async fn then_select_many<C, U, F, G>(self, collection: F, selector: G) -> Either<L, U>
    where
        F: FnOnce(&R) -> Either<L, C>,
        G: FnOnce(R, C) -> U,
    {
        self.await.select_many(collection, selector)
    }
}

impl<L, R, F> EitherFutureQueryExt<L, R> for F where F: Future<Output = Either<L, R>> {}
