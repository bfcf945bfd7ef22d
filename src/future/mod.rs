//! Async combinator layer over futures of containers.
//!
//! Every `map`/`bind` combinator of [`Maybe`](crate::control::Maybe) and
//! [`Either`](crate::control::Either) exists in three deferred shapes beyond
//! the synchronous one, covering the cross product of {immediate container,
//! deferred container} x {immediate mapping, deferred mapping}:
//!
//! - inherent `*_async` methods take an immediate container and an async
//!   mapping;
//! - `then_*` extension methods on any `Future<Output = Maybe<T>>` (resp.
//!   `Either<L, R>`) take a deferred container and a sync mapping;
//! - `then_*_async` extension methods combine both deferred shapes.
//!
//! All shapes preserve the synchronous branch semantics - the absent case
//! or inactive side never evaluates the mapping - and suspend only where an
//! underlying future is awaited, each one exactly once, in left-to-right
//! order. The layer schedules nothing itself and is executor-agnostic:
//! continuations resume wherever the driving executor polls.

mod either;
mod maybe;

pub use either::EitherFutureExt;
pub use maybe::MaybeFutureExt;
