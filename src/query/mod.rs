//! Query-comprehension layer.
//!
//! This module re-expresses `map` and `bind` as `select` and `select_many`
//! for [`Maybe`](crate::control::Maybe), [`Either`](crate::control::Either),
//! and (under the `async` feature) futures of both, so multi-step
//! compositions read as linear chains instead of nested closures.
//!
//! `select_many` takes two functions: one producing the dependent container
//! from a borrowed source value, and a projection combining the source and
//! bound values into the final result.
//!
//! The [`query!`](crate::query!) macro layers do-notation on top, expanding
//! `pattern <= container;` binds and a terminal `yield` into the same
//! `bind`/`map` chains.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::query;
//!
//! let result = query! {
//!     x <= Maybe::Just(2);
//!     y <= Maybe::Just(3);
//!     yield x * y
//! };
//! assert_eq!(result, Maybe::Just(6));
//! ```

mod either;
#[cfg(feature = "async")]
mod future;
mod maybe;
mod query_macro;

#[cfg(feature = "async")]
pub use future::{EitherFutureQueryExt, MaybeFutureQueryExt};
