//! Core container types.
//!
//! This module provides the three algebraic containers and the conversions
//! between them and ordinary Rust values:
//!
//! - [`Maybe`]: presence or absence of a single value
//! - [`Either`]: exactly one of two independently-typed values
//! - [`Outcome`]: success or selectively-captured failure of a guarded
//!   computation
//! - Sequence conversions between [`Maybe`] and iterators
//!
//! All containers are plain immutable values: no shared state, no locks,
//! safely usable from any number of concurrent callers.

mod either;
mod maybe;
mod outcome;
mod sequence;

pub use either::{Either, LeftValue, RightValue};
pub use maybe::{Lift, Maybe, Nothing};
pub use outcome::{ErrorCategory, ErrorCondition, Outcome};
pub use sequence::{FirstJust, MaybeIntoIter};

use static_assertions::assert_impl_all;

assert_impl_all!(Maybe<i32>: Send, Sync, Clone, Copy);
assert_impl_all!(Either<i32, String>: Send, Sync, Clone);
assert_impl_all!(Outcome<i32>: Send, Sync, Clone);
