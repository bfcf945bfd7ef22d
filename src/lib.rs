//! # monadic
//!
//! Algebraic container types for Rust: `Maybe`, `Either`, and `Outcome`,
//! with a uniform combinator surface and async/query-comprehension layers.
//!
//! ## Overview
//!
//! This library provides three small immutable container types and the
//! operations to compose transformations over them without manual branching:
//!
//! - **`Maybe<T>`**: presence (`Just`) or absence (`Nothing`) of a value
//! - **`Either<L, R>`**: exactly one of two independently-typed values
//! - **`Outcome<T>`**: a guarded computation's success or captured failure
//! - **Async layer**: `map`/`bind` re-expressed over `std::future::Future`
//! - **Query layer**: `select`/`select_many` and the `query!` comprehension
//!   macro for linear chained composition
//!
//! ## Feature Flags
//!
//! - `control`: the three container types and sequence conversions
//! - `async`: async combinators over futures of containers
//! - `query`: query-comprehension entry points and the `query!` macro
//! - `serde`: `Serialize`/`Deserialize` for the container types
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadic::prelude::*;
//!
//! let maybe = 21.just().map(|x| x * 2);
//! assert_eq!(maybe, Maybe::Just(42));
//!
//! let either: Either<String, i32> = maybe.to_either("absent".to_string());
//! assert_eq!(either, Either::Right(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]
// The future extension traits are never used as trait objects
#![allow(async_fn_in_trait)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use monadic::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "async")]
    pub use crate::future::*;

    #[cfg(feature = "query")]
    pub use crate::query::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "async")]
pub mod future;

#[cfg(feature = "query")]
pub mod query;
