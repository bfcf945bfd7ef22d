//! Do-notation macro for container comprehensions.
//!
//! This module provides the [`query!`](crate::query!) macro, which expands
//! a linear sequence of binds into nested `bind`/`map` chains over any
//! container carrying those methods ([`Maybe`](crate::control::Maybe) and
//! the right track of [`Either`](crate::control::Either)).
//!
//! # Syntax
//!
//! ```text
//! query! {
//!     pattern <= container;     // Bind: extract from the container
//!     let pattern = expression; // Pure let binding
//!     yield expression          // Final projection (wrapped via map)
//! }
//! ```
//!
//! # Operator Choice: `<=`
//!
//! `<-` is not valid in Rust's macro patterns; `<=` is visually similar
//! and suggests "bind from".
//!
//! # Examples
//!
//! ## Chained binds
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
//!
//! ## Absence short-circuits the chain
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::query;
//!
//! let result = query! {
//!     x <= Maybe::Just(2);
//!     y <= Maybe::<i32>::Nothing;
//!     yield x * y
//! };
//! assert_eq!(result, Maybe::Nothing);
//! ```
//!
//! ## With let bindings and Either
//!
//! ```rust
//! use monadic::control::Either;
//! use monadic::query;
//!
//! let result: Either<String, i32> = query! {
//!     x <= Either::Right(2);
//!     let doubled = x * 2;
//!     y <= Either::Right(10);
//!     yield doubled + y
//! };
//! assert_eq!(result, Either::Right(14));
//! ```

/// A do-notation macro expanding to `bind`/`map` chains.
///
/// The terminal `yield expression` runs through `map`, so the final stage
/// projects instead of re-wrapping. See the [module
/// documentation](crate::query) for the full syntax.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
/// use monadic::query;
///
/// let result = query! {
///     x <= Maybe::Just(1);
///     y <= Maybe::Just(2);
///     let sum = x + y;
///     z <= Maybe::Just(10);
///     yield sum * z
/// };
/// assert_eq!(result, Maybe::Just(30));
/// ```
#[macro_export]
macro_rules! query {
    // ==========================================================================
    // Terminal bind: the last stage projects via map, absorbing any let
    // steps that sit between it and the yield
    // ==========================================================================

    // Terminal bind with identifier pattern
    ($pattern:ident <= $container:expr ;
     $(let $let_pattern:pat_param = $let_expression:expr ;)*
     yield $result:expr) => {
        $container.map(move |$pattern| {
            $(let $let_pattern = $let_expression;)*
            $result
        })
    };

    // Terminal bind with tuple pattern
    (($($pattern:tt)*) <= $container:expr ;
     $(let $let_pattern:pat_param = $let_expression:expr ;)*
     yield $result:expr) => {
        $container.map(move |($($pattern)*)| {
            $(let $let_pattern = $let_expression;)*
            $result
        })
    };

    // Terminal bind with wildcard pattern
    (_ <= $container:expr ;
     $(let $let_pattern:pat_param = $let_expression:expr ;)*
     yield $result:expr) => {
        $container.map(move |_| {
            $(let $let_pattern = $let_expression;)*
            $result
        })
    };

    // ==========================================================================
    // Bind operation: pattern <= container; rest
    // ==========================================================================

    // Bind with identifier pattern
    ($pattern:ident <= $container:expr ; $($rest:tt)+) => {
        $container.bind(move |$pattern| {
            $crate::query!($($rest)+)
        })
    };

    // Bind with tuple pattern
    (($($pattern:tt)*) <= $container:expr ; $($rest:tt)+) => {
        $container.bind(move |($($pattern)*)| {
            $crate::query!($($rest)+)
        })
    };

    // Bind with wildcard pattern
    (_ <= $container:expr ; $($rest:tt)+) => {
        $container.bind(move |_| {
            $crate::query!($($rest)+)
        })
    };

    // ==========================================================================
    // Leading let binding: let pattern = expression; rest
    // ==========================================================================

    (let $pattern:pat_param = $expression:expr ; $($rest:tt)+) => {{
        let $pattern = $expression;
        $crate::query!($($rest)+)
    }};
}

#[cfg(test)]
mod tests {
    use crate::control::{Either, Maybe};

    #[test]
    fn single_bind_projects_via_map() {
        let result = query! {
            x <= Maybe::Just(21);
            yield x * 2
        };
        assert_eq!(result, Maybe::Just(42));
    }

    #[test]
    fn tuple_pattern_destructures_the_payload() {
        let result = query! {
            (a, b) <= Maybe::Just((2, 3));
            yield a + b
        };
        assert_eq!(result, Maybe::Just(5));
    }

    #[test]
    fn left_short_circuits_the_chain() {
        let result: Either<String, i32> = query! {
            x <= Either::Right(2);
            _ <= Either::<String, i32>::Left("stop".to_string());
            yield x
        };
        assert_eq!(result, Either::Left("stop".to_string()));
    }
}
