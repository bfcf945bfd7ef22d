//! Either type - a disjoint union of two independently-typed values.
//!
//! This module provides the `Either<L, R>` type, which holds exactly one of
//! a `Left(L)` or a `Right(R)`. By convention the `Right` side carries the
//! main track of a computation and `Left` the alternative, so the unadorned
//! combinators (`map`, `bind`) operate on `Right` and each has a `_left`
//! mirror.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Either;
//!
//! let main: Either<String, i32> = Either::Right(42);
//! let alternative: Either<String, i32> = Either::Left("fallback".to_string());
//!
//! // map transforms only the Right side
//! assert_eq!(main.map(|x| x * 2), Either::Right(84));
//! assert_eq!(alternative.clone().map(|x: i32| x * 2), alternative);
//!
//! // fold extracts by handling both sides
//! let text = Either::<String, i32>::Right(7).fold(|l| l, |r| r.to_string());
//! assert_eq!(text, "7");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use super::maybe::Maybe;

/// A value that is exactly one of two independently-typed alternatives.
///
/// `Either<L, R>` is an immutable value type with exactly one side
/// populated; the inactive side's storage does not exist. The payload is
/// extracted only through [`Either::fold`], which requires a handler for
/// both sides.
///
/// # Type Parameters
///
/// * `L` - The type of the left (alternative) value
/// * `R` - The type of the right (main) value
///
/// # Examples
///
/// ```rust
/// use monadic::control::Either;
///
/// let parsed: Either<String, i32> = "42"
///     .parse::<i32>()
///     .map_err(|e| e.to_string())
///     .into();
/// assert_eq!(parsed, Either::Right(42));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally the alternative track.
    Left(L),
    /// The right variant, conventionally the main track.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Variant Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert!(right.is_right());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts into an `Option<L>`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Some(42));
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into an `Option<R>`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.right(), Some("hello".to_string()));
    /// ```
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the right value if present.
    ///
    /// If this is `Right(r)`, returns `Right(mapping(r))`. If this is
    /// `Left(l)`, returns `Left(l)` at the new right type without invoking
    /// the mapping — the value is reinterpreted, not altered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map(|s| s.len()), Either::Right(5));
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map(|s: String| s.len()), Either::Left(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, mapping: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(mapping(value)),
        }
    }

    /// Applies a function to the left value if present; `Right` passes
    /// through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map_left(|x: i32| x * 2), Either::Right("hello".to_string()));
    /// ```
    #[inline]
    pub fn map_left<U, F>(self, mapping: F) -> Either<U, R>
    where
        F: FnOnce(L) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(mapping(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies an either-producing function to the right value, flattening
    /// the result. `Left` propagates without invoking the mapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// fn positive(x: i32) -> Either<String, i32> {
    ///     if x > 0 { Either::Right(x) } else { Either::Left("not positive".to_string()) }
    /// }
    ///
    /// let result = Either::<String, i32>::Right(5).bind(positive);
    /// assert_eq!(result, Either::Right(5));
    ///
    /// let result = Either::<String, i32>::Right(-5).bind(positive);
    /// assert_eq!(result, Either::Left("not positive".to_string()));
    /// ```
    #[inline]
    pub fn bind<U, F>(self, mapping: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => mapping(value),
        }
    }

    /// Applies an either-producing function to the left value, flattening
    /// the result. `Right` propagates without invoking the mapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let recovered: Either<String, i32> =
    ///     Either::<i32, i32>::Left(404).bind_left(|code| Either::Left(format!("error {code}")));
    /// assert_eq!(recovered, Either::Left("error 404".to_string()));
    /// ```
    #[inline]
    pub fn bind_left<U, F>(self, mapping: F) -> Either<U, R>
    where
        F: FnOnce(L) -> Either<U, R>,
    {
        match self {
            Self::Left(value) => mapping(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the `Either` by applying exactly one of two handlers.
    ///
    /// This is the sole extraction path: both sides must be handled and
    /// exactly one handler runs, chosen by the active side. A unit-returning
    /// fold serves as the side-effecting form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.fold(|x: i32| x.to_string(), |s| s), "hello");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left: F, right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left(value),
            Self::Right(value) => right(value),
        }
    }

    // =========================================================================
    // Swap Operation
    // =========================================================================

    /// Swaps the sides: `Left(l)` becomes `Right(l)` and vice versa.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.swap(), Either::Right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a [`Maybe`] of the right value.
    ///
    /// `Right(v)` becomes `Just(v)`; `Left(_)` becomes `Nothing`, discarding
    /// the left payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{Either, Maybe};
    ///
    /// let right: Either<String, i32> = Either::Right(42);
    /// assert_eq!(right.to_maybe(), Maybe::Just(42));
    ///
    /// let left: Either<String, i32> = Either::Left("gone".to_string());
    /// assert_eq!(left.to_maybe(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn to_maybe(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::Nothing,
            Self::Right(value) => Maybe::Just(value),
        }
    }
}

// =============================================================================
// Promotion Wrappers
// =============================================================================

/// A bare value tagged for promotion to the left side of an [`Either`].
///
/// The wrapper carries no behavior: it only selects the side
/// unambiguously when the other side's type is inferred from context.
///
/// # Examples
///
/// ```rust
/// use monadic::control::{Either, LeftValue};
///
/// let either: Either<i32, String> = LeftValue(42).into();
/// assert_eq!(either, Either::Left(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeftValue<L>(pub L);

/// A bare value tagged for promotion to the right side of an [`Either`].
///
/// # Examples
///
/// ```rust
/// use monadic::control::{Either, RightValue};
///
/// let either: Either<String, i32> = RightValue(42).into();
/// assert_eq!(either, Either::Right(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RightValue<R>(pub R);

impl<L, R> From<LeftValue<L>> for Either<L, R> {
    #[inline]
    fn from(tagged: LeftValue<L>) -> Self {
        Self::Left(tagged.0)
    }
}

impl<L, R> From<RightValue<R>> for Either<L, R> {
    #[inline]
    fn from(tagged: RightValue<R>) -> Self {
        Self::Right(tagged.0)
    }
}

// =============================================================================
// Hash Implementation
// =============================================================================

impl<L: Hash, R: Hash> Hash for Either<L, R> {
    /// Writes a side discriminant before the payload, so `Left(v)` and
    /// `Right(v)` hash differently even for equal payloads.
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Left(value) => {
                state.write_u8(0);
                value.hash(state);
            }
            Self::Right(value) => {
                state.write_u8(1);
                value.hash(state);
            }
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result`: `Ok(r)` becomes `Right(r)` and `Err(e)` becomes
    /// `Left(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// let either: Either<String, i32> = ok.into();
    /// assert_eq!(either, Either::Right(42));
    /// ```
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either`: `Right(r)` becomes `Ok(r)` and `Left(l)`
    /// becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}
