//! Outcome type - a guarded computation's success or captured failure.
//!
//! This module provides [`Outcome<T>`], produced by [`Outcome::guard`]:
//! run a fallible computation and capture only the failure categories the
//! caller explicitly opted into. Any other failure propagates to the caller
//! unchanged — `guard` is a selective filter, never a catch-all.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{ErrorCategory, ErrorCondition, Outcome};
//!
//! fn divide(dividend: i32, divisor: i32) -> Result<i32, ErrorCondition> {
//!     if divisor == 0 {
//!         Err(ErrorCondition::new(ErrorCategory::DivideByZero, "divisor is zero"))
//!     } else {
//!         Ok(dividend / divisor)
//!     }
//! }
//!
//! // The opted-in category is captured as a Failure outcome.
//! let captured = Outcome::guard(&[ErrorCategory::DivideByZero], || divide(1, 0));
//! assert!(matches!(captured, Ok(Outcome::Failure(_))));
//!
//! // A category outside the allowed set propagates unchanged.
//! let propagated = Outcome::guard(&[ErrorCategory::NotFound], || divide(1, 0));
//! assert!(propagated.is_err());
//! ```

use std::fmt;

/// The class of a failure condition.
///
/// Categories support equality-based membership tests against the allowed
/// set passed to [`Outcome::guard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum ErrorCategory {
    /// A combinator or guarded computation received an invalid argument.
    InvalidArgument,
    /// Division by zero.
    DivideByZero,
    /// An arithmetic overflow.
    Overflow,
    /// A requested entity was not found.
    NotFound,
    /// Input could not be parsed.
    Parse,
    /// An I/O failure reported by a guarded computation.
    Io,
    /// A failure outside the named categories.
    Other,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidArgument => "invalid argument",
            Self::DivideByZero => "divide by zero",
            Self::Overflow => "overflow",
            Self::NotFound => "not found",
            Self::Parse => "parse",
            Self::Io => "io",
            Self::Other => "other",
        };
        formatter.write_str(name)
    }
}

/// A failure condition: a category tag plus a human-readable message.
///
/// Carries enough to support the selective capture decision in
/// [`Outcome::guard`] and downstream reporting.
///
/// # Examples
///
/// ```rust
/// use monadic::control::{ErrorCategory, ErrorCondition};
///
/// let condition = ErrorCondition::new(ErrorCategory::DivideByZero, "divisor is zero");
/// assert_eq!(condition.category, ErrorCategory::DivideByZero);
/// assert_eq!(format!("{condition}"), "divide by zero: divisor is zero");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorCondition {
    /// The failure class, used for selective capture.
    pub category: ErrorCategory,
    /// A human-readable description of the failure.
    pub message: String,
}

impl ErrorCondition {
    /// Creates a new condition from a category and message.
    #[inline]
    pub fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

impl fmt::Display for ErrorCondition {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {}", self.category, self.message)
    }
}

impl std::error::Error for ErrorCondition {}

/// A guarded computation's result: `Success(value)` or a captured
/// `Failure(condition)`.
///
/// Constructed by [`Outcome::guard`], or explicitly through the `Failure`
/// variant. Immutable once built; extracted only through [`Outcome::fold`].
///
/// There are deliberately no `map`/`bind` combinators here: composing
/// guarded computations means re-guarding explicitly, with the
/// [`Outcome::into_result`] bridge for `?`-style chaining.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T> {
    /// The computation completed normally.
    Success(T),
    /// The computation raised a condition whose category was opted into.
    Failure(ErrorCondition),
}

impl<T> Outcome<T> {
    /// Runs a computation, capturing only the allowed failure categories.
    ///
    /// The computation is evaluated immediately, in the caller's own
    /// context. A normal completion wraps as `Ok(Success(value))`. A raised
    /// condition whose category is in `allowed` is captured as
    /// `Ok(Failure(condition))`; any other condition propagates unchanged
    /// as `Err(condition)`.
    ///
    /// An empty `allowed` set captures nothing — every failure propagates,
    /// which is useful only for a structurally-uniform entry point.
    ///
    /// # Errors
    ///
    /// Returns the raised condition itself when its category is not a
    /// member of `allowed`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{ErrorCategory, ErrorCondition, Outcome};
    ///
    /// let outcome = Outcome::guard(&[], || Ok::<_, ErrorCondition>(42))?;
    /// assert_eq!(outcome, Outcome::Success(42));
    /// # Ok::<(), ErrorCondition>(())
    /// ```
    pub fn guard<F>(allowed: &[ErrorCategory], compute: F) -> Result<Self, ErrorCondition>
    where
        F: FnOnce() -> Result<T, ErrorCondition>,
    {
        match compute() {
            Ok(value) => Ok(Self::Success(value)),
            Err(condition) if allowed.contains(&condition.category) => {
                Ok(Self::Failure(condition))
            }
            Err(condition) => Err(condition),
        }
    }

    /// Returns `true` if this is a `Success` value.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a captured `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Eliminates the `Outcome` by applying exactly one of two handlers.
    ///
    /// Both outcomes must be handled; exactly one handler runs. A
    /// unit-returning fold serves as the side-effecting form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{ErrorCategory, ErrorCondition, Outcome};
    ///
    /// let outcome = Outcome::Success(42);
    /// let text = outcome.fold(|v| v.to_string(), |c| c.to_string());
    /// assert_eq!(text, "42");
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, success: F, failure: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(ErrorCondition) -> R,
    {
        match self {
            Self::Success(value) => success(value),
            Self::Failure(condition) => failure(condition),
        }
    }

    /// Converts into a `Result`, the bridge for chaining guarded
    /// computations with `?`.
    ///
    /// # Errors
    ///
    /// Returns the captured condition when this is a `Failure`.
    #[inline]
    pub fn into_result(self) -> Result<T, ErrorCondition> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(condition) => Err(condition),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(condition) => formatter.debug_tuple("Failure").field(condition).finish(),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, ErrorCondition> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}
