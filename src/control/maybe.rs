//! Maybe type - an optional value without null references.
//!
//! This module provides the `Maybe<T>` type, which represents a value that
//! is either present (`Just`) or absent (`Nothing`). Unlike a raw nullable
//! value, the payload can only be reached through [`Maybe::fold`], forcing
//! every caller to handle both variants.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//!
//! // Creating Maybe values
//! let present: Maybe<i32> = Maybe::Just(42);
//! let absent: Maybe<i32> = Maybe::Nothing;
//!
//! // Transforming the payload when present
//! let doubled = present.map(|x| x * 2);
//! assert_eq!(doubled, Maybe::Just(84));
//!
//! // Absence propagates without invoking the mapping
//! let still_absent = absent.map(|x| x * 2);
//! assert_eq!(still_absent, Maybe::Nothing);
//!
//! // Extracting via fold - both branches are mandatory
//! let description = doubled.fold(|x| format!("got {x}"), || "nothing".to_string());
//! assert_eq!(description, "got 84");
//! ```
//!
//! # The `Nothing` singleton
//!
//! The standalone [`Nothing`] unit type compares equal to the absent variant
//! of `Maybe<T>` for *every* payload type `T`, and to nothing else:
//!
//! ```rust
//! use monadic::control::{Maybe, Nothing};
//!
//! assert_eq!(Maybe::<i32>::Nothing, Nothing);
//! assert_eq!(Maybe::<String>::Nothing, Nothing);
//! assert_ne!(Maybe::Just(42), Nothing);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use super::either::Either;

/// Hash written for the absent state, shared by [`Nothing`] and
/// `Maybe::<T>::Nothing` for every `T`.
const NOTHING_HASH: u64 = 0x6e6f_7468_696e_67;

// =============================================================================
// Nothing Singleton
// =============================================================================

/// The absent state as a standalone unit type.
///
/// `Nothing` carries no payload and no type parameter. The absent variant of
/// [`Maybe`] delegates its equality and hashing here, so a bare `Nothing`
/// compares equal to `Maybe::<T>::Nothing` regardless of `T`:
///
/// ```rust
/// use monadic::control::{Maybe, Nothing};
///
/// assert_eq!(Nothing, Maybe::<i32>::Nothing);
/// assert_eq!(Nothing, Maybe::<Vec<String>>::Nothing);
/// ```
///
/// It also converts into the absent variant of any `Maybe`:
///
/// ```rust
/// use monadic::control::{Maybe, Nothing};
///
/// let absent: Maybe<i32> = Nothing.into();
/// assert!(absent.is_nothing());
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nothing;

impl Hash for Nothing {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(NOTHING_HASH);
    }
}

impl fmt::Debug for Nothing {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Nothing")
    }
}

// =============================================================================
// Maybe
// =============================================================================

/// An optional value: either `Just(value)` or `Nothing`.
///
/// `Maybe<T>` is an immutable value type. Every transformation produces a
/// new instance; the payload is extracted only through [`Maybe::fold`],
/// which requires a handler for both variants.
///
/// # Type Parameters
///
/// * `T` - The type of the wrapped value
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
///
/// let maybe = Maybe::Just(5)
///     .map(|x| x + 1)
///     .bind(|x| if x > 3 { Maybe::Just(x * 10) } else { Maybe::Nothing });
/// assert_eq!(maybe, Maybe::Just(60));
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// The absent state.
    Nothing,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Variant Checking
    // =========================================================================

    /// Returns `true` if this is a `Just` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// assert!(Maybe::Just(42).is_just());
    /// assert!(!Maybe::<i32>::Nothing.is_just());
    /// ```
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// assert!(Maybe::<i32>::Nothing.is_nothing());
    /// assert!(!Maybe::Just(42).is_nothing());
    /// ```
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the payload if present.
    ///
    /// If this is `Just(v)`, returns `Just(mapping(v))`. If this is
    /// `Nothing`, returns `Nothing` at the new payload type without
    /// invoking the mapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// let result = Maybe::Just(21).map(|x| x * 2);
    /// assert_eq!(result, Maybe::Just(42));
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(absent.map(|x| x * 2), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn map<U, F>(self, mapping: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => Maybe::Just(mapping(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies a container-producing function to the payload, flattening
    /// the result.
    ///
    /// This is the monadic bind: the mapping itself returns a `Maybe`, so
    /// chains of fallible steps compose without nesting. `Nothing`
    /// propagates without invoking the mapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// fn half(x: i32) -> Maybe<i32> {
    ///     if x % 2 == 0 { Maybe::Just(x / 2) } else { Maybe::Nothing }
    /// }
    ///
    /// assert_eq!(Maybe::Just(8).bind(half).bind(half), Maybe::Just(2));
    /// assert_eq!(Maybe::Just(6).bind(half).bind(half), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn bind<U, F>(self, mapping: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => mapping(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the `Maybe` by applying exactly one of two handlers.
    ///
    /// This is the sole extraction path: both the present and absent cases
    /// must be handled. Exactly one handler runs, chosen by the current
    /// variant. A unit-returning fold serves as the side-effecting form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// let present = Maybe::Just(42).fold(|x| x.to_string(), || "none".to_string());
    /// assert_eq!(present, "42");
    ///
    /// let absent = Maybe::<i32>::Nothing.fold(|x| x.to_string(), || "none".to_string());
    /// assert_eq!(absent, "none");
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, just: F, nothing: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce() -> R,
    {
        match self {
            Self::Just(value) => just(value),
            Self::Nothing => nothing(),
        }
    }

    // =========================================================================
    // Alternatives
    // =========================================================================

    /// Returns self if `Just`, otherwise lazily evaluates the alternative.
    ///
    /// The alternative is not evaluated when this is already a `Just`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// let present = Maybe::Just(1).or_else(|| Maybe::Just(2));
    /// assert_eq!(present, Maybe::Just(1));
    ///
    /// let recovered = Maybe::Nothing.or_else(|| Maybe::Just(2));
    /// assert_eq!(recovered, Maybe::Just(2));
    /// ```
    #[inline]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Just(value) => Self::Just(value),
            Self::Nothing => alternative(),
        }
    }

    // =========================================================================
    // Reference Conversion
    // =========================================================================

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// let maybe = Maybe::Just("hello".to_string());
    /// let length = maybe.as_ref().map(|s| s.len());
    /// assert_eq!(length, Maybe::Just(5));
    /// assert!(maybe.is_just());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into an [`Either`], supplying a filler for the absent case.
    ///
    /// `Just(v)` becomes `Right(v)`; `Nothing` becomes `Left(left)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{Either, Maybe};
    ///
    /// let right: Either<&str, i32> = Maybe::Just(42).to_either("absent");
    /// assert_eq!(right, Either::Right(42));
    ///
    /// let left: Either<&str, i32> = Maybe::Nothing.to_either("absent");
    /// assert_eq!(left, Either::Left("absent"));
    /// ```
    #[inline]
    pub fn to_either<L>(self, left: L) -> Either<L, T> {
        match self {
            Self::Just(value) => Either::Right(value),
            Self::Nothing => Either::Left(left),
        }
    }

    /// Converts into a native `Option<T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(42).into_option(), Some(42));
    /// assert_eq!(Maybe::<i32>::Nothing.into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }
}

// =============================================================================
// Lift Extension
// =============================================================================

/// Lifts bare values into [`Maybe`].
///
/// Blanket-implemented for every sized type, so any value can be promoted
/// at the call site.
///
/// # Examples
///
/// ```rust
/// use monadic::control::{Lift, Maybe};
///
/// assert_eq!(42.just(), Maybe::Just(42));
/// assert_eq!("abc".just_when(|s| s.len() == 3), Maybe::Just("abc"));
/// assert_eq!("abc".just_when(|s| s.len() == 4), Maybe::Nothing);
/// ```
pub trait Lift: Sized {
    /// Wraps the value in `Just`.
    #[inline]
    fn just(self) -> Maybe<Self> {
        Maybe::Just(self)
    }

    /// Wraps the value in `Just` iff the predicate holds, else `Nothing`.
    #[inline]
    fn just_when<P>(self, predicate: P) -> Maybe<Self>
    where
        P: FnOnce(&Self) -> bool,
    {
        if predicate(&self) {
            Maybe::Just(self)
        } else {
            Maybe::Nothing
        }
    }
}

impl<T> Lift for T {}

// =============================================================================
// Equality against the Nothing Singleton
// =============================================================================

// Deliberately unbounded in T: absence equality never inspects a payload.
impl<T> PartialEq<Nothing> for Maybe<T> {
    #[inline]
    fn eq(&self, _: &Nothing) -> bool {
        self.is_nothing()
    }
}

impl<T> PartialEq<Maybe<T>> for Nothing {
    #[inline]
    fn eq(&self, other: &Maybe<T>) -> bool {
        other.is_nothing()
    }
}

// =============================================================================
// Hash Implementation
// =============================================================================

impl<T: Hash> Hash for Maybe<T> {
    /// `Just(v)` hashes consistently with `v`; the absent variant delegates
    /// to the [`Nothing`] singleton's well-known constant.
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Just(value) => value.hash(state),
            Self::Nothing => Nothing.hash(state),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => formatter.debug_tuple("Just").field(value).finish(),
            Self::Nothing => Nothing.fmt(formatter),
        }
    }
}

// =============================================================================
// Default Implementation
// =============================================================================

impl<T> Default for Maybe<T> {
    /// The default `Maybe` is `Nothing`.
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// Converts a native nullable value: `Some(v)` becomes `Just(v)` and
    /// `None` becomes `Nothing`. Absence never ends up inside `Just`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// let present: Maybe<i32> = Some(42).into();
    /// assert_eq!(present, Maybe::Just(42));
    ///
    /// let absent: Maybe<i32> = None.into();
    /// assert_eq!(absent, Maybe::Nothing);
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// Converts back to a native nullable value via
    /// `fold(Some, || None)`.
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> From<Nothing> for Maybe<T> {
    /// Promotes the singleton into the absent variant of any payload type.
    #[inline]
    fn from(_: Nothing) -> Self {
        Self::Nothing
    }
}
