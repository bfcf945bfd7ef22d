//! Sequence conversions for [`Maybe`].
//!
//! A `Maybe<T>` is a sequence of zero or one elements: iterating a `Just`
//! yields its payload once, iterating `Nothing` yields nothing. The inverse
//! direction is [`FirstJust`], which turns the head of any finite iterator
//! (optionally filtered by a predicate) back into a `Maybe`.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{FirstJust, Maybe};
//!
//! let collected: Vec<i32> = Maybe::Just(42).into_iter().collect();
//! assert_eq!(collected, vec![42]);
//!
//! assert_eq!(vec![23, 42, 15].into_iter().first_just(), Maybe::Just(23));
//! assert_eq!(Vec::<i32>::new().into_iter().first_just(), Maybe::Nothing);
//! ```

use std::iter::FusedIterator;

use super::maybe::Maybe;

/// Iterator over the zero-or-one elements of a [`Maybe`].
///
/// Created by [`Maybe::iter`] or the `IntoIterator` implementations.
#[derive(Debug, Clone)]
pub struct MaybeIntoIter<T> {
    remaining: Maybe<T>,
}

impl<T> Iterator for MaybeIntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        std::mem::replace(&mut self.remaining, Maybe::Nothing).into_option()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let length = usize::from(self.remaining.is_just());
        (length, Some(length))
    }
}

impl<T> DoubleEndedIterator for MaybeIntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.next()
    }
}

impl<T> ExactSizeIterator for MaybeIntoIter<T> {}

impl<T> FusedIterator for MaybeIntoIter<T> {}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = MaybeIntoIter<T>;

    /// Converts into a lazy sequence of zero or one elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// let sum: i32 = Maybe::Just(42).into_iter().sum();
    /// assert_eq!(sum, 42);
    ///
    /// let none: Vec<i32> = Maybe::Nothing.into_iter().collect();
    /// assert!(none.is_empty());
    /// ```
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        MaybeIntoIter { remaining: self }
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = MaybeIntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Maybe<T> {
    /// Returns an iterator over the zero-or-one contained values, borrowing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// let maybe = Maybe::Just("hello".to_string());
    /// let lengths: Vec<usize> = maybe.iter().map(|s| s.len()).collect();
    /// assert_eq!(lengths, vec![5]);
    /// assert!(maybe.is_just());
    /// ```
    #[inline]
    pub fn iter(&self) -> MaybeIntoIter<&T> {
        MaybeIntoIter {
            remaining: self.as_ref(),
        }
    }
}

/// Extracts the first element of a sequence as a [`Maybe`].
///
/// Blanket-implemented for every iterator.
///
/// # Examples
///
/// ```rust
/// use monadic::control::{FirstJust, Maybe};
///
/// assert_eq!([23, 42, 15].into_iter().first_just(), Maybe::Just(23));
/// assert_eq!(
///     [23, 42, 15].into_iter().first_just_by(|x| x % 2 == 0),
///     Maybe::Just(42)
/// );
/// assert_eq!(
///     [23, 15].into_iter().first_just_by(|x| x % 2 == 0),
///     Maybe::Nothing
/// );
/// ```
pub trait FirstJust: Iterator + Sized {
    /// Returns the first element as `Just`, or `Nothing` for an empty
    /// sequence.
    #[inline]
    fn first_just(mut self) -> Maybe<Self::Item> {
        self.next().into()
    }

    /// Returns the first element satisfying the predicate as `Just`, or
    /// `Nothing` when none matches.
    #[inline]
    fn first_just_by<P>(self, predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter(predicate).first_just()
    }
}

impl<I: Iterator> FirstJust for I {}
