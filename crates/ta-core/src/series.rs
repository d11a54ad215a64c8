//! Indicator output series.
//!
//! The [`Series`] type is the aligned output of every indicator: index `i`
//! corresponds to price point `i` of the input, and positions before the
//! indicator's warm-up hold NaN.

use core::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::num::TaFloat;

/// A contiguous series of floating-point values aligned to a price series.
///
/// # Example
///
/// ```rust
/// use kline_ta_core::Series;
///
/// let mut series: Series<f64> = Series::nan(2);
/// series.push(99.8);
///
/// assert_eq!(series.len(), 3);
/// assert!(series[0].is_nan());
/// assert_eq!(series.first_valid_index(), Some(2));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent, bound = "T: TaFloat"))]
pub struct Series<T: TaFloat> {
    data: Vec<T>,
}

impl<T: TaFloat> Default for Series<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TaFloat> Series<T> {
    /// Create a new empty series.
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a new series with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a series from an existing vector.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Create a series filled with a value.
    #[must_use]
    pub fn filled(value: T, len: usize) -> Self {
        Self {
            data: vec![value; len],
        }
    }

    /// Create a series of `len` undefined (NaN) values.
    ///
    /// This is the output of every indicator whose parameters are invalid or
    /// whose input is shorter than its lookback.
    #[must_use]
    pub fn nan(len: usize) -> Self {
        Self::filled(T::NAN, len)
    }

    /// Returns the number of elements in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the series contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Append a value to the end of the series.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    /// Get a reference to the value at the given index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Returns an iterator over the values.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Index of the first value that is not NaN.
    #[must_use]
    pub fn first_valid_index(&self) -> Option<usize> {
        self.data.iter().position(|x| !x.is_nan())
    }

    /// Returns `true` when no value in the series is defined.
    #[must_use]
    pub fn is_all_nan(&self) -> bool {
        self.data.iter().all(|x| x.is_nan())
    }

    /// Combine two aligned series element-wise.
    ///
    /// The result has the length of the shorter input.
    #[must_use]
    pub fn zip_with<F>(&self, other: &Self, f: F) -> Self
    where
        F: Fn(T, T) -> T,
    {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect()
    }

    /// Apply a function to every value.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        self.data.iter().map(|&x| f(x)).collect()
    }
}

impl<T: TaFloat> Index<usize> for Series<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T: TaFloat> IndexMut<usize> for Series<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T: TaFloat> FromIterator<T> for Series<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T: TaFloat> From<Vec<T>> for Series<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: TaFloat> AsRef<[T]> for Series<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T: TaFloat> IntoIterator for Series<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T: TaFloat> IntoIterator for &'a Series<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
