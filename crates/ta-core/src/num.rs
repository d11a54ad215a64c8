//! Numeric type abstractions for indicator computations.
//!
//! This module defines the [`TaFloat`] trait which abstracts over `f32` and `f64`
//! so every indicator can be written once and run at either precision.

use core::fmt::Debug;

use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

/// Serialization bound that only applies when the `serde` feature is enabled.
#[cfg(feature = "serde")]
pub trait MaybeSerde: Serialize + DeserializeOwned {}

#[cfg(feature = "serde")]
impl<T> MaybeSerde for T where T: Serialize + DeserializeOwned {}

/// Serialization bound that only applies when the `serde` feature is enabled.
#[cfg(not(feature = "serde"))]
pub trait MaybeSerde {}

#[cfg(not(feature = "serde"))]
impl<T> MaybeSerde for T {}

/// Trait for floating-point types used in indicator calculations.
///
/// NaN is the "not yet computable" sentinel throughout the engine: it never
/// compares equal to itself and it propagates through arithmetic, which is
/// exactly the warm-up contract every indicator series follows.
///
/// # Example
///
/// ```rust
/// use kline_ta_core::TaFloat;
///
/// fn relative_strength<T: TaFloat>(avg_gain: T, avg_loss: T) -> T {
///     if avg_loss == T::ZERO {
///         return T::HUNDRED;
///     }
///     T::HUNDRED - T::HUNDRED / (T::ONE + avg_gain / avg_loss)
/// }
///
/// assert_eq!(relative_strength(1.0_f64, 0.0), 100.0);
/// ```
pub trait TaFloat: Float + Debug + Default + Send + Sync + MaybeSerde + 'static {
    /// Not-a-number value.
    const NAN: Self;
    /// Zero value.
    const ZERO: Self;
    /// One value.
    const ONE: Self;
    /// Two value.
    const TWO: Self;
    /// Three value (typical price, KDJ's J line).
    const THREE: Self;
    /// Fifty value (neutral oscillator reading).
    const FIFTY: Self;
    /// Hundred value (percentage oscillators).
    const HUNDRED: Self;

    /// Convert from `f64`, rounding to the target precision.
    #[must_use]
    fn from_f64_lossy(value: f64) -> Self;

    /// Convert from a count such as a window length.
    #[must_use]
    fn from_usize(value: usize) -> Self;

    /// Check if the value is usable in a computation (not NaN, not infinite).
    #[must_use]
    fn is_valid(self) -> bool {
        self.is_finite()
    }

    /// Return the value unchanged when finite, NaN otherwise.
    ///
    /// Infinities are folded into NaN so that corrupted input shows up as a
    /// gap in the output instead of an unbounded line.
    #[must_use]
    fn finite_or_nan(self) -> Self {
        if self.is_valid() {
            self
        } else {
            Self::NAN
        }
    }
}

impl TaFloat for f32 {
    const NAN: Self = f32::NAN;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const THREE: Self = 3.0;
    const FIFTY: Self = 50.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f32
    }
}

impl TaFloat for f64 {
    const NAN: Self = f64::NAN;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const THREE: Self = 3.0;
    const FIFTY: Self = 50.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value
    }

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_f64() {
        assert!(<f64 as TaFloat>::NAN.is_nan());
        assert_eq!(<f64 as TaFloat>::ZERO, 0.0);
        assert_eq!(<f64 as TaFloat>::THREE, 3.0);
        assert_eq!(<f64 as TaFloat>::HUNDRED, 100.0);
    }

    #[test]
    fn test_constants_f32() {
        assert!(<f32 as TaFloat>::NAN.is_nan());
        assert_eq!(<f32 as TaFloat>::FIFTY, 50.0f32);
    }

    #[test]
    fn test_from_usize() {
        assert_eq!(<f64 as TaFloat>::from_usize(42), 42.0);
        assert_eq!(<f32 as TaFloat>::from_usize(42), 42.0f32);
    }

    #[test]
    fn test_is_valid() {
        assert!(TaFloat::is_valid(1.0f64));
        assert!(!TaFloat::is_valid(f64::NAN));
        assert!(!TaFloat::is_valid(f64::INFINITY));
        assert!(!TaFloat::is_valid(f64::NEG_INFINITY));
    }

    #[test]
    fn test_finite_or_nan() {
        assert_eq!(2.5f64.finite_or_nan(), 2.5);
        assert!(f64::INFINITY.finite_or_nan().is_nan());
        assert!(f64::NAN.finite_or_nan().is_nan());
    }
}
