//! Exponential Moving Average (EMA) indicator.
//!
//! The EMA gives more weight to recent prices, making it more responsive
//! to new information than the SMA.

use core::marker::PhantomData;

use kline_ta_core::{num::TaFloat, price::PriceSeries, series::Series, traits::Indicator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the EMA indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EmaConfig {
    /// The smoothing period (default: 12).
    pub period: usize,
}

impl Default for EmaConfig {
    fn default() -> Self {
        Self { period: 12 }
    }
}

impl EmaConfig {
    /// Create a new EMA configuration with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

/// Compute the Exponential Moving Average of `data`.
///
/// Seeded with the first sample, so unlike [`sma`](crate::trend::sma()) there is no
/// NaN warm-up region: `result[0] == data[0]`. A `period` of zero yields an
/// all-NaN series. A non-finite input turns the rest of the series NaN.
///
/// # Example
///
/// ```rust
/// use kline_ta_indicators::trend::ema;
///
/// let result = ema(&[2.0, 4.0, 4.0], 3); // alpha = 0.5
/// assert_eq!(result[0], 2.0);
/// assert_eq!(result[1], 3.0);
/// assert_eq!(result[2], 3.5);
/// ```
#[must_use]
pub fn ema<T: TaFloat>(data: &[T], period: usize) -> Series<T> {
    if period == 0 {
        return Series::nan(data.len());
    }

    let alpha = T::TWO / (T::from_usize(period) + T::ONE);
    let one_minus_alpha = T::ONE - alpha;

    let mut previous: Option<T> = None;
    data.iter()
        .map(|&value| {
            let value = value.finite_or_nan();
            let next = match previous {
                Some(prev) => alpha * value + one_minus_alpha * prev,
                None => value,
            };
            previous = Some(next);
            next
        })
        .collect()
}

/// Exponential Moving Average indicator over closing prices.
///
/// # Formula
///
/// EMA_0 = P_0
/// EMA_t = α × P_t + (1 - α) × EMA_{t-1}, α = 2 / (n + 1)
#[derive(Debug, Clone)]
pub struct Ema<T: TaFloat> {
    config: EmaConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for Ema<T> {
    type Output = Series<T>;
    type Config = EmaConfig;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            _marker: PhantomData,
        }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn min_periods(&self) -> usize {
        1
    }

    fn calculate(&self, data: &PriceSeries<T>) -> Self::Output {
        ema(data.close(), self.config.period)
    }
}
