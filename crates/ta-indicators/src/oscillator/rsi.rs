//! Relative Strength Index (RSI) indicator.
//!
//! RSI is a momentum oscillator that measures the speed and magnitude
//! of recent price changes to evaluate overbought or oversold conditions.

use core::marker::PhantomData;

use kline_ta_core::{num::TaFloat, price::PriceSeries, series::Series, traits::Indicator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::wilder::wilder_average;

/// Configuration for the RSI indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RsiConfig {
    /// The lookback period (default: 14).
    pub period: usize,
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl RsiConfig {
    /// Create a new RSI configuration with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

fn change<T: TaFloat>(data: &[T], i: usize) -> T {
    (data[i] - data[i - 1]).finite_or_nan()
}

fn gain<T: TaFloat>(diff: T) -> T {
    if diff.is_nan() {
        T::NAN
    } else if diff > T::ZERO {
        diff
    } else {
        T::ZERO
    }
}

fn relative_strength_index<T: TaFloat>(avg_gain: T, avg_loss: T) -> T {
    if avg_gain.is_nan() || avg_loss.is_nan() {
        T::NAN
    } else if avg_loss == T::ZERO {
        T::HUNDRED
    } else {
        T::HUNDRED - T::HUNDRED / (T::ONE + avg_gain / avg_loss)
    }
}

/// Compute the RSI of `data` with Wilder smoothing.
///
/// The first value appears at index `period`. An average loss of zero gives
/// 100, including for a series that never moves. A zero period or input no
/// longer than `period` yields an all-NaN series.
///
/// # Example
///
/// ```rust
/// use kline_ta_indicators::oscillator::rsi;
///
/// let result = rsi(&[1.0_f64, 2.0, 3.0, 4.0], 2);
/// assert!(result[1].is_nan());
/// assert_eq!(result[2], 100.0);
/// ```
#[must_use]
pub fn rsi<T: TaFloat>(data: &[T], period: usize) -> Series<T> {
    let gains = wilder_average(data.len(), period, |i| gain(change(data, i)));
    let losses = wilder_average(data.len(), period, |i| gain(-change(data, i)));
    gains.zip_with(&losses, relative_strength_index)
}

/// Relative Strength Index indicator over closing prices.
///
/// # Formula
///
/// RS = Average Gain / Average Loss
/// RSI = 100 - (100 / (1 + RS))
///
/// Wilder's smoothing is used: alpha = 1/n (not 2/(n+1))
#[derive(Debug, Clone)]
pub struct Rsi<T: TaFloat> {
    config: RsiConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for Rsi<T> {
    type Output = Series<T>;
    type Config = RsiConfig;

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
        self.config.period.saturating_add(1)
    }

    fn calculate(&self, data: &PriceSeries<T>) -> Self::Output {
        rsi(data.close(), self.config.period)
    }
}
