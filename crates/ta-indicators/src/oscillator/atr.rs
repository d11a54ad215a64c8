//! Average True Range (ATR) indicator.

use core::marker::PhantomData;

use kline_ta_core::{
    num::TaFloat,
    price::PriceSeries,
    series::Series,
    traits::Indicator,
    utils::{aligned_len, true_range},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::wilder::wilder_average;

/// Configuration for the ATR indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AtrConfig {
    /// The smoothing period (default: 14).
    pub period: usize,
}

impl Default for AtrConfig {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl AtrConfig {
    /// Create a new ATR configuration.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

/// Compute the Average True Range.
///
/// True range needs the previous close, so it starts at index 1 and the first
/// ATR value (the mean of the first `period` true ranges) lands at index
/// `period`. Misaligned inputs yield an all-NaN series the length of `highs`.
#[must_use]
pub fn atr<T: TaFloat>(highs: &[T], lows: &[T], closes: &[T], period: usize) -> Series<T> {
    match aligned_len(&[highs, lows, closes]) {
        Some(len) => wilder_average(len, period, |i| true_range(highs[i], lows[i], closes[i - 1])),
        None => Series::nan(highs.len()),
    }
}

/// Average True Range indicator.
///
/// # Formula
///
/// TR = max(High - Low, |High - PrevClose|, |Low - PrevClose|)
/// ATR = Wilder-smoothed TR
#[derive(Debug, Clone)]
pub struct Atr<T: TaFloat> {
    config: AtrConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for Atr<T> {
    type Output = Series<T>;
    type Config = AtrConfig;

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
        atr(data.high(), data.low(), data.close(), self.config.period)
    }
}
