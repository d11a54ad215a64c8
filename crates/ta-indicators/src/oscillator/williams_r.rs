//! Williams %R indicator.
//!
//! Williams %R is a momentum indicator that measures overbought/oversold levels.

use core::marker::PhantomData;

use kline_ta_core::{
    num::TaFloat, price::PriceSeries, series::Series, traits::Indicator, utils::aligned_len,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::channel::{channel_position, price_channel};

/// Configuration for Williams %R.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WilliamsRConfig {
    /// Lookback period (default: 14).
    pub period: usize,
}

impl Default for WilliamsRConfig {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl WilliamsRConfig {
    /// Create a new configuration.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

/// Compute Williams %R, ranging from -100 (close at the low) to 0 (at the high).
///
/// A flat channel reads -50.
#[must_use]
pub fn williams_r<T: TaFloat>(highs: &[T], lows: &[T], closes: &[T], period: usize) -> Series<T> {
    let len = match aligned_len(&[highs, lows, closes]) {
        Some(len) if period > 0 => len,
        _ => return Series::nan(highs.len()),
    };

    let (highest, lowest) = price_channel(highs, lows, period);
    (0..len)
        .map(|i| {
            channel_position(closes[i], highest[i], lowest[i])
                .map_or(-T::FIFTY, |p| -T::HUNDRED * (T::ONE - p))
        })
        .collect()
}

/// Williams %R indicator.
///
/// # Formula
///
/// %R = -100 * (Highest High - Close) / (Highest High - Lowest Low)
#[derive(Debug, Clone)]
pub struct WilliamsR<T: TaFloat> {
    config: WilliamsRConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for WilliamsR<T> {
    type Output = Series<T>;
    type Config = WilliamsRConfig;

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
        self.config.period
    }

    fn calculate(&self, data: &PriceSeries<T>) -> Self::Output {
        williams_r(data.high(), data.low(), data.close(), self.config.period)
    }
}
