//! Moving Average Convergence Divergence (MACD) indicator.

use core::marker::PhantomData;

use kline_ta_core::{
    error::Result, multi::MultiSeries, num::TaFloat, price::PriceSeries, series::Series,
    traits::Indicator,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::trend::ema;

/// Configuration for the MACD indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MacdConfig {
    /// Fast EMA period (default: 12).
    pub fast_period: usize,
    /// Slow EMA period (default: 26).
    pub slow_period: usize,
    /// Signal line EMA period (default: 9).
    pub signal_period: usize,
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

impl MacdConfig {
    /// Create a new MACD configuration.
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        Self {
            fast_period,
            slow_period,
            signal_period,
        }
    }
}

/// MACD output lines.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct MacdSeries<T: TaFloat> {
    /// EMA(fast) - EMA(slow).
    pub macd: Series<T>,
    /// EMA of the MACD line.
    pub signal: Series<T>,
    /// MACD - signal.
    pub histogram: Series<T>,
}

impl<T: TaFloat> MacdSeries<T> {
    fn nan(len: usize) -> Self {
        Self {
            macd: Series::nan(len),
            signal: Series::nan(len),
            histogram: Series::nan(len),
        }
    }

    /// Convert into a named record with lines `macd`, `signal`, `histogram`.
    ///
    /// # Errors
    ///
    /// Returns an error if the lines differ in length.
    pub fn into_multi(self) -> Result<MultiSeries<T>> {
        MultiSeries::from_lines(vec![
            ("macd".to_string(), self.macd),
            ("signal".to_string(), self.signal),
            ("histogram".to_string(), self.histogram),
        ])
    }
}

/// Compute MACD over `data`.
///
/// All three lines inherit EMA's seeding, so they are defined from index 0
/// (where MACD and the histogram are both zero). A zero period or
/// `fast_period >= slow_period` yields all-NaN lines.
///
/// # Example
///
/// ```rust
/// use kline_ta_indicators::oscillator::macd;
///
/// let lines = macd(&[10.0, 11.0, 12.0, 13.0], 2, 4, 2);
/// assert_eq!(lines.macd[0], 0.0);
/// assert!(lines.macd[3] > 0.0); // fast EMA leads in an uptrend
/// ```
#[must_use]
pub fn macd<T: TaFloat>(data: &[T], fast_period: usize, slow_period: usize, signal_period: usize) -> MacdSeries<T> {
    if fast_period == 0 || signal_period == 0 || fast_period >= slow_period {
        return MacdSeries::nan(data.len());
    }

    let fast = ema(data, fast_period);
    let slow = ema(data, slow_period);
    let macd = fast.zip_with(&slow, |f, s| f - s);
    let signal = ema(macd.as_slice(), signal_period);
    let histogram = macd.zip_with(&signal, |m, s| m - s);

    MacdSeries {
        macd,
        signal,
        histogram,
    }
}

/// MACD indicator over closing prices.
///
/// # Formula
///
/// MACD = EMA(close, fast) - EMA(close, slow)
/// Signal = EMA(MACD, signal)
/// Histogram = MACD - Signal
#[derive(Debug, Clone)]
pub struct Macd<T: TaFloat> {
    config: MacdConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for Macd<T> {
    type Output = MacdSeries<T>;
    type Config = MacdConfig;

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
        macd(
            data.close(),
            self.config.fast_period,
            self.config.slow_period,
            self.config.signal_period,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_macd_default_config() {
        let config = MacdConfig::default();
        assert_eq!((config.fast_period, config.slow_period, config.signal_period), (12, 26, 9));
    }

    #[test]
    fn test_macd_lines_relations() {
        let data: Vec<f64> = (0..40).map(|i| 100.0 + (f64::from(i) * 0.3).sin() * 5.0).collect();
        let lines = macd(&data, 12, 26, 9);
        let fast = ema(&data, 12);
        let slow = ema(&data, 26);
        for i in 0..data.len() {
            assert_relative_eq!(lines.macd[i], fast[i] - slow[i], epsilon = 1e-12);
            assert_relative_eq!(lines.histogram[i], lines.macd[i] - lines.signal[i], epsilon = 1e-12);
        }
        let signal = ema(lines.macd.as_slice(), 9);
        assert_eq!(lines.signal, signal);
    }

    #[test]
    fn test_macd_constant_input_is_zero() {
        let lines = macd(&[50.0; 30], 3, 6, 4);
        for i in 0..30 {
            assert_relative_eq!(lines.macd[i], 0.0, epsilon = 1e-9);
            assert_relative_eq!(lines.histogram[i], 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_macd_invalid_periods() {
        let data = [1.0, 2.0, 3.0];
        assert!(macd(&data, 0, 26, 9).macd.is_all_nan());
        assert!(macd(&data, 26, 12, 9).signal.is_all_nan());
        assert!(macd(&data, 12, 12, 9).histogram.is_all_nan());
        assert!(macd(&data, 12, 26, 0).macd.is_all_nan());
        assert_eq!(macd(&data, 26, 12, 9).macd.len(), 3);
    }

    #[test]
    fn test_macd_into_multi_order() {
        let lines = macd(&[1.0, 2.0], 1, 2, 1).into_multi().unwrap();
        assert_eq!(lines.line_names(), vec!["macd", "signal", "histogram"]);
    }
}
