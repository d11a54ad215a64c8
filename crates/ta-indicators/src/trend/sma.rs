//! Simple Moving Average (SMA) indicator.
//!
//! The SMA is the unweighted mean of the previous n data points.

use core::marker::PhantomData;

use kline_ta_core::{
    num::TaFloat, price::PriceSeries, series::Series, traits::Indicator, window::RollingSum,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the SMA indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SmaConfig {
    /// The window size for the moving average (default: 20).
    pub period: usize,
}

impl Default for SmaConfig {
    fn default() -> Self {
        Self { period: 20 }
    }
}

impl SmaConfig {
    /// Create a new SMA configuration with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

/// Compute the Simple Moving Average of `data`.
///
/// The first `period - 1` values are NaN. A `period` of zero or longer than
/// the input yields an all-NaN series; `period == 1` returns the input.
/// Runs in O(n) with a running sum.
///
/// # Example
///
/// ```rust
/// use kline_ta_indicators::trend::sma;
///
/// let result = sma(&[1.0_f64, 2.0, 3.0, 4.0, 5.0], 3);
/// assert!(result[0].is_nan());
/// assert!(result[1].is_nan());
/// assert_eq!(result[2], 2.0); // (1+2+3)/3
/// assert_eq!(result[4], 4.0); // (3+4+5)/3
/// ```
#[must_use]
pub fn sma<T: TaFloat>(data: &[T], period: usize) -> Series<T> {
    if period == 0 || period > data.len() {
        return Series::nan(data.len());
    }

    let mut window = RollingSum::new(period);
    data.iter()
        .map(|&value| {
            window.push(value);
            window.mean()
        })
        .collect()
}

/// Simple Moving Average indicator over closing prices.
///
/// # Formula
///
/// SMA = (P1 + P2 + ... + Pn) / n
#[derive(Debug, Clone)]
pub struct Sma<T: TaFloat> {
    config: SmaConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for Sma<T> {
    type Output = Series<T>;
    type Config = SmaConfig;

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
        sma(data.close(), self.config.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use kline_ta_core::price::PricePoint;

    fn create_test_series(closes: &[f64]) -> PriceSeries<f64> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| PricePoint::new(i as i64, c, c, c, c, 1000.0))
            .collect()
    }

    #[test]
    fn test_sma_default_config() {
        assert_eq!(SmaConfig::default().period, 20);
    }

    #[test]
    fn test_sma_calculate() {
        let sma = Sma::<f64>::new(SmaConfig::new(3));
        let result = sma.calculate(&create_test_series(&[1.0, 2.0, 3.0, 4.0, 5.0]));

        assert_eq!(result.len(), 5);
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert_relative_eq!(result[2], 2.0, epsilon = 1e-10);
        assert_relative_eq!(result[3], 3.0, epsilon = 1e-10);
        assert_relative_eq!(result[4], 4.0, epsilon = 1e-10);
    }

    #[test]
    fn test_sma_one_to_ten() {
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        let result = sma(&data, 5);
        assert_eq!(result[4], 3.0);
        assert_eq!(result[9], 8.0);
    }

    #[test]
    fn test_sma_identity() {
        let data = [3.5, -1.25, 7.0, 0.1, 0.2, 1e9];
        assert_eq!(sma(&data, 1).as_slice(), &data);
    }

    #[test]
    fn test_sma_constant_input() {
        let result = sma(&[10.0_f64; 5], 3);
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert_eq!(&result.as_slice()[2..], &[10.0, 10.0, 10.0]);
    }

    #[test]
    fn test_sma_invalid_period() {
        let data = [1.0, 2.0, 3.0];
        assert!(sma(&data, 0).is_all_nan());
        assert_eq!(sma(&data, 0).len(), 3);
        assert!(sma(&data, 4).is_all_nan());
        assert!(sma::<f64>(&[], 3).is_empty());
    }

    #[test]
    fn test_sma_nan_only_poisons_its_windows() {
        let data = [1.0, 2.0, f64::NAN, 4.0, 5.0, 6.0];
        let result = sma(&data, 2);
        assert_relative_eq!(result[1], 1.5);
        assert!(result[2].is_nan());
        assert!(result[3].is_nan());
        assert_relative_eq!(result[4], 4.5);
        assert_relative_eq!(result[5], 5.5);
    }

    #[test]
    fn test_sma_min_periods() {
        let sma = Sma::<f64>::new(SmaConfig::new(7));
        assert_eq!(sma.min_periods(), 7);
        assert_eq!(sma.config().period, 7);
    }
}
