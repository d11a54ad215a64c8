//! Commodity Channel Index (CCI) indicator.

use core::marker::PhantomData;

use kline_ta_core::{
    num::TaFloat,
    price::PriceSeries,
    series::Series,
    traits::Indicator,
    utils::{aligned_len, mean_abs_deviation, typical_price},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::trend::sma;

/// Lambert's constant, scaling roughly 70-80% of CCI values into ±100.
const CCI_CONSTANT: f64 = 0.015;

/// Configuration for the CCI indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CciConfig {
    /// Lookback period (default: 20).
    pub period: usize,
}

impl Default for CciConfig {
    fn default() -> Self {
        Self { period: 20 }
    }
}

impl CciConfig {
    /// Create a new CCI configuration.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

/// Compute the Commodity Channel Index.
///
/// CCI = (TP - SMA(TP)) / (0.015 * mean absolute deviation of TP), with
/// TP = (high + low + close) / 3. A window with zero deviation reads 0.
///
/// # Example
///
/// ```rust
/// use kline_ta_indicators::oscillator::cci;
///
/// let flat = [10.0_f64; 4];
/// let result = cci(&flat, &flat, &flat, 3);
/// assert!(result[1].is_nan());
/// assert_eq!(result[3], 0.0);
/// ```
#[must_use]
pub fn cci<T: TaFloat>(highs: &[T], lows: &[T], closes: &[T], period: usize) -> Series<T> {
    let Some(len) = aligned_len(&[highs, lows, closes]) else {
        return Series::nan(highs.len());
    };

    let typical: Vec<T> = (0..len)
        .map(|i| typical_price(highs[i], lows[i], closes[i]).finite_or_nan())
        .collect();
    let mean = sma(&typical, period);
    let constant = T::from_f64_lossy(CCI_CONSTANT);

    let mut out = Series::nan(len);
    for i in period.saturating_sub(1)..len {
        if mean[i].is_nan() {
            continue;
        }
        let deviation = mean_abs_deviation(&typical[i + 1 - period..=i], mean[i]);
        out[i] = if deviation == T::ZERO {
            T::ZERO
        } else {
            (typical[i] - mean[i]) / (constant * deviation)
        };
    }
    out
}

/// Commodity Channel Index indicator.
#[derive(Debug, Clone)]
pub struct Cci<T: TaFloat> {
    config: CciConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for Cci<T> {
    type Output = Series<T>;
    type Config = CciConfig;

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
        cci(data.high(), data.low(), data.close(), self.config.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cci_hand_computed() {
        // Typical prices equal closes here: [1, 2, 3].
        let closes = [1.0, 2.0, 3.0];
        let result = cci(&closes, &closes, &closes, 3);
        // mean 2, mad 2/3 -> (3 - 2) / (0.015 * 2/3) = 100
        assert_relative_eq!(result[2], 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cci_uses_typical_price() {
        let highs = [12.0, 14.0];
        let lows = [6.0, 8.0];
        let closes = [9.0, 8.0];
        // TP = [9, 10]: mean 9.5, mad 0.5
        let result = cci(&highs, &lows, &closes, 2);
        assert_relative_eq!(result[1], 0.5 / (0.015 * 0.5), epsilon = 1e-9);
    }

    #[test]
    fn test_cci_zero_deviation() {
        let flat = [0.1; 6];
        let result = cci(&flat, &flat, &flat, 4);
        for i in 3..6 {
            assert_eq!(result[i], 0.0);
        }
    }

    #[test]
    fn test_cci_invalid() {
        let data = [1.0, 2.0, 3.0];
        assert!(cci(&data, &data, &data, 0).is_all_nan());
        assert!(cci(&data, &data, &data, 4).is_all_nan());
        assert!(cci(&data, &data[..2], &data, 2).is_all_nan());
    }

    #[test]
    fn test_cci_nan_window_recovers() {
        let mut data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        data[1] = f64::NAN;
        let result = cci(&data, &data, &data, 2);
        assert!(result[1].is_nan());
        assert!(result[2].is_nan());
        assert!(result[3].is_finite());
    }
}
