//! KDJ stochastic oscillator.
//!
//! RSV places the close inside the recent high/low channel; K and D smooth it
//! with simple moving averages and J = 3K - 2D exaggerates their divergence.

use core::marker::PhantomData;

use kline_ta_core::{
    error::Result, multi::MultiSeries, num::TaFloat, price::PriceSeries, series::Series,
    traits::Indicator, utils::aligned_len,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::channel::{channel_position, price_channel};
use crate::trend::sma;

/// Configuration for the KDJ indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KdjConfig {
    /// RSV lookback period (default: 9).
    pub period: usize,
    /// SMA period applied to RSV to get K (default: 3).
    pub k_smooth: usize,
    /// SMA period applied to K to get D (default: 3).
    pub d_smooth: usize,
}

impl Default for KdjConfig {
    fn default() -> Self {
        Self {
            period: 9,
            k_smooth: 3,
            d_smooth: 3,
        }
    }
}

impl KdjConfig {
    /// Create a new KDJ configuration.
    pub fn new(period: usize, k_smooth: usize, d_smooth: usize) -> Self {
        Self {
            period,
            k_smooth,
            d_smooth,
        }
    }
}

/// KDJ output lines.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct KdjSeries<T: TaFloat> {
    /// SMA of RSV.
    pub k: Series<T>,
    /// SMA of K.
    pub d: Series<T>,
    /// 3K - 2D.
    pub j: Series<T>,
}

impl<T: TaFloat> KdjSeries<T> {
    fn nan(len: usize) -> Self {
        Self {
            k: Series::nan(len),
            d: Series::nan(len),
            j: Series::nan(len),
        }
    }

    /// Convert into a named record with lines `k`, `d`, `j`.
    ///
    /// # Errors
    ///
    /// Returns an error if the lines differ in length.
    pub fn into_multi(self) -> Result<MultiSeries<T>> {
        MultiSeries::from_lines(vec![
            ("k".to_string(), self.k),
            ("d".to_string(), self.d),
            ("j".to_string(), self.j),
        ])
    }
}

/// Raw stochastic value, 50 for a flat channel.
#[must_use]
pub fn rsv<T: TaFloat>(highs: &[T], lows: &[T], closes: &[T], period: usize) -> Series<T> {
    let Some(len) = aligned_len(&[highs, lows, closes]) else {
        return Series::nan(highs.len());
    };
    if period == 0 {
        return Series::nan(len);
    }

    let (highest, lowest) = price_channel(highs, lows, period);
    (0..len)
        .map(|i| channel_position(closes[i], highest[i], lowest[i]).map_or(T::FIFTY, |p| T::HUNDRED * p))
        .collect()
}

/// Compute KDJ.
///
/// K is first defined at `period + k_smooth - 2` and D and J at
/// `period + k_smooth + d_smooth - 3`. Any zero period or misaligned inputs
/// yield all-NaN lines.
///
/// # Example
///
/// ```rust
/// use kline_ta_indicators::oscillator::kdj;
///
/// let closes = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let lines = kdj(&closes, &closes, &closes, 2, 1, 1);
/// assert_eq!(lines.k[1], 100.0); // close at the top of the channel
/// assert_eq!(lines.j[1], 100.0);
/// ```
#[must_use]
pub fn kdj<T: TaFloat>(
    highs: &[T],
    lows: &[T],
    closes: &[T],
    period: usize,
    k_smooth: usize,
    d_smooth: usize,
) -> KdjSeries<T> {
    if period == 0 || k_smooth == 0 || d_smooth == 0 {
        return KdjSeries::nan(highs.len());
    }
    if aligned_len(&[highs, lows, closes]).is_none() {
        return KdjSeries::nan(highs.len());
    }

    let raw = rsv(highs, lows, closes, period);
    let k = sma(raw.as_slice(), k_smooth);
    let d = sma(k.as_slice(), d_smooth);
    let j = k.zip_with(&d, |k, d| T::THREE * k - T::TWO * d);

    KdjSeries { k, d, j }
}

/// KDJ indicator.
#[derive(Debug, Clone)]
pub struct Kdj<T: TaFloat> {
    config: KdjConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for Kdj<T> {
    type Output = KdjSeries<T>;
    type Config = KdjConfig;

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
        self.config
            .period
            .saturating_add(self.config.k_smooth)
            .saturating_add(self.config.d_smooth)
            .saturating_sub(2)
    }

    fn calculate(&self, data: &PriceSeries<T>) -> Self::Output {
        kdj(
            data.high(),
            data.low(),
            data.close(),
            self.config.period,
            self.config.k_smooth,
            self.config.d_smooth,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_kdj_default_config() {
        let config = KdjConfig::default();
        assert_eq!((config.period, config.k_smooth, config.d_smooth), (9, 3, 3));
    }

    #[test]
    fn test_rsv_hand_computed() {
        let highs = [10.0_f64, 12.0, 11.0];
        let lows = [8.0, 9.0, 7.0];
        let closes = [9.0, 11.0, 8.0];
        let raw = rsv(&highs, &lows, &closes, 2);
        assert!(raw[0].is_nan());
        // channel [8, 12], close 11
        assert_relative_eq!(raw[1], 75.0, epsilon = 1e-12);
        // channel [7, 12], close 8
        assert_relative_eq!(raw[2], 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rsv_flat_window_is_fifty() {
        let flat = [5.0; 4];
        let raw = rsv(&flat, &flat, &flat, 3);
        assert_eq!(raw[2], 50.0);
        assert_eq!(raw[3], 50.0);
    }

    #[test]
    fn test_kdj_smoothing_and_j() {
        let highs = [10.0_f64, 12.0, 11.0, 13.0, 12.0];
        let lows = [8.0, 9.0, 7.0, 10.0, 9.0];
        let closes = [9.0, 11.0, 8.0, 12.0, 10.0];
        let raw = rsv(&highs, &lows, &closes, 2);
        let lines = kdj(&highs, &lows, &closes, 2, 2, 2);

        assert!(lines.k[1].is_nan());
        assert_relative_eq!(lines.k[2], (raw[1] + raw[2]) / 2.0, epsilon = 1e-12);
        assert!(lines.d[2].is_nan());
        assert_relative_eq!(lines.d[3], (lines.k[2] + lines.k[3]) / 2.0, epsilon = 1e-12);
        assert_relative_eq!(lines.j[3], 3.0 * lines.k[3] - 2.0 * lines.d[3], epsilon = 1e-12);
        assert_eq!(Kdj::<f64>::new(KdjConfig::new(2, 2, 2)).min_periods(), 4);
    }

    #[test]
    fn test_kdj_invalid_params() {
        let data = [1.0, 2.0, 3.0];
        assert!(kdj(&data, &data, &data, 0, 3, 3).k.is_all_nan());
        assert!(kdj(&data, &data, &data, 2, 0, 3).d.is_all_nan());
        assert!(kdj(&data, &data, &data[..2], 2, 1, 1).j.is_all_nan());
        assert_eq!(kdj(&data, &data, &data[..2], 2, 1, 1).j.len(), 3);
        assert!(kdj(&data, &data, &data, usize::MAX, 3, 3).k.is_all_nan());
        assert!(rsv(&data, &data, &data, usize::MAX).is_all_nan());
        let indicator = Kdj::<f64>::new(KdjConfig::new(usize::MAX, usize::MAX, 3));
        assert_eq!(indicator.min_periods(), usize::MAX - 2);
    }
}
