//! Kaufman Adaptive Moving Average (KAMA) indicator.
//!
//! KAMA scales its smoothing constant by the efficiency ratio of recent price
//! action: it follows price closely in a clean trend and flattens out in a
//! choppy market.

use core::marker::PhantomData;

use kline_ta_core::{
    num::TaFloat, price::PriceSeries, series::Series, traits::Indicator, window::RollingSum,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the KAMA indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KamaConfig {
    /// Efficiency ratio lookback (default: 10).
    pub period: usize,
    /// Fast EMA period bounding the smoothing constant (default: 2).
    pub fast_period: usize,
    /// Slow EMA period bounding the smoothing constant (default: 30).
    pub slow_period: usize,
}

impl Default for KamaConfig {
    fn default() -> Self {
        Self {
            period: 10,
            fast_period: 2,
            slow_period: 30,
        }
    }
}

impl KamaConfig {
    /// Create a new KAMA configuration.
    pub fn new(period: usize, fast_period: usize, slow_period: usize) -> Self {
        Self {
            period,
            fast_period,
            slow_period,
        }
    }
}

fn smoothing_constant<T: TaFloat>(period: usize) -> T {
    T::TWO / (T::from_usize(period) + T::ONE)
}

/// Efficiency ratio, zero for a window with no movement.
fn efficiency_ratio<T: TaFloat>(change: T, noise: T) -> T {
    if change.is_nan() || noise.is_nan() {
        T::NAN
    } else if noise > T::ZERO {
        (change / noise).min(T::ONE)
    } else {
        T::ZERO
    }
}

/// Compute the Kaufman Adaptive Moving Average of `data`.
///
/// ```text
/// ER  = |p[i] - p[i-period]| / sum(|p[j] - p[j-1]|, j in (i-period, i])
/// SC  = (ER * (fastSC - slowSC) + slowSC)^2
/// KAMA[i] = KAMA[i-1] + SC * (p[i] - KAMA[i-1])
/// ```
///
/// Seeded with `KAMA[period] = data[period]`; earlier values are NaN. A zero
/// period, `fast_period >= slow_period`, or input no longer than `period`
/// yields an all-NaN series.
///
/// # Example
///
/// ```rust
/// use kline_ta_indicators::trend::kama;
///
/// let result = kama(&[5.0_f64; 6], 3, 2, 30);
/// assert!(result[2].is_nan());
/// assert_eq!(result[3], 5.0);
/// assert_eq!(result[5], 5.0);
/// ```
#[must_use]
pub fn kama<T: TaFloat>(data: &[T], period: usize, fast_period: usize, slow_period: usize) -> Series<T> {
    let len = data.len();
    let mut out = Series::nan(len);
    if period == 0 || fast_period == 0 || fast_period >= slow_period || period >= len {
        return out;
    }

    let fast_sc = smoothing_constant::<T>(fast_period);
    let slow_sc = smoothing_constant::<T>(slow_period);

    let mut volatility = RollingSum::new(period);
    for j in 1..=period {
        volatility.push((data[j] - data[j - 1]).abs());
    }

    let mut prev = data[period].finite_or_nan();
    out[period] = prev;

    for i in (period + 1)..len {
        volatility.push((data[i] - data[i - 1]).abs());
        let change = (data[i] - data[i - period]).abs();
        let er = efficiency_ratio(change, volatility.sum());
        let sc = (er * (fast_sc - slow_sc) + slow_sc).powi(2);
        prev = prev + sc * (data[i] - prev);
        out[i] = prev;
    }

    out
}

/// Kaufman Adaptive Moving Average indicator over closing prices.
#[derive(Debug, Clone)]
pub struct Kama<T: TaFloat> {
    config: KamaConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for Kama<T> {
    type Output = Series<T>;
    type Config = KamaConfig;

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
        kama(
            data.close(),
            self.config.period,
            self.config.fast_period,
            self.config.slow_period,
        )
    }
}
