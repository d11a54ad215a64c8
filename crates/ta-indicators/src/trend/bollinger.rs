//! Bollinger Bands indicator.
//!
//! Bollinger Bands are volatility bands placed above and below a moving average.

use core::marker::PhantomData;

use kline_ta_core::{
    error::Result, multi::MultiSeries, num::TaFloat, price::PriceSeries, series::Series,
    traits::Indicator, utils::population_std_dev,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::sma::sma;

/// Configuration for Bollinger Bands.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BollingerConfig {
    /// The window size for the moving average (default: 20).
    pub period: usize,
    /// Number of standard deviations for bands (default: 2.0).
    pub std_dev_multiplier: f64,
}

impl Default for BollingerConfig {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev_multiplier: 2.0,
        }
    }
}

impl BollingerConfig {
    /// Create a new Bollinger Bands configuration.
    pub fn new(period: usize, std_dev_multiplier: f64) -> Self {
        Self {
            period,
            std_dev_multiplier,
        }
    }
}

/// Bollinger Bands series output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct BollingerSeries<T: TaFloat> {
    /// Upper band (middle + k * std).
    pub upper: Series<T>,
    /// Middle band (SMA).
    pub middle: Series<T>,
    /// Lower band (middle - k * std).
    pub lower: Series<T>,
}

impl<T: TaFloat> BollingerSeries<T> {
    fn nan(len: usize) -> Self {
        Self {
            upper: Series::nan(len),
            middle: Series::nan(len),
            lower: Series::nan(len),
        }
    }

    /// Convert into a named record with lines `upper`, `middle`, `lower`.
    ///
    /// # Errors
    ///
    /// Returns an error if the lines differ in length.
    pub fn into_multi(self) -> Result<MultiSeries<T>> {
        MultiSeries::from_lines(vec![
            ("upper".to_string(), self.upper),
            ("middle".to_string(), self.middle),
            ("lower".to_string(), self.lower),
        ])
    }
}

/// Compute Bollinger Bands over `data`.
///
/// The deviation is the population standard deviation (divide by `period`)
/// of each window around its SMA. All three lines are NaN before the window
/// fills. A zero `period`, or a negative or non-finite multiplier, yields
/// all-NaN lines.
///
/// # Example
///
/// ```rust
/// use kline_ta_indicators::trend::bollinger;
///
/// let bands = bollinger(&[1.0_f64, 3.0, 1.0, 3.0], 2, 2.0);
/// assert!(bands.middle[0].is_nan());
/// assert_eq!(bands.middle[1], 2.0);
/// assert_eq!(bands.upper[1], 4.0); // std = 1
/// assert_eq!(bands.lower[1], 0.0);
/// ```
#[must_use]
pub fn bollinger<T: TaFloat>(data: &[T], period: usize, std_dev_multiplier: T) -> BollingerSeries<T> {
    let len = data.len();
    if period == 0 || !std_dev_multiplier.is_valid() || std_dev_multiplier < T::ZERO {
        return BollingerSeries::nan(len);
    }

    let middle = sma(data, period);
    let mut upper = Series::nan(len);
    let mut lower = Series::nan(len);

    for i in period.saturating_sub(1)..len {
        let mean = middle[i];
        if mean.is_nan() {
            continue;
        }
        let band = std_dev_multiplier * population_std_dev(&data[i + 1 - period..=i], mean);
        upper[i] = mean + band;
        lower[i] = mean - band;
    }

    BollingerSeries {
        upper,
        middle,
        lower,
    }
}

/// Bollinger Bands indicator over closing prices.
///
/// # Formula
///
/// Middle = SMA(Price, n)
/// StdDev = sqrt(sum((Price - Middle)^2) / n)  // Population std
/// Upper = Middle + k * StdDev
/// Lower = Middle - k * StdDev
#[derive(Debug, Clone)]
pub struct BollingerBands<T: TaFloat> {
    config: BollingerConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for BollingerBands<T> {
    type Output = BollingerSeries<T>;
    type Config = BollingerConfig;

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
        bollinger(
            data.close(),
            self.config.period,
            T::from_f64_lossy(self.config.std_dev_multiplier),
        )
    }
}
