//! Candle (price point) data types.
//!
//! [`PricePoint`] is one OHLCV candle; [`PriceSeries`] stores an ordered run of
//! candles column-wise so indicators can work on contiguous slices.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};
use crate::num::TaFloat;
use crate::series::Series;
use crate::utils::typical_price;

/// A single candle.
///
/// # Invariants
///
/// A well-formed candle satisfies `low <= min(open, close) <= max(open, close) <= high`.
/// The engine does not enforce this; [`PricePoint::is_valid`] checks it for
/// callers that want to.
///
/// # Example
///
/// ```rust
/// use kline_ta_core::PricePoint;
///
/// let candle = PricePoint::new(1_700_000_000_000, 100.0, 105.0, 98.0, 103.0, 1_000.0);
/// assert!(candle.is_valid());
/// assert_eq!(candle.typical_price(), (105.0 + 98.0 + 103.0) / 3.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct PricePoint<T: TaFloat> {
    /// Candle open time, Unix epoch in milliseconds.
    pub timestamp: i64,
    /// Opening price.
    pub open: T,
    /// Highest price.
    pub high: T,
    /// Lowest price.
    pub low: T,
    /// Closing price.
    pub close: T,
    /// Traded volume (base units).
    pub volume: T,
    /// Traded amount (quote units).
    #[cfg_attr(feature = "serde", serde(default))]
    pub amount: T,
}

impl<T: TaFloat> PricePoint<T> {
    /// Create a candle with a zero traded amount.
    #[must_use]
    pub fn new(timestamp: i64, open: T, high: T, low: T, close: T, volume: T) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
            amount: T::ZERO,
        }
    }

    /// Set the traded amount (builder pattern).
    #[must_use]
    pub fn with_amount(mut self, amount: T) -> Self {
        self.amount = amount;
        self
    }

    /// Check that every field is finite and the price ordering holds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.non_finite_field().is_none()
            && self.low <= self.open.min(self.close)
            && self.open.max(self.close) <= self.high
    }

    /// Typical price: (High + Low + Close) / 3.
    #[must_use]
    pub fn typical_price(&self) -> T {
        typical_price(self.high, self.low, self.close)
    }

    /// Name of the first field that is NaN or infinite.
    fn non_finite_field(&self) -> Option<&'static str> {
        [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
            ("volume", self.volume),
            ("amount", self.amount),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_valid())
        .map(|(field, _)| field)
    }
}

/// An ordered run of candles, index 0 = oldest, stored column-wise.
///
/// # Example
///
/// ```rust
/// use kline_ta_core::{PricePoint, PriceSeries};
///
/// let mut candles: PriceSeries<f64> = PriceSeries::new();
/// candles.push(PricePoint::new(1, 100.0, 105.0, 98.0, 103.0, 1_000.0));
/// candles.push(PricePoint::new(2, 103.0, 108.0, 101.0, 107.0, 1_200.0));
///
/// assert_eq!(candles.len(), 2);
/// assert_eq!(candles.close()[1], 107.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct PriceSeries<T: TaFloat> {
    timestamps: Vec<i64>,
    open: Series<T>,
    high: Series<T>,
    low: Series<T>,
    close: Series<T>,
    volume: Series<T>,
    amount: Series<T>,
}

impl<T: TaFloat> Default for PriceSeries<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TaFloat> PriceSeries<T> {
    /// Create a new empty series.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new series with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            timestamps: Vec::with_capacity(capacity),
            open: Series::with_capacity(capacity),
            high: Series::with_capacity(capacity),
            low: Series::with_capacity(capacity),
            close: Series::with_capacity(capacity),
            volume: Series::with_capacity(capacity),
            amount: Series::with_capacity(capacity),
        }
    }

    /// Returns the number of candles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Returns `true` if the series holds no candles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Append a candle.
    pub fn push(&mut self, point: PricePoint<T>) {
        self.timestamps.push(point.timestamp);
        self.open.push(point.open);
        self.high.push(point.high);
        self.low.push(point.low);
        self.close.push(point.close);
        self.volume.push(point.volume);
        self.amount.push(point.amount);
    }

    /// Get the candle at the specified index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<PricePoint<T>> {
        let timestamp = *self.timestamps.get(index)?;
        Some(PricePoint {
            timestamp,
            open: self.open[index],
            high: self.high[index],
            low: self.low[index],
            close: self.close[index],
            volume: self.volume[index],
            amount: self.amount[index],
        })
    }

    /// Returns an iterator over the candles.
    pub fn iter(&self) -> impl Iterator<Item = PricePoint<T>> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// Candle open times.
    #[must_use]
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    /// Opening prices.
    #[must_use]
    pub fn open(&self) -> &[T] {
        self.open.as_slice()
    }

    /// Highest prices.
    #[must_use]
    pub fn high(&self) -> &[T] {
        self.high.as_slice()
    }

    /// Lowest prices.
    #[must_use]
    pub fn low(&self) -> &[T] {
        self.low.as_slice()
    }

    /// Closing prices.
    #[must_use]
    pub fn close(&self) -> &[T] {
        self.close.as_slice()
    }

    /// Traded volumes.
    #[must_use]
    pub fn volume(&self) -> &[T] {
        self.volume.as_slice()
    }

    /// Traded amounts.
    #[must_use]
    pub fn amount(&self) -> &[T] {
        self.amount.as_slice()
    }

    /// Check that every field is finite and timestamps strictly increase.
    ///
    /// The indicators never call this: non-finite values propagate into their
    /// output as NaN. Callers that prefer to refuse corrupted data up front can
    /// run it before computing.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::NonFiniteInput`] for the first NaN/infinite
    /// field, or [`IndicatorError::NonIncreasingTimestamp`] for the first
    /// out-of-order candle.
    pub fn validate(&self) -> Result<()> {
        for (index, point) in self.iter().enumerate() {
            if let Some(field) = point.non_finite_field() {
                return Err(IndicatorError::NonFiniteInput { index, field });
            }
            if index > 0 && point.timestamp <= self.timestamps[index - 1] {
                return Err(IndicatorError::NonIncreasingTimestamp { index });
            }
        }
        Ok(())
    }
}

impl<T: TaFloat> FromIterator<PricePoint<T>> for PriceSeries<T> {
    fn from_iter<I: IntoIterator<Item = PricePoint<T>>>(iter: I) -> Self {
        let mut series = Self::new();
        for point in iter {
            series.push(point);
        }
        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn candle(timestamp: i64, close: f64) -> PricePoint<f64> {
        PricePoint::new(timestamp, close, close + 1.0, close - 1.0, close, 10.0)
    }

    #[test]
    fn test_price_point_valid() {
        assert!(candle(1, 100.0).is_valid());

        let inverted = PricePoint::new(1, 100.0, 99.0, 101.0, 100.0, 10.0);
        assert!(!inverted.is_valid());

        let corrupted = PricePoint::new(1, 100.0, f64::INFINITY, 99.0, 100.0, 10.0);
        assert!(!corrupted.is_valid());
    }

    #[test]
    fn test_typical_price() {
        let point = PricePoint::new(1, 10.0, 12.0, 9.0, 11.0, 1.0);
        assert_relative_eq!(point.typical_price(), 32.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_series_columns() {
        let series: PriceSeries<f64> = (1..=3).map(|i| candle(i, i as f64 * 10.0)).collect();
        assert_eq!(series.len(), 3);
        assert_eq!(series.close(), &[10.0, 20.0, 30.0]);
        assert_eq!(series.high(), &[11.0, 21.0, 31.0]);
        assert_eq!(series.timestamps(), &[1, 2, 3]);
        assert_eq!(series.get(1), Some(candle(2, 20.0)));
        assert_eq!(series.get(3), None);
    }

    #[test]
    fn test_with_amount() {
        let point = candle(1, 10.0).with_amount(250.0);
        let series: PriceSeries<f64> = std::iter::once(point).collect();
        assert_eq!(series.amount(), &[250.0]);
    }

    #[test]
    fn test_validate_ok() {
        let series: PriceSeries<f64> = (1..=5).map(|i| candle(i, 100.0)).collect();
        assert!(series.validate().is_ok());
    }

    #[test]
    fn test_validate_non_finite() {
        let mut series: PriceSeries<f64> = (1..=3).map(|i| candle(i, 100.0)).collect();
        series.push(PricePoint::new(4, 100.0, 101.0, 99.0, f64::NAN, 10.0));
        assert_eq!(
            series.validate(),
            Err(IndicatorError::NonFiniteInput {
                index: 3,
                field: "close"
            })
        );
    }

    #[test]
    fn test_validate_timestamps() {
        let series: PriceSeries<f64> = [candle(1, 1.0), candle(2, 1.0), candle(2, 1.0)]
            .into_iter()
            .collect();
        assert_eq!(
            series.validate(),
            Err(IndicatorError::NonIncreasingTimestamp { index: 2 })
        );
    }
}
