//! On-Balance Volume (OBV) indicator.

use core::marker::PhantomData;

use kline_ta_core::{
    num::TaFloat, price::PriceSeries, series::Series, traits::Indicator, utils::aligned_len,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for OBV. The indicator takes no parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObvConfig;

/// Compute On-Balance Volume.
///
/// OBV[0] = volume[0]; each later bar adds its volume on an up close,
/// subtracts it on a down close and carries the total on an unchanged close.
/// A non-finite close or volume makes the running total NaN from there on.
///
/// # Example
///
/// ```rust
/// use kline_ta_indicators::oscillator::obv;
///
/// let result = obv(&[10.0, 11.0, 11.0, 9.0], &[100.0, 50.0, 70.0, 30.0]);
/// assert_eq!(result.as_slice(), &[100.0, 150.0, 150.0, 120.0]);
/// ```
#[must_use]
pub fn obv<T: TaFloat>(closes: &[T], volumes: &[T]) -> Series<T> {
    let len = match aligned_len(&[closes, volumes]) {
        Some(len) if len > 0 => len,
        _ => return Series::nan(closes.len()),
    };

    let mut out = Series::with_capacity(len);
    let mut total = if closes[0].is_valid() {
        volumes[0].finite_or_nan()
    } else {
        T::NAN
    };
    out.push(total);

    for i in 1..len {
        let (close, prev, volume) = (closes[i], closes[i - 1], volumes[i]);
        total = if !(close.is_valid() && volume.is_valid()) {
            T::NAN
        } else if close > prev {
            total + volume
        } else if close < prev {
            total - volume
        } else {
            total
        };
        out.push(total);
    }
    out
}

/// On-Balance Volume indicator.
#[derive(Debug, Clone)]
pub struct Obv<T: TaFloat> {
    config: ObvConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for Obv<T> {
    type Output = Series<T>;
    type Config = ObvConfig;

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
        obv(data.close(), data.volume())
    }
}
