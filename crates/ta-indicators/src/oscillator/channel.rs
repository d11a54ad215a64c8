//! Rolling highest-high / lowest-low channel shared by KDJ and Williams %R.

use kline_ta_core::{
    num::TaFloat,
    series::Series,
    window::{Extremum, RollingExtrema},
};

/// Highest high and lowest low over each trailing `period` window.
///
/// Both lines are NaN until the window fills and while it contains a
/// non-finite value. The slices must be aligned; a zero `period` or one
/// longer than the input gives all-NaN lines.
pub(crate) fn price_channel<T: TaFloat>(highs: &[T], lows: &[T], period: usize) -> (Series<T>, Series<T>) {
    if period == 0 || period > highs.len() {
        return (Series::nan(highs.len()), Series::nan(highs.len()));
    }

    let mut highest = RollingExtrema::new(period, Extremum::Max);
    let mut lowest = RollingExtrema::new(period, Extremum::Min);

    let (hh, ll): (Vec<T>, Vec<T>) = highs
        .iter()
        .zip(lows)
        .map(|(&high, &low)| {
            highest.push(high);
            lowest.push(low);
            (highest.value(), lowest.value())
        })
        .unzip();
    (Series::from_vec(hh), Series::from_vec(ll))
}

/// Where `close` sits inside the channel, from 0 (at the low) to 1 (at the high).
///
/// `None` for a flat channel so each oscillator can pick its neutral reading.
pub(crate) fn channel_position<T: TaFloat>(close: T, highest: T, lowest: T) -> Option<T> {
    if highest.is_nan() || lowest.is_nan() || !close.is_valid() {
        return Some(T::NAN);
    }
    let range = highest - lowest;
    if range == T::ZERO {
        None
    } else {
        Some((close - lowest) / range)
    }
}
