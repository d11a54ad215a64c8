//! Wilder's smoothed average shared by RSI and ATR.

use kline_ta_core::{num::TaFloat, series::Series};

/// Wilder-smooth a per-bar delta over `len` bars.
///
/// `delta(i)` is called once for every `i` in `1..len`. The value at index
/// `period` is the simple mean of the first `period` deltas; after that
/// `avg = (avg * (period - 1) + delta) / period`. Earlier indices are NaN, and
/// a zero `period` or `period >= len` yields an all-NaN series.
///
/// A non-finite delta poisons every later value.
pub(crate) fn wilder_average<T, F>(len: usize, period: usize, mut delta: F) -> Series<T>
where
    T: TaFloat,
    F: FnMut(usize) -> T,
{
    let mut out = Series::nan(len);
    if period == 0 || period >= len {
        return out;
    }

    let n = T::from_usize(period);
    let seed = (1..=period).fold(T::ZERO, |acc, i| acc + delta(i).finite_or_nan());
    let mut avg = seed / n;
    out[period] = avg;

    for i in (period + 1)..len {
        avg = (avg * (n - T::ONE) + delta(i).finite_or_nan()) / n;
        out[i] = avg;
    }

    out
}
