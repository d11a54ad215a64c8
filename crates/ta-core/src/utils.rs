//! Small numeric building blocks shared by several indicators.

use crate::num::TaFloat;

/// Returns `true` when every value in the window equals the first one.
///
/// Used to give flat windows an exact zero deviation instead of the rounding
/// residue a floating-point mean can leave behind.
#[must_use]
pub fn is_flat<T: TaFloat>(window: &[T]) -> bool {
    match window.split_first() {
        Some((&first, rest)) => rest.iter().all(|&x| x == first),
        None => true,
    }
}

/// Population standard deviation (divide by `n`) of a window around `mean`.
///
/// A flat window yields exactly zero.
///
/// # Example
///
/// ```rust
/// use kline_ta_core::utils::population_std_dev;
///
/// let window = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(population_std_dev(&window, 5.0), 2.0);
/// ```
#[must_use]
pub fn population_std_dev<T: TaFloat>(window: &[T], mean: T) -> T {
    if window.is_empty() {
        return T::NAN;
    }
    if is_flat(window) {
        return if window[0].is_valid() { T::ZERO } else { T::NAN };
    }
    let sum_sq = window.iter().fold(T::ZERO, |acc, &x| {
        let diff = x - mean;
        acc + diff * diff
    });
    (sum_sq / T::from_usize(window.len())).sqrt()
}

/// Mean absolute deviation of a window around `mean`.
///
/// A flat window yields exactly zero.
#[must_use]
pub fn mean_abs_deviation<T: TaFloat>(window: &[T], mean: T) -> T {
    if window.is_empty() {
        return T::NAN;
    }
    if is_flat(window) {
        return if window[0].is_valid() { T::ZERO } else { T::NAN };
    }
    let sum = window.iter().fold(T::ZERO, |acc, &x| acc + (x - mean).abs());
    sum / T::from_usize(window.len())
}

/// Typical price: (High + Low + Close) / 3.
#[inline]
#[must_use]
pub fn typical_price<T: TaFloat>(high: T, low: T, close: T) -> T {
    (high + low + close) / T::THREE
}

/// True range of a candle given the previous close.
///
/// TR = max(High - Low, |High - PrevClose|, |Low - PrevClose|), NaN if any
/// input is non-finite.
#[must_use]
pub fn true_range<T: TaFloat>(high: T, low: T, prev_close: T) -> T {
    if !(high.is_valid() && low.is_valid() && prev_close.is_valid()) {
        return T::NAN;
    }
    let hl = high - low;
    let hc = (high - prev_close).abs();
    let lc = (low - prev_close).abs();
    hl.max(hc).max(lc)
}

/// Common length of aligned input columns, `None` if they disagree.
#[must_use]
pub fn aligned_len<T>(columns: &[&[T]]) -> Option<usize> {
    let (first, rest) = columns.split_first()?;
    rest.iter()
        .all(|column| column.len() == first.len())
        .then_some(first.len())
}
