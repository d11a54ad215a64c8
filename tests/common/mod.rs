//! Common test utilities for the kline-ta facade.
//!
//! Float comparison with NaN awareness and deterministic synthetic candles.

#![allow(dead_code)]

use kline_ta::{PricePoint, PriceSeries, Series};

/// One minute in epoch milliseconds.
pub const MINUTE_MS: i64 = 60_000;

/// Float comparison that treats NaN as equal to NaN.
///
/// Values near zero (|expected| < 1e-10) use absolute tolerance, everything
/// else relative tolerance.
pub fn assert_float_eq(actual: f64, expected: f64, epsilon: f64, context: &str) {
    if expected.is_nan() {
        assert!(actual.is_nan(), "{}: Expected NaN but got {}", context, actual);
        return;
    }

    if actual.is_nan() {
        panic!("{}: Got NaN but expected {}", context, expected);
    }

    if expected.abs() < 1e-10 {
        let diff = (actual - expected).abs();
        assert!(
            diff < epsilon,
            "{}: Expected {} but got {} (diff: {})",
            context,
            expected,
            actual,
            diff
        );
        return;
    }

    let rel_diff = ((actual - expected) / expected).abs();
    assert!(
        rel_diff < epsilon,
        "{}: Expected {} but got {} (rel diff: {:.2e})",
        context,
        expected,
        actual,
        rel_diff
    );
}

/// Assert two series are equal with tolerance.
pub fn assert_series_eq(actual: &Series<f64>, expected: &[f64], epsilon: f64, name: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{}: Length mismatch: {} vs {}",
        name,
        actual.len(),
        expected.len()
    );

    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_float_eq(a, e, epsilon, &format!("{}[{}]", name, i));
    }
}

// ============================================================================
// Synthetic Data Generators
// ============================================================================

/// Generate linear price series.
pub fn generate_linear(start: f64, step: f64, len: usize) -> Vec<f64> {
    (0..len).map(|i| start + step * i as f64).collect()
}

/// Generate sine wave price series.
pub fn generate_sine(center: f64, amplitude: f64, period: usize, len: usize) -> Vec<f64> {
    use std::f64::consts::PI;
    (0..len)
        .map(|i| center + amplitude * (2.0 * PI * i as f64 / period as f64).sin())
        .collect()
}

/// Generate random walk price series with deterministic seed.
pub fn generate_random_walk(start: f64, volatility: f64, len: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    let mut next = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (state as f64 / u64::MAX as f64) * 2.0 - 1.0
    };

    let mut prices = Vec::with_capacity(len);
    let mut last = start;
    for i in 0..len {
        if i > 0 {
            last = (last + next() * volatility).max(0.01);
        }
        prices.push(last);
    }
    prices
}

/// Build one-minute candles around the given closes.
///
/// Each candle opens at the previous close and extends `range_pct` of the
/// close beyond its body on both sides.
pub fn candles_from_closes(closes: &[f64], range_pct: f64) -> PriceSeries<f64> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            let range = close * range_pct;
            let high = close.max(open) + range * 0.5;
            let low = close.min(open) - range * 0.5;
            let volume = 1000.0 + i as f64 * 100.0;
            PricePoint::new(i as i64 * MINUTE_MS, open, high, low, close, volume).with_amount(volume * close)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_float_eq_nan() {
        assert_float_eq(f64::NAN, f64::NAN, 1e-10, "test");
    }

    #[test]
    #[should_panic]
    fn test_assert_float_eq_nan_mismatch() {
        assert_float_eq(1.0, f64::NAN, 1e-10, "test");
    }

    #[test]
    fn test_generate_random_walk_deterministic() {
        assert_eq!(
            generate_random_walk(100.0, 1.0, 10, 12345),
            generate_random_walk(100.0, 1.0, 10, 12345)
        );
    }

    #[test]
    fn test_candles_are_well_formed() {
        let candles = candles_from_closes(&generate_sine(100.0, 5.0, 20, 30), 0.02);
        assert!(candles.iter().all(|c| c.is_valid()));
        assert!(candles.validate().is_ok());
    }
}
