//! Parabolic SAR (Stop and Reverse) indicator.
//!
//! The SAR trails price in the direction of the trend and accelerates towards
//! the extreme point each time a new extreme is made. When price penetrates the
//! SAR the trend flips and the SAR jumps to the old extreme point.
//!
//! The hidden per-bar state (SAR value, extreme point, acceleration factor and
//! trend direction) is threaded through the series as an explicit
//! [`SarState`] value rather than kept in mutable indicator fields, so the
//! calculation stays a pure function of its inputs.

use core::marker::PhantomData;

use kline_ta_core::{
    num::TaFloat, price::PriceSeries, series::Series, traits::Indicator, utils::aligned_len,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the Parabolic SAR indicator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SarConfig {
    /// Acceleration factor increment and starting value (default: 0.02).
    pub acceleration_step: f64,
    /// Acceleration factor ceiling (default: 0.20).
    pub acceleration_max: f64,
}

impl Default for SarConfig {
    fn default() -> Self {
        Self {
            acceleration_step: 0.02,
            acceleration_max: 0.20,
        }
    }
}

impl SarConfig {
    /// Create a new SAR configuration.
    pub fn new(acceleration_step: f64, acceleration_max: f64) -> Self {
        Self {
            acceleration_step,
            acceleration_max,
        }
    }
}

/// Direction of the trend the SAR is following.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trend {
    Up,
    Down,
}

/// Accumulator carried from one bar to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SarState<T> {
    sar: T,
    ep: T,
    af: T,
    trend: Trend,
}

impl<T: TaFloat> SarState<T> {
    fn seed(high: T, low: T, step: T) -> Self {
        if !(high.is_valid() && low.is_valid()) {
            return Self::poisoned(Trend::Up);
        }
        Self {
            sar: low,
            ep: high,
            af: step,
            trend: Trend::Up,
        }
    }

    fn poisoned(trend: Trend) -> Self {
        Self {
            sar: T::NAN,
            ep: T::NAN,
            af: T::NAN,
            trend,
        }
    }

    /// State at bar `i` given this state at bar `i - 1`.
    fn advance(self, i: usize, highs: &[T], lows: &[T], step: T, max: T) -> Self {
        let (high, low) = (highs[i], lows[i]);
        if !(high.is_valid() && low.is_valid()) || self.sar.is_nan() {
            return Self::poisoned(self.trend);
        }

        let mut sar = self.sar + self.af * (self.ep - self.sar);
        let accelerated = |af: T| {
            let next = af + step;
            if next > max {
                max
            } else {
                next
            }
        };

        match self.trend {
            Trend::Up => {
                // Never above the two prior lows.
                let mut floor = lows[i - 1];
                if i >= 2 && lows[i - 2] < floor {
                    floor = lows[i - 2];
                }
                if sar > floor {
                    sar = floor;
                }

                // Penetration is checked before this bar's high can move the EP.
                if low < sar {
                    return Self {
                        sar: self.ep,
                        ep: low,
                        af: step,
                        trend: Trend::Down,
                    };
                }
                let (ep, af) = if high > self.ep {
                    (high, accelerated(self.af))
                } else {
                    (self.ep, self.af)
                };
                Self {
                    sar,
                    ep,
                    af,
                    trend: Trend::Up,
                }
            }
            Trend::Down => {
                // Never below the two prior highs.
                let mut ceiling = highs[i - 1];
                if i >= 2 && highs[i - 2] > ceiling {
                    ceiling = highs[i - 2];
                }
                if sar < ceiling {
                    sar = ceiling;
                }

                if high > sar {
                    return Self {
                        sar: self.ep,
                        ep: high,
                        af: step,
                        trend: Trend::Up,
                    };
                }
                let (ep, af) = if low < self.ep {
                    (low, accelerated(self.af))
                } else {
                    (self.ep, self.af)
                };
                Self {
                    sar,
                    ep,
                    af,
                    trend: Trend::Down,
                }
            }
        }
    }
}

fn valid_acceleration<T: TaFloat>(step: T, max: T) -> bool {
    step.is_valid() && max.is_valid() && step > T::ZERO && max >= step
}

/// Per-bar states; empty when the inputs are unusable.
fn sar_states<T: TaFloat>(highs: &[T], lows: &[T], step: T, max: T) -> Vec<SarState<T>> {
    let len = match aligned_len(&[highs, lows]) {
        Some(len) if len > 0 && valid_acceleration(step, max) => len,
        _ => return Vec::new(),
    };

    let seed = SarState::seed(highs[0], lows[0], step);
    core::iter::once(seed)
        .chain((1..len).scan(seed, |state, i| {
            *state = state.advance(i, highs, lows, step, max);
            Some(*state)
        }))
        .collect()
}

/// Compute the Parabolic SAR from high and low prices.
///
/// Starts in an uptrend with SAR = `lows[0]`, EP = `highs[0]` and
/// AF = `acceleration_step`. A reversal requires strict penetration of the
/// SAR; touching it does not flip the trend.
///
/// Mismatched input lengths, a non-positive step, or a maximum below the step
/// yield an all-NaN series the length of `highs`. A non-finite bar turns the
/// rest of the series NaN, since the recurrence cannot recover its state.
///
/// # Example
///
/// ```rust
/// use kline_ta_indicators::trend::parabolic_sar;
///
/// let highs = [10.0, 11.0, 12.0];
/// let lows = [9.0, 10.0, 11.0];
/// let sar = parabolic_sar(&highs, &lows, 0.02, 0.2);
/// assert_eq!(sar[0], 9.0);
/// assert_eq!(sar[1], 9.0); // clamped to the prior low
/// ```
#[must_use]
pub fn parabolic_sar<T: TaFloat>(
    highs: &[T],
    lows: &[T],
    acceleration_step: T,
    acceleration_max: T,
) -> Series<T> {
    let states = sar_states(highs, lows, acceleration_step, acceleration_max);
    if states.is_empty() {
        return Series::nan(highs.len());
    }
    states.iter().map(|state| state.sar).collect()
}

/// Parabolic SAR indicator over high and low prices.
#[derive(Debug, Clone)]
pub struct ParabolicSar<T: TaFloat> {
    config: SarConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for ParabolicSar<T> {
    type Output = Series<T>;
    type Config = SarConfig;

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
        parabolic_sar(
            data.high(),
            data.low(),
            T::from_f64_lossy(self.config.acceleration_step),
            T::from_f64_lossy(self.config.acceleration_max),
        )
    }
}
