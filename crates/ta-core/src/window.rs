//! Fixed-length rolling windows for O(n) indicator passes.
//!
//! [`RollingSum`] keeps a running sum over the last `n` values and
//! [`RollingExtrema`] tracks the highest or lowest of the last `n` values with
//! a monotonic deque. Both treat NaN and infinite inputs as poison: any window
//! that contains one reports NaN, and once the bad value slides out the window
//! reports normally again.

use std::collections::VecDeque;

use crate::num::TaFloat;

/// A fixed-capacity circular buffer with an O(1) running sum.
///
/// # Example
///
/// ```rust
/// use kline_ta_core::RollingSum;
///
/// let mut window: RollingSum<f64> = RollingSum::new(3);
///
/// window.push(1.0);
/// window.push(2.0);
/// window.push(3.0);
/// assert_eq!(window.sum(), 6.0);
///
/// window.push(4.0); // evicts 1.0
/// assert_eq!(window.sum(), 9.0);
/// ```
#[derive(Clone, Debug)]
pub struct RollingSum<T: TaFloat> {
    /// Internal storage.
    buffer: Vec<T>,
    /// Index of the next write position (also the oldest element when full).
    head: usize,
    /// Number of elements currently in the buffer.
    len: usize,
    /// Sum of the finite values in the buffer.
    sum: T,
    /// Number of non-finite values in the buffer.
    invalid: usize,
}

impl<T: TaFloat> RollingSum<T> {
    /// Create a window holding the last `capacity` values.
    ///
    /// # Panics
    ///
    /// Panics if capacity is 0.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "RollingSum capacity must be > 0");
        Self {
            buffer: vec![T::ZERO; capacity],
            head: 0,
            len: 0,
            sum: T::ZERO,
            invalid: 0,
        }
    }

    /// Push a value, evicting the oldest one when the window is full.
    pub fn push(&mut self, value: T) {
        if self.is_full() {
            let old = self.buffer[self.head];
            if old.is_valid() {
                self.sum = self.sum - old;
            } else {
                self.invalid -= 1;
            }
        } else {
            self.len += 1;
        }

        if value.is_valid() {
            self.sum = self.sum + value;
        } else {
            self.invalid += 1;
        }

        self.buffer[self.head] = value;
        self.head = (self.head + 1) % self.buffer.len();
    }

    /// Returns `true` once `capacity` values have been pushed.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.buffer.len()
    }

    /// Sum of the values in the window, NaN if any of them is non-finite.
    #[must_use]
    pub fn sum(&self) -> T {
        if self.invalid > 0 {
            T::NAN
        } else {
            self.sum
        }
    }

    /// Mean of a full window, NaN while the window is still filling.
    #[must_use]
    pub fn mean(&self) -> T {
        if self.is_full() {
            self.sum() / T::from_usize(self.len)
        } else {
            T::NAN
        }
    }
}

/// Which end of the window [`RollingExtrema`] tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extremum {
    /// Highest value in the window.
    Max,
    /// Lowest value in the window.
    Min,
}

/// Rolling highest/lowest value over a fixed window in amortized O(1).
///
/// # Example
///
/// ```rust
/// use kline_ta_core::{Extremum, RollingExtrema};
///
/// let mut highest: RollingExtrema<f64> = RollingExtrema::new(3, Extremum::Max);
/// for value in [5.0, 1.0, 3.0, 2.0] {
///     highest.push(value);
/// }
/// assert_eq!(highest.value(), 3.0); // window is [1, 3, 2]
/// ```
#[derive(Clone, Debug)]
pub struct RollingExtrema<T: TaFloat> {
    window: usize,
    kind: Extremum,
    /// Candidates as (position, value), values monotonic from front to back.
    deque: VecDeque<(usize, T)>,
    /// Number of values pushed so far.
    count: usize,
    /// Position of the most recent non-finite value.
    last_invalid: Option<usize>,
}

impl<T: TaFloat> RollingExtrema<T> {
    /// Create a tracker over the last `window` values.
    ///
    /// # Panics
    ///
    /// Panics if window is 0.
    #[must_use]
    pub fn new(window: usize, kind: Extremum) -> Self {
        assert!(window > 0, "RollingExtrema window must be > 0");
        Self {
            window,
            kind,
            deque: VecDeque::with_capacity(window),
            count: 0,
            last_invalid: None,
        }
    }

    /// Push the next value.
    pub fn push(&mut self, value: T) {
        let position = self.count;
        self.count += 1;

        if value.is_valid() {
            while let Some(&(_, back)) = self.deque.back() {
                let dominated = match self.kind {
                    Extremum::Max => back <= value,
                    Extremum::Min => back >= value,
                };
                if !dominated {
                    break;
                }
                self.deque.pop_back();
            }
            self.deque.push_back((position, value));
        } else {
            self.last_invalid = Some(position);
        }

        while let Some(&(front, _)) = self.deque.front() {
            if front + self.window > position {
                break;
            }
            self.deque.pop_front();
        }
    }

    /// Extreme of the current window.
    ///
    /// NaN while fewer than `window` values have been pushed or while a
    /// non-finite value is inside the window.
    #[must_use]
    pub fn value(&self) -> T {
        if self.count < self.window {
            return T::NAN;
        }
        let window_start = self.count - self.window;
        if self.last_invalid.is_some_and(|p| p >= window_start) {
            return T::NAN;
        }
        self.deque.front().map_or(T::NAN, |&(_, value)| value)
    }
}
