//! # kline-ta-core
//!
//! Core types and traits for the kline-ta indicator engine.
//!
//! - [`TaFloat`] - Trait for numeric types (f32/f64)
//! - [`Series`] - Indicator output aligned to the input candles
//! - [`PricePoint`] and [`PriceSeries`] - OHLCV candle data
//! - [`MultiSeries`] - Named output lines with deterministic ordering
//! - [`IndicatorParams`] - Per-call name → value parameters
//! - [`RollingSum`] and [`RollingExtrema`] - O(1) rolling windows
//! - [`Indicator`] - Indicator computation trait
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```rust
//! use kline_ta_core::prelude::*;
//!
//! let candles: PriceSeries<f64> = (0..5)
//!     .map(|i| PricePoint::new(i, 100.0, 101.0, 99.0, 100.0 + i as f64, 10.0))
//!     .collect();
//!
//! let mut window = RollingSum::new(3);
//! for &close in candles.close() {
//!     window.push(close);
//! }
//! assert_eq!(window.mean(), 103.0);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod multi;
pub mod num;
pub mod params;
pub mod prelude;
pub mod price;
pub mod series;
pub mod traits;
pub mod utils;
pub mod window;

// Re-export core types at crate root
pub use error::{IndicatorError, Result};
pub use multi::MultiSeries;
pub use num::TaFloat;
pub use params::IndicatorParams;
pub use price::{PricePoint, PriceSeries};
pub use series::Series;
pub use traits::{Indicator, IndicatorConfig, NanMode};
pub use window::{Extremum, RollingExtrema, RollingSum};
