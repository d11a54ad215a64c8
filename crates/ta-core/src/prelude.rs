//! Prelude module for convenient imports.
//!
//! ```rust
//! use kline_ta_core::prelude::*;
//!
//! let series: Series<f64> = Series::nan(3);
//! let candle = PricePoint::new(0, 100.0, 105.0, 98.0, 103.0, 1_000.0);
//! ```

// Core types
pub use crate::multi::MultiSeries;
pub use crate::num::TaFloat;
pub use crate::params::IndicatorParams;
pub use crate::price::{PricePoint, PriceSeries};
pub use crate::series::Series;
pub use crate::window::{Extremum, RollingExtrema, RollingSum};

// Error types
pub use crate::error::{IndicatorError, Result};

// Traits
pub use crate::traits::{Indicator, IndicatorConfig, NanMode};
