//! # kline-ta
//!
//! Indicator facade for candlestick charts.
//!
//! The chart layer persists overlays as a name plus a loose parameter map
//! (`{"name": "BOLL", "params": {"period": 20}}`). [`IndicatorRegistry`]
//! turns such an [`IndicatorRequest`] into a typed indicator call and returns
//! an [`IndicatorOutput`] aligned to the candles.
//!
//! Indicators never fail on bad parameters or short history; they return NaN
//! output. The facade only errors on requests it cannot route (unknown
//! indicator or parameter name) and, under [`NanMode::Reject`], on candles
//! containing NaN or infinite values.
//!
//! # Example
//!
//! ```rust
//! use kline_ta::{IndicatorRegistry, IndicatorRequest};
//! use kline_ta_core::{PricePoint, PriceSeries};
//!
//! let candles: PriceSeries<f64> = (0..40)
//!     .map(|i| {
//!         let c = 100.0 + (f64::from(i) * 0.5).sin();
//!         PricePoint::new(i64::from(i) * 60_000, c, c + 1.0, c - 1.0, c, 500.0)
//!     })
//!     .collect();
//!
//! let requests: Vec<IndicatorRequest> = serde_json::from_str(
//!     r#"[{"name": "MACD"}, {"name": "rsi", "params": {"period": 6}}]"#,
//! )
//! .unwrap();
//!
//! let outputs = IndicatorRegistry::new().compute_all(&candles, &requests).unwrap();
//! assert_eq!(outputs[0].line("histogram").map(|s| s.len()), Some(40));
//! assert!(outputs[1].as_single().unwrap()[5].is_nan());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod output;
pub mod registry;
pub mod request;

pub use config::FromParams;
pub use kline_ta_core::{IndicatorError, IndicatorParams, MultiSeries, NanMode, PricePoint, PriceSeries, Result, Series};
pub use output::IndicatorOutput;
pub use registry::{ComputeFn, IndicatorRegistry, IntoLines, MinPeriodsFn, RegistryEntry};
pub use request::IndicatorRequest;
