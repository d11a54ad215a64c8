//! Oscillator indicators.
//!
//! Each oscillator reads the OHLCV columns it needs and is independent of the
//! others, apart from the shared smoothing and channel helpers below.

mod channel;
mod wilder;

mod atr;
mod cci;
mod kdj;
mod macd;
mod obv;
mod rsi;
mod williams_r;

pub use atr::{atr, Atr, AtrConfig};
pub use cci::{cci, Cci, CciConfig};
pub use kdj::{kdj, rsv, Kdj, KdjConfig, KdjSeries};
pub use macd::{macd, Macd, MacdConfig, MacdSeries};
pub use obv::{obv, Obv, ObvConfig};
pub use rsi::{rsi, Rsi, RsiConfig};
pub use williams_r::{williams_r, WilliamsR, WilliamsRConfig};
