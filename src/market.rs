//! # Market Data
//!
//! $$
//! r_t = \frac{C_t - C_{t-1}}{C_{t-1}}
//! $$
//!
//! Daily bar series, simple returns and trading-day lookback windows.

pub mod series;
pub mod window;

pub use series::DailyBar;
pub use series::PriceSeries;
pub use window::CorrelationWindow;
