//! # Indicators
//!
//! $$
//! \mathrm{TR}_t = \max\big(H_t - L_t,\ |H_t - C_{t-1}|,\ |L_t - C_{t-1}|\big)
//! $$
//!
//! Rolling mean-reversion indicators with NaN warm-up prefixes.

pub mod atr;
pub mod rolling;
pub mod snapshot;

pub use atr::atr;
pub use atr::true_range;
pub use rolling::rolling_mean;
pub use rolling::rolling_std;
pub use rolling::z_score;
pub use snapshot::IndicatorSnapshot;
