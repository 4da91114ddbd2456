//! # Portfolio
//!
//! $$
//! \min_{S,\ |S| = k}\ \max_{i \ne j \in S} |\rho_{ij}|
//! $$
//!
//! Correlation matrices, least-correlated subset selection and the screening
//! engine built on them.

pub mod corr;
pub mod engine;
pub mod selection;

pub use corr::CorrMatrix;
pub use corr::align_returns;
pub use engine::Screener;
pub use engine::ScreenerConfig;
pub use selection::DiversifiedSubset;
pub use selection::find_optimal_subset;
pub use selection::select_least_correlated;
pub use selection::tickers_below_threshold;
