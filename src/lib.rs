//! # Diversify
//!
//! $$
//! S_{k+1} = S_k \cup \Big\{\arg\min_{c \notin S_k} \max_{s \in S_k} |\rho_{cs}|\Big\}
//! $$
//!
//! Correlation-driven diversification toolkit: daily bar series, rolling
//! mean-reversion indicators, ticker-indexed Pearson correlation matrices and
//! greedy least-correlated subset selection.

pub mod error;
pub mod indicators;
pub mod market;
pub mod portfolio;
pub mod visualization;
