//! # Indicator Snapshot
//!
//! Latest-row indicator readings per ticker, the screening view of a series.

use super::atr::atr;
use super::rolling::rolling_mean;
use super::rolling::rolling_std;
use super::rolling::z_score;
use crate::market::PriceSeries;

/// Latest indicator readings for one ticker.
///
/// Readings are `None` while their rolling window is still warming up or the
/// window has no dispersion.
#[derive(Clone, Debug)]
pub struct IndicatorSnapshot {
  /// Instrument identifier.
  pub ticker: String,
  /// Last closing price.
  pub close: f64,
  /// Average true range over the ATR window.
  pub atr: Option<f64>,
  /// Trailing mean of the close over the stat window.
  pub sma: Option<f64>,
  /// Trailing sample standard deviation of the close over the stat window.
  pub std: Option<f64>,
  /// Trailing z-score of the close over the stat window.
  pub z_score: Option<f64>,
}

impl IndicatorSnapshot {
  /// Compute the latest snapshot for a series, `None` for an empty series.
  pub fn from_series(
    series: &PriceSeries,
    atr_window: usize,
    stat_window: usize,
  ) -> Option<IndicatorSnapshot> {
    if series.is_empty() {
      return None;
    }

    let closes = series.closes();
    let highs = series.highs();
    let lows = series.lows();

    let atr = atr(&highs, &lows, &closes, atr_window);
    let sma = rolling_mean(&closes, stat_window);
    let std = rolling_std(&closes, stat_window);
    let z = z_score(&closes, stat_window);

    let last = closes.len() - 1;
    Some(IndicatorSnapshot {
      ticker: series.ticker.clone(),
      close: closes[last],
      atr: finite(atr[last]),
      sma: finite(sma[last]),
      std: finite(std[last]),
      z_score: finite(z[last]),
    })
  }
}

fn finite(value: f64) -> Option<f64> {
  if value.is_finite() {
    Some(value)
  } else {
    None
  }
}
