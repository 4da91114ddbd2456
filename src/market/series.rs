//! # Price Series
//!
//! $$
//! C_{t_0} \dots C_{t_n},\quad H_t,\ L_t
//! $$
//!
//! Per-ticker daily bar history, oldest first.

use impl_new_derive::ImplNew;
use ndarray::Array1;

/// Single daily observation for one instrument.
#[derive(ImplNew, Clone, Copy, Debug, PartialEq)]
pub struct DailyBar {
  /// Trading date of the observation.
  pub date: chrono::NaiveDate,
  /// Daily high price.
  pub high: f64,
  /// Daily low price.
  pub low: f64,
  /// Daily closing price.
  pub close: f64,
}

/// Daily bar history for a single ticker, oldest first.
#[derive(ImplNew, Clone, Debug)]
pub struct PriceSeries {
  /// Instrument identifier.
  pub ticker: String,
  /// Ordered observations, oldest first.
  pub bars: Vec<DailyBar>,
}

impl PriceSeries {
  /// Number of bars in the series.
  pub fn len(&self) -> usize {
    self.bars.len()
  }

  /// Whether the series holds no bars.
  pub fn is_empty(&self) -> bool {
    self.bars.is_empty()
  }

  /// Closing prices, oldest first.
  pub fn closes(&self) -> Array1<f64> {
    Array1::from_iter(self.bars.iter().map(|b| b.close))
  }

  /// High prices, oldest first.
  pub fn highs(&self) -> Array1<f64> {
    Array1::from_iter(self.bars.iter().map(|b| b.high))
  }

  /// Low prices, oldest first.
  pub fn lows(&self) -> Array1<f64> {
    Array1::from_iter(self.bars.iter().map(|b| b.low))
  }

  /// Simple returns between consecutive closes. Pairs with a nonpositive
  /// base price are skipped.
  pub fn pct_change(&self) -> Vec<f64> {
    let mut out = Vec::with_capacity(self.bars.len().saturating_sub(1));
    for i in 1..self.bars.len() {
      let prev = self.bars[i - 1].close;
      if prev > 0.0 {
        out.push((self.bars[i].close - prev) / prev);
      }
    }
    out
  }

  /// Restrict the series to bars dated within `[start, end]` inclusive.
  pub fn between(&self, start: chrono::NaiveDate, end: chrono::NaiveDate) -> PriceSeries {
    let bars = self
      .bars
      .iter()
      .filter(|b| b.date >= start && b.date <= end)
      .copied()
      .collect();
    PriceSeries::new(self.ticker.clone(), bars)
  }
}
