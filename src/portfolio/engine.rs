//! # Screener Engine
//!
//! $$
//! \{C_t, H_t, L_t\}_{\text{ticker}} \mapsto (\text{snapshots}, \rho, S)
//! $$
//!
//! High-level orchestration API from raw price series to indicator snapshots,
//! correlation matrices and diversified subsets.

use tracing::debug;
use tracing::warn;

use super::corr::CorrMatrix;
use super::corr::align_returns;
use super::corr::tail_rows;
use super::selection::DiversifiedSubset;
use super::selection::find_optimal_subset;
use super::selection::select_least_correlated;
use super::selection::tickers_below_threshold;
use crate::error::InvalidInput;
use crate::indicators::IndicatorSnapshot;
use crate::market::CorrelationWindow;
use crate::market::PriceSeries;

/// Runtime configuration for [`Screener`].
#[derive(Clone, Debug)]
pub struct ScreenerConfig {
  /// Window for the average true range.
  pub atr_window: usize,
  /// Window for the trailing mean, deviation and z-score of the close.
  pub stat_window: usize,
  /// Optional trading-day restriction applied before correlation estimation.
  pub corr_window: Option<CorrelationWindow>,
}

impl Default for ScreenerConfig {
  fn default() -> Self {
    Self {
      atr_window: 14,
      stat_window: 10,
      corr_window: None,
    }
  }
}

/// Single entry-point engine for screening and diversification workflows.
#[derive(Clone, Debug)]
pub struct Screener {
  config: ScreenerConfig,
}

impl Screener {
  /// Construct a new screener with explicit configuration.
  pub fn new(config: ScreenerConfig) -> Self {
    Self { config }
  }

  /// Borrow screener configuration.
  pub fn config(&self) -> &ScreenerConfig {
    &self.config
  }

  /// Latest indicator snapshot per series. Empty series are skipped.
  pub fn snapshots(&self, series: &[PriceSeries]) -> Vec<IndicatorSnapshot> {
    let mut out = Vec::with_capacity(series.len());
    for s in series {
      match IndicatorSnapshot::from_series(s, self.config.atr_window, self.config.stat_window) {
        Some(snapshot) => out.push(snapshot),
        None => warn!("skipping {}: no price history", s.ticker),
      }
    }
    out
  }

  /// Correlation matrix over the configured trading-day window.
  ///
  /// Series with fewer than two closes carry no return observations and are
  /// dropped with a warning before alignment.
  pub fn correlation(&self, series: &[PriceSeries]) -> Result<CorrMatrix, InvalidInput> {
    let mut tickers = Vec::with_capacity(series.len());
    let mut returns = Vec::with_capacity(series.len());

    for s in series {
      let r = s.pct_change();
      if r.is_empty() {
        warn!("skipping {}: no return observations", s.ticker);
        continue;
      }
      tickers.push(s.ticker.clone());
      returns.push(r);
    }

    let mut aligned = align_returns(&returns);
    if let Some(window) = self.config.corr_window {
      aligned = tail_rows(&aligned, window.trading_days());
    }

    debug!(
      "correlation matrix over {} of {} series",
      tickers.len(),
      series.len()
    );
    CorrMatrix::from_returns(tickers, &aligned)
  }

  /// Greedy least-correlated names straight from raw series.
  pub fn select(&self, series: &[PriceSeries], target: usize) -> Result<Vec<String>, InvalidInput> {
    let corr = self.correlation(series)?;
    Ok(select_least_correlated(&corr, target))
  }

  /// Size-swept diversified subset straight from raw series.
  pub fn optimal_subset(
    &self,
    series: &[PriceSeries],
    min_size: usize,
    max_size: Option<usize>,
  ) -> Result<DiversifiedSubset, InvalidInput> {
    let corr = self.correlation(series)?;
    Ok(find_optimal_subset(&corr, min_size, max_size))
  }

  /// Universe filter keeping names with at least one correlation below
  /// `target`.
  pub fn below_threshold(
    &self,
    series: &[PriceSeries],
    target: f64,
  ) -> Result<Vec<String>, InvalidInput> {
    let corr = self.correlation(series)?;
    Ok(tickers_below_threshold(&corr, target))
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;
  use tracing_test::traced_test;

  use super::*;
  use crate::market::DailyBar;

  fn series_with_closes(ticker: &str, closes: &[f64]) -> PriceSeries {
    let bars = closes
      .iter()
      .enumerate()
      .map(|(i, &close)| {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1 + i as u32).unwrap();
        DailyBar::new(date, close + 0.5, close - 0.5, close)
      })
      .collect();
    PriceSeries::new(ticker.to_string(), bars)
  }

  fn dummy_series() -> Vec<PriceSeries> {
    vec![
      series_with_closes("AAA", &[100.0, 102.0, 101.0, 103.0, 104.0]),
      series_with_closes("BBB", &[50.0, 51.0, 50.5, 51.5, 52.0]),
      series_with_closes("CCC", &[20.0, 19.0, 19.5, 18.5, 18.0]),
    ]
  }

  #[test]
  fn engine_matrix_matches_direct_construction() {
    let series = dummy_series();
    let engine = Screener::new(ScreenerConfig::default());

    let via_engine = engine.correlation(&series).unwrap();
    let direct = CorrMatrix::from_price_series(&series, None).unwrap();

    assert_eq!(via_engine.tickers(), direct.tickers());
    for i in 0..via_engine.len() {
      for j in 0..via_engine.len() {
        assert_abs_diff_eq!(via_engine.at(i, j), direct.at(i, j), epsilon = 1e-12);
      }
    }
  }

  #[test]
  fn engine_selection_equals_direct_selector() {
    let series = dummy_series();
    let engine = Screener::new(ScreenerConfig::default());

    let corr = engine.correlation(&series).unwrap();
    assert_eq!(
      engine.select(&series, 2).unwrap(),
      select_least_correlated(&corr, 2)
    );

    let best = engine.optimal_subset(&series, 2, None).unwrap();
    let direct = find_optimal_subset(&corr, 2, None);
    assert_eq!(best.tickers, direct.tickers);
    assert_abs_diff_eq!(best.avg_correlation, direct.avg_correlation, epsilon = 1e-12);
  }

  #[test]
  fn identical_movement_correlates_to_one() {
    let series = vec![
      series_with_closes("AAA", &[100.0, 110.0, 99.0, 108.9]),
      series_with_closes("BBB", &[10.0, 11.0, 9.9, 10.89]),
    ];
    let engine = Screener::new(ScreenerConfig::default());
    let corr = engine.correlation(&series).unwrap();

    assert_abs_diff_eq!(corr.at(0, 1), 1.0, epsilon = 1e-9);
  }

  #[traced_test]
  #[test]
  fn short_series_are_skipped_with_a_warning() {
    let mut series = dummy_series();
    series.push(series_with_closes("DDD", &[42.0]));

    let engine = Screener::new(ScreenerConfig::default());
    let corr = engine.correlation(&series).unwrap();

    assert_eq!(corr.len(), 3);
    assert!(corr.index_of("DDD").is_none());
    assert!(logs_contain("skipping DDD"));
  }

  #[traced_test]
  #[test]
  fn empty_series_are_skipped_in_snapshots() {
    let mut series = dummy_series();
    series.push(PriceSeries::new("EEE".to_string(), Vec::new()));

    let engine = Screener::new(ScreenerConfig::default());
    let snapshots = engine.snapshots(&series);

    assert_eq!(snapshots.len(), 3);
    assert!(logs_contain("skipping EEE"));
  }

  #[test]
  fn window_config_is_applied() {
    let engine = Screener::new(ScreenerConfig {
      corr_window: Some(CorrelationWindow::OneWeek),
      ..ScreenerConfig::default()
    });
    assert_eq!(
      engine.config().corr_window,
      Some(CorrelationWindow::OneWeek)
    );

    // Anticorrelated early on, in lockstep for the final week.
    let series = vec![
      series_with_closes(
        "AAA",
        &[
          100.0, 110.0, 99.0, 108.9, 98.0, 100.0, 102.0, 104.0, 106.0, 108.0, 110.0,
        ],
      ),
      series_with_closes(
        "BBB",
        &[
          50.0, 45.0, 49.5, 44.5, 49.0, 50.0, 51.0, 52.0, 53.0, 54.0, 55.0,
        ],
      ),
    ];

    let windowed = engine.correlation(&series).unwrap();
    assert_abs_diff_eq!(windowed.at(0, 1), 1.0, epsilon = 1e-9);

    let full = Screener::new(ScreenerConfig::default())
      .correlation(&series)
      .unwrap();
    assert!(full.at(0, 1) < 0.99);
  }
}
