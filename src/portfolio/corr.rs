//! # Correlation Matrix
//!
//! $$
//! \rho_{ij} = \frac{\operatorname{cov}(r_i, r_j)}{\sigma_i \sigma_j}
//! $$
//!
//! Ticker-indexed Pearson correlation matrices built from aligned return
//! series.

use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;

use crate::error::InvalidInput;
use crate::market::CorrelationWindow;
use crate::market::PriceSeries;

fn sample_mean(xs: &[f64]) -> f64 {
  if xs.is_empty() {
    0.0
  } else {
    xs.iter().sum::<f64>() / xs.len() as f64
  }
}

/// Pearson coefficient over the common prefix length of two series, clamped
/// to `[-1, 1]`. Degenerate pairs (fewer than two observations or zero
/// variance) resolve to `0.0`.
pub(crate) fn pearson(x: &[f64], y: &[f64]) -> f64 {
  let n = x.len().min(y.len());
  if n < 2 {
    return 0.0;
  }

  let mx = sample_mean(x);
  let my = sample_mean(y);

  let mut cov = 0.0;
  let mut sx = 0.0;
  let mut sy = 0.0;

  for i in 0..n {
    let dx = x[i] - mx;
    let dy = y[i] - my;
    cov += dx * dy;
    sx += dx * dx;
    sy += dy * dy;
  }

  let denom = (sx * sy).sqrt();
  if denom < 1e-15 {
    0.0
  } else {
    (cov / denom).clamp(-1.0, 1.0)
  }
}

/// Align multiple return series to common tail length.
pub fn align_returns(all_returns: &[Vec<f64>]) -> Vec<Vec<f64>> {
  let min_len = all_returns.iter().map(|r| r.len()).min().unwrap_or(0);
  all_returns
    .iter()
    .map(|r| r[r.len().saturating_sub(min_len)..].to_vec())
    .collect()
}

/// Keep only the last `days` rows of each aligned series.
pub(crate) fn tail_rows(aligned: &[Vec<f64>], days: usize) -> Vec<Vec<f64>> {
  aligned
    .iter()
    .map(|r| r[r.len().saturating_sub(days)..].to_vec())
    .collect()
}

fn correlation_values(aligned_returns: &[Vec<f64>]) -> Vec<Vec<f64>> {
  let n = aligned_returns.len();
  (0..n)
    .into_par_iter()
    .map(|i| {
      (0..n)
        .map(|j| {
          if i == j {
            1.0
          } else {
            pearson(&aligned_returns[i], &aligned_returns[j])
          }
        })
        .collect()
    })
    .collect()
}

/// Ticker-indexed Pearson correlation matrix.
///
/// Symmetric with unit diagonal; entries built from returns are clamped to
/// `[-1, 1]` and degenerate pairs are stored as `0.0`. Wrapped external
/// values are validated for shape only, so callers may carry NaN entries;
/// every consumer in this crate treats NaN as `0.0` co-movement.
#[derive(Clone, Debug, Default)]
pub struct CorrMatrix {
  tickers: Vec<String>,
  values: Vec<Vec<f64>>,
}

impl CorrMatrix {
  /// Wrap precomputed values, validating squareness and the ticker axis.
  pub fn new(tickers: Vec<String>, values: Vec<Vec<f64>>) -> Result<CorrMatrix, InvalidInput> {
    let dim = values.len();
    if tickers.len() != dim {
      return Err(InvalidInput::TickerMismatch {
        tickers: tickers.len(),
        dim,
      });
    }

    for (row, entries) in values.iter().enumerate() {
      if entries.len() != dim {
        return Err(InvalidInput::NotSquare {
          row,
          len: entries.len(),
          dim,
        });
      }
    }

    for (i, ticker) in tickers.iter().enumerate() {
      if tickers[..i].contains(ticker) {
        return Err(InvalidInput::DuplicateTicker(ticker.clone()));
      }
    }

    Ok(CorrMatrix { tickers, values })
  }

  /// Build from aligned return series, one per ticker. Every series must
  /// carry at least one observation.
  pub fn from_returns(
    tickers: Vec<String>,
    aligned_returns: &[Vec<f64>],
  ) -> Result<CorrMatrix, InvalidInput> {
    if tickers.len() != aligned_returns.len() {
      return Err(InvalidInput::TickerMismatch {
        tickers: tickers.len(),
        dim: aligned_returns.len(),
      });
    }

    for (i, ticker) in tickers.iter().enumerate() {
      if tickers[..i].contains(ticker) {
        return Err(InvalidInput::DuplicateTicker(ticker.clone()));
      }
    }

    for (ticker, returns) in tickers.iter().zip(aligned_returns) {
      if returns.is_empty() {
        return Err(InvalidInput::EmptyReturns(ticker.clone()));
      }
    }

    Ok(CorrMatrix {
      tickers,
      values: correlation_values(aligned_returns),
    })
  }

  /// Build from close-price series: simple returns, tail-aligned to a common
  /// length and optionally restricted to a trading-day window.
  pub fn from_price_series(
    series: &[PriceSeries],
    window: Option<CorrelationWindow>,
  ) -> Result<CorrMatrix, InvalidInput> {
    let tickers: Vec<String> = series.iter().map(|s| s.ticker.clone()).collect();
    let returns: Vec<Vec<f64>> = series.iter().map(|s| s.pct_change()).collect();

    let mut aligned = align_returns(&returns);
    if let Some(window) = window {
      aligned = tail_rows(&aligned, window.trading_days());
    }

    CorrMatrix::from_returns(tickers, &aligned)
  }

  /// Tickers on both axes, in input order.
  pub fn tickers(&self) -> &[String] {
    &self.tickers
  }

  /// Matrix values, row-major in ticker order.
  pub fn values(&self) -> &[Vec<f64>] {
    &self.values
  }

  /// Number of tickers on the axis.
  pub fn len(&self) -> usize {
    self.tickers.len()
  }

  /// Whether the matrix has no tickers.
  pub fn is_empty(&self) -> bool {
    self.tickers.is_empty()
  }

  /// Axis position of `ticker`.
  pub fn index_of(&self, ticker: &str) -> Option<usize> {
    self.tickers.iter().position(|t| t == ticker)
  }

  /// Correlation between axis positions, falling back to the identity for
  /// out-of-range lookups.
  pub fn at(&self, i: usize, j: usize) -> f64 {
    self
      .values
      .get(i)
      .and_then(|row| row.get(j))
      .copied()
      .unwrap_or(if i == j { 1.0 } else { 0.0 })
  }

  /// Correlation between two tickers, `None` when either is off the axis.
  pub fn pair(&self, a: &str, b: &str) -> Option<f64> {
    let i = self.index_of(a)?;
    let j = self.index_of(b)?;
    Some(self.at(i, j))
  }

  /// Mean signed correlation over the distinct pairs of `indices`. NaN
  /// entries count as `0.0`; fewer than two positions average to `0.0`.
  pub fn average_among(&self, indices: &[usize]) -> f64 {
    if indices.len() < 2 {
      return 0.0;
    }

    let mut sum = 0.0;
    let mut pairs = 0usize;
    for a in 0..indices.len() {
      for b in (a + 1)..indices.len() {
        let c = self.at(indices[a], indices[b]);
        if c.is_finite() {
          sum += c;
        }
        pairs += 1;
      }
    }

    sum / pairs as f64
  }

  /// Mean signed correlation over every distinct ticker pair.
  pub fn average_correlation(&self) -> f64 {
    let all: Vec<usize> = (0..self.len()).collect();
    self.average_among(&all)
  }
}
