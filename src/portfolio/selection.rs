//! # Subset Selection
//!
//! $$
//! s_{k+1} = \arg\min_{c \notin S_k} \max_{s \in S_k} |\rho_{cs}|
//! $$
//!
//! Greedy maximin selection of weakly correlated tickers, the subset-size
//! search built on it, and a correlation-threshold universe filter.

use super::corr::CorrMatrix;

/// Outcome of the subset-size search.
#[derive(Clone, Debug, Default)]
pub struct DiversifiedSubset {
  /// Tickers in selection order.
  pub tickers: Vec<String>,
  /// Mean pairwise correlation of the subset, `0.0` for fewer than two names.
  pub avg_correlation: f64,
}

/// Greedily pick `target` tickers that are weakly correlated with each other.
///
/// The first ticker on the matrix axis seeds the selection. Each further step
/// adds the candidate whose largest absolute correlation to the already
/// selected set is smallest; ties keep the earliest candidate in axis order.
/// NaN entries count as `0.0` co-movement. The result is ordered by selection
/// step, capped at the number of available tickers, and the matrix itself is
/// never modified.
pub fn select_least_correlated(corr: &CorrMatrix, target: usize) -> Vec<String> {
  greedy_order(corr, target)
    .into_iter()
    .map(|i| corr.tickers()[i].clone())
    .collect()
}

/// Search subset sizes in `[min_size, max_size]` for the lowest mean pairwise
/// correlation.
///
/// `max_size` defaults to the full ticker count and both bounds are capped
/// there; sizes are tried ascending and ties keep the smaller size. An empty
/// matrix (or a zero `max_size`) yields an empty subset with score `0.0`.
pub fn find_optimal_subset(
  corr: &CorrMatrix,
  min_size: usize,
  max_size: Option<usize>,
) -> DiversifiedSubset {
  let n = corr.len();
  let upper = max_size.unwrap_or(n).min(n);
  if upper == 0 {
    return DiversifiedSubset::default();
  }
  let lower = min_size.clamp(1, upper);

  let mut best: Option<DiversifiedSubset> = None;
  for size in lower..=upper {
    let order = greedy_order(corr, size);
    let score = corr.average_among(&order);

    let improves = match &best {
      Some(current) => score < current.avg_correlation,
      None => true,
    };
    if improves {
      best = Some(DiversifiedSubset {
        tickers: order.iter().map(|&i| corr.tickers()[i].clone()).collect(),
        avg_correlation: score,
      });
    }
  }

  best.unwrap_or_default()
}

/// Tickers with at least one off-diagonal correlation strictly below
/// `target`, in axis order.
///
/// A name stays in the universe when it has at least one weakly correlated
/// partner. NaN entries never satisfy the comparison.
pub fn tickers_below_threshold(corr: &CorrMatrix, target: f64) -> Vec<String> {
  let n = corr.len();
  let mut out = Vec::new();

  for i in 0..n {
    if (0..n).any(|j| j != i && corr.at(i, j) < target) {
      out.push(corr.tickers()[i].clone());
    }
  }

  out
}

/// Greedy maximin selection order over axis positions.
fn greedy_order(corr: &CorrMatrix, target: usize) -> Vec<usize> {
  let n = corr.len();
  if target == 0 || n == 0 {
    return Vec::new();
  }

  let mut pool: Vec<usize> = (1..n).collect();
  let mut selected: Vec<usize> = Vec::with_capacity(target.min(n));
  selected.push(0);

  while selected.len() < target && !pool.is_empty() {
    let mut best_pos = 0;
    let mut best_closeness = f64::INFINITY;

    for (pos, &candidate) in pool.iter().enumerate() {
      let closeness = worst_case_closeness(corr, candidate, &selected);
      if closeness < best_closeness {
        best_closeness = closeness;
        best_pos = pos;
      }
    }

    let chosen = pool.remove(best_pos);
    selected.push(chosen);
  }

  selected
}

/// Largest absolute correlation between `candidate` and the selected set.
fn worst_case_closeness(corr: &CorrMatrix, candidate: usize, selected: &[usize]) -> f64 {
  selected
    .iter()
    .map(|&s| abs_or_zero(corr.at(candidate, s)))
    .fold(0.0, f64::max)
}

fn abs_or_zero(c: f64) -> f64 {
  if c.is_finite() {
    c.abs()
  } else {
    0.0
  }
}
