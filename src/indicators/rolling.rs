//! # Rolling Statistics
//!
//! $$
//! z_t = \frac{x_t - \bar{x}_{t-w+1..t}}{s_{t-w+1..t}}
//! $$
//!
//! Trailing-window transforms. The first `window - 1` slots of every output
//! are NaN, and a NaN inside a window makes that window NaN without
//! poisoning later ones.

use ndarray::Array1;
use ndarray::s;
use statrs::statistics::Statistics;

/// Trailing mean over `window` observations, NaN until the window fills.
pub fn rolling_mean(x: &Array1<f64>, window: usize) -> Array1<f64> {
  let n = x.len();
  let mut out = Array1::from_elem(n, f64::NAN);
  if window == 0 || window > n {
    return out;
  }

  for i in (window - 1)..n {
    let tail = x.slice(s![i + 1 - window..=i]);
    out[i] = tail.iter().copied().mean();
  }

  out
}

/// Trailing sample standard deviation (`n - 1` denominator) over `window`
/// observations, NaN until the window fills. A window of one observation has
/// no dispersion estimate and stays NaN.
pub fn rolling_std(x: &Array1<f64>, window: usize) -> Array1<f64> {
  let n = x.len();
  let mut out = Array1::from_elem(n, f64::NAN);
  if window < 2 || window > n {
    return out;
  }

  for i in (window - 1)..n {
    let tail = x.slice(s![i + 1 - window..=i]);
    out[i] = tail.iter().copied().std_dev();
  }

  out
}

/// Distance of each value from its trailing mean, in trailing standard
/// deviations. NaN during warm-up and wherever the window has no dispersion.
pub fn z_score(x: &Array1<f64>, window: usize) -> Array1<f64> {
  let mean = rolling_mean(x, window);
  let std = rolling_std(x, window);

  let mut out = Array1::from_elem(x.len(), f64::NAN);
  for i in 0..x.len() {
    if std[i].is_finite() && std[i] > 0.0 {
      out[i] = (x[i] - mean[i]) / std[i];
    }
  }

  out
}
