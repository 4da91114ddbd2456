//! # Average True Range
//!
//! $$
//! \mathrm{ATR}_t = \frac{1}{w}\sum_{k=t-w+1}^{t} \mathrm{TR}_k
//! $$
//!
//! Plain rolling-mean ATR over the daily true range.

use ndarray::Array1;

use super::rolling::rolling_mean;

/// True range per bar: the largest of the day's range and the gaps from the
/// previous close. The first bar has no previous close and uses the plain
/// high-low range.
pub fn true_range(high: &Array1<f64>, low: &Array1<f64>, close: &Array1<f64>) -> Array1<f64> {
  let n = high.len().min(low.len()).min(close.len());
  let mut out = Array1::from_elem(n, f64::NAN);

  for i in 0..n {
    let range = (high[i] - low[i]).abs();
    if i == 0 {
      out[i] = range;
      continue;
    }

    let gap_high = (high[i] - close[i - 1]).abs();
    let gap_low = (low[i] - close[i - 1]).abs();
    out[i] = range.max(gap_high).max(gap_low);
  }

  out
}

/// Average true range: trailing mean of the true range, NaN until the window
/// fills.
pub fn atr(
  high: &Array1<f64>,
  low: &Array1<f64>,
  close: &Array1<f64>,
  window: usize,
) -> Array1<f64> {
  let tr = true_range(high, low, close);
  rolling_mean(&tr, window)
}
