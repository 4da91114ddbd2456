//! # Visualization
//!
//! $$
//! \rho \in [-1, 1]^{n \times n} \mapsto \text{heatmap}
//! $$
//!
//! Plotly figures for correlation screening output.

use plotly::HeatMap;
use plotly::Layout;
use plotly::Plot;
use plotly::common::ColorScale;
use plotly::common::ColorScalePalette;

use crate::portfolio::CorrMatrix;

/// Render a ticker-indexed correlation matrix as a diverging heatmap.
pub fn correlation_heatmap(corr: &CorrMatrix, title: &str) -> Plot {
  let labels = corr.tickers().to_vec();
  let z = corr.values().to_vec();

  let trace = HeatMap::new(labels.clone(), labels, z)
    .color_scale(ColorScale::Palette(ColorScalePalette::RdBu));

  let mut plot = Plot::new();
  plot.add_trace(trace);
  plot.set_layout(Layout::new().title(title).auto_size(true));
  plot
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn heatmap_carries_tickers_and_values() {
    let corr = CorrMatrix::new(
      vec!["AAA".to_string(), "BBB".to_string()],
      vec![vec![1.0, 0.25], vec![0.25, 1.0]],
    )
    .unwrap();

    let plot = correlation_heatmap(&corr, "Correlation Matrix");
    let json = plot.to_json();

    assert!(json.contains("heatmap"));
    assert!(json.contains("AAA"));
    assert!(json.contains("0.25"));
  }
}
