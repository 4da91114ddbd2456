use std::collections::HashMap;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;

use anyhow::Context;
use anyhow::Result;
use diversify_rs::market::CorrelationWindow;
use diversify_rs::market::DailyBar;
use diversify_rs::market::PriceSeries;
use diversify_rs::portfolio::Screener;
use diversify_rs::portfolio::ScreenerConfig;
use diversify_rs::portfolio::find_optimal_subset;
use diversify_rs::portfolio::select_least_correlated;
use diversify_rs::portfolio::tickers_below_threshold;
use diversify_rs::visualization::correlation_heatmap;
use prettytable::Cell;
use prettytable::Table;
use prettytable::row;

fn main() -> Result<()> {
  let series = read_series_from_csv("./data/daily_bars.csv")?;
  println!("Loaded {} tickers", series.len());

  let screener = Screener::new(ScreenerConfig {
    corr_window: Some(CorrelationWindow::OneMonth),
    ..ScreenerConfig::default()
  });

  let snapshots = screener.snapshots(&series);
  let mut table = Table::new();
  table.add_row(row![
    "Ticker", "Close", "ATR(14)", "SMA(10)", "STD(10)", "Z-Score"
  ]);
  for s in &snapshots {
    table.add_row(row![
      s.ticker,
      format!("{:.2}", s.close),
      fmt_opt(s.atr),
      fmt_opt(s.sma),
      fmt_opt(s.std),
      fmt_opt(s.z_score),
    ]);
  }
  println!("\nIndicator snapshots");
  table.printstd();

  let corr = screener.correlation(&series)?;
  let mut corr_table = Table::new();
  let mut header = row!["Ticker"];
  for t in corr.tickers() {
    header.add_cell(Cell::new(t));
  }
  corr_table.add_row(header);
  for (i, t) in corr.tickers().iter().enumerate() {
    let mut r = row![t];
    for j in 0..corr.len() {
      r.add_cell(Cell::new(&format!("{:.3}", corr.at(i, j))));
    }
    corr_table.add_row(r);
  }
  println!(
    "\nCorrelation matrix ({})",
    screener
      .config()
      .corr_window
      .map(|w| w.to_string())
      .unwrap_or_else(|| "full history".to_string())
  );
  corr_table.printstd();
  println!("Average pairwise correlation: {:.4}", corr.average_correlation());

  let picks = select_least_correlated(&corr, 3);
  println!("\nLeast correlated 3: {:?}", picks);

  let best = find_optimal_subset(&corr, 2, None);
  println!(
    "Optimal subset (avg corr {:.4}): {:?}",
    best.avg_correlation, best.tickers
  );

  let loose = tickers_below_threshold(&corr, 0.3);
  println!("Tickers with a partner below 0.3: {:?}", loose);

  let plot = correlation_heatmap(&corr, "Correlation Matrix");
  plot.write_html("target/correlation_matrix.html");
  println!("\nHeatmap written to target/correlation_matrix.html");

  Ok(())
}

fn fmt_opt(value: Option<f64>) -> String {
  match value {
    Some(v) => format!("{v:.2}"),
    None => "-".to_string(),
  }
}

/// Parse `ticker,date,high,low,close` rows into per-ticker series, keeping
/// first-appearance ticker order.
fn read_series_from_csv(path: &str) -> Result<Vec<PriceSeries>> {
  let file = File::open(path).with_context(|| format!("cannot open {path}"))?;
  let reader = BufReader::new(file);

  let mut order: Vec<String> = Vec::new();
  let mut bars: HashMap<String, Vec<DailyBar>> = HashMap::new();

  for (line_no, line) in reader.lines().enumerate() {
    let line = line?;
    let trimmed = line.trim();
    if trimmed.is_empty() || (line_no == 0 && trimmed.starts_with("ticker")) {
      continue;
    }

    let fields: Vec<&str> = trimmed.split(',').collect();
    if fields.len() != 5 {
      anyhow::bail!(
        "line {}: expected 5 fields, got {}",
        line_no + 1,
        fields.len()
      );
    }

    let ticker = fields[0].to_string();
    let date = chrono::NaiveDate::parse_from_str(fields[1], "%Y-%m-%d")
      .with_context(|| format!("line {}: bad date `{}`", line_no + 1, fields[1]))?;
    let high: f64 = fields[2]
      .parse()
      .with_context(|| format!("line {}: bad high", line_no + 1))?;
    let low: f64 = fields[3]
      .parse()
      .with_context(|| format!("line {}: bad low", line_no + 1))?;
    let close: f64 = fields[4]
      .parse()
      .with_context(|| format!("line {}: bad close", line_no + 1))?;

    if !bars.contains_key(&ticker) {
      order.push(ticker.clone());
    }
    bars
      .entry(ticker)
      .or_default()
      .push(DailyBar::new(date, high, low, close));
  }

  Ok(
    order
      .into_iter()
      .map(|ticker| {
        let history = bars.remove(&ticker).unwrap_or_default();
        PriceSeries::new(ticker, history)
      })
      .collect(),
  )
}
