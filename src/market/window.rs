use std::fmt::Display;

/// Trading-day lookback applied to return series before correlation estimation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CorrelationWindow {
  OneWeek,
  TenDays,
  OneMonth,
  ThreeMonths,
  SixMonths,
  OneYear,
  TwoYears,
  FiveYears,
}

impl CorrelationWindow {
  /// Every window, shortest first.
  pub const ALL: [CorrelationWindow; 8] = [
    CorrelationWindow::OneWeek,
    CorrelationWindow::TenDays,
    CorrelationWindow::OneMonth,
    CorrelationWindow::ThreeMonths,
    CorrelationWindow::SixMonths,
    CorrelationWindow::OneYear,
    CorrelationWindow::TwoYears,
    CorrelationWindow::FiveYears,
  ];

  /// Number of trading days covered by the window.
  pub fn trading_days(&self) -> usize {
    match self {
      Self::OneWeek => 5,
      Self::TenDays => 10,
      Self::OneMonth => 21,
      Self::ThreeMonths => 63,
      Self::SixMonths => 126,
      Self::OneYear => 252,
      Self::TwoYears => 504,
      Self::FiveYears => 1260,
    }
  }

  /// Parse a window from a human label.
  pub fn from_str(s: &str) -> Self {
    match s.to_lowercase().replace(' ', "-").as_str() {
      "1-week" | "1w" | "week" => Self::OneWeek,
      "10-days" | "10d" => Self::TenDays,
      "1-month" | "1m" | "month" => Self::OneMonth,
      "3-months" | "3m" => Self::ThreeMonths,
      "6-months" | "6m" => Self::SixMonths,
      "1-year" | "1y" | "year" => Self::OneYear,
      "2-years" | "2y" => Self::TwoYears,
      _ => Self::FiveYears,
    }
  }
}

impl Display for CorrelationWindow {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      CorrelationWindow::OneWeek => write!(f, "1 Week"),
      CorrelationWindow::TenDays => write!(f, "10 Days"),
      CorrelationWindow::OneMonth => write!(f, "1 Month"),
      CorrelationWindow::ThreeMonths => write!(f, "3 Months"),
      CorrelationWindow::SixMonths => write!(f, "6 Months"),
      CorrelationWindow::OneYear => write!(f, "1 Year"),
      CorrelationWindow::TwoYears => write!(f, "2 Years"),
      CorrelationWindow::FiveYears => write!(f, "5 Years"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn trading_days_are_monotone() {
    let days: Vec<usize> = CorrelationWindow::ALL
      .iter()
      .map(|w| w.trading_days())
      .collect();
    assert_eq!(days, vec![5, 10, 21, 63, 126, 252, 504, 1260]);
    assert!(days.windows(2).all(|pair| pair[0] < pair[1]));
  }

  #[test]
  fn labels_round_trip() {
    for window in CorrelationWindow::ALL {
      assert_eq!(CorrelationWindow::from_str(&window.to_string()), window);
    }
  }

  #[test]
  fn from_str_is_lenient() {
    assert_eq!(
      CorrelationWindow::from_str("6M"),
      CorrelationWindow::SixMonths
    );
    assert_eq!(
      CorrelationWindow::from_str("1 year"),
      CorrelationWindow::OneYear
    );
    assert_eq!(
      CorrelationWindow::from_str("anything else"),
      CorrelationWindow::FiveYears
    );
  }
}
