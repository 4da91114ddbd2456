use thiserror::Error;

/// Rejected inputs for correlation matrix construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
  #[error("matrix is not square: row {row} has {len} entries, expected {dim}")]
  NotSquare { row: usize, len: usize, dim: usize },

  #[error("ticker axis has {tickers} labels but matrix dimension is {dim}")]
  TickerMismatch { tickers: usize, dim: usize },

  #[error("duplicate ticker `{0}` on matrix axis")]
  DuplicateTicker(String),

  #[error("return series for `{0}` has no observations")]
  EmptyReturns(String),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages_carry_context() {
    let err = InvalidInput::NotSquare {
      row: 1,
      len: 2,
      dim: 3,
    };
    assert_eq!(
      err.to_string(),
      "matrix is not square: row 1 has 2 entries, expected 3"
    );

    let err = InvalidInput::DuplicateTicker("AAA".to_string());
    assert!(err.to_string().contains("AAA"));
  }
}
