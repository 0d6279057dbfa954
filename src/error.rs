use thiserror::Error;

/// Errors raised when constructing a board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// A zero-area board has no cells to play on.
  #[error("invalid dimensions {width}x{height}: both must be positive")]
  InvalidDimensions { width: usize, height: usize },
}
