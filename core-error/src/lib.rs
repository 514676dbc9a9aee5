//! Shared error type for the site-path clustering core.
//!
//! Every crate in the workspace returns `Result<T, CoreError>` at its public
//! boundary. Numeric edge conditions (zero-pair variance pools, empty
//! entropy segments) are recovered locally by callers and never reach this
//! type.

use thiserror::Error;

/// The two error kinds that fail a top-level call outright.
///
/// `NumericEdge` conditions (zero-pair variance pools, empty entropy
/// segments) are recovered locally by the component that hits them and so
/// have no variant here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
  /// The caller-supplied inputs are not well formed: mismatched roots,
  /// mismatched sequence lengths, an empty site list, a zero
  /// `minEffectiveSize`, or an out-of-range index.
  #[error("invalid input: {0}")]
  InvalidInput(String),

  /// An internal invariant was violated: a cluster referencing a tip
  /// outside the metric matrix, or a search reaching an illegal
  /// segmentation state.
  #[error("invariant violation: {0}")]
  InvariantViolation(String),
}

/// Convenience alias used throughout the workspace.
pub type CoreResult<T> = Result<T, CoreError>;
