/// A tagged variant over metric semantics, in place of the base-class
/// inheritance the source uses: three pure functions capture everything
/// `LumpyCluster::Base` needs to know about whether the pairwise metric is a
/// similarity (higher = closer) or a distance (lower = closer).
pub trait MetricSemantics {
  /// Derives the qualifying threshold from the pooled mean/stdev and the
  /// strictness knob `k`.
  fn threshold(mean: f64, stdev: f64, k: i32) -> f64;

  /// Whether `query` is a better pairing than `subject` for the candidate
  /// raw cluster.
  fn better(query: f64, subject: f64) -> bool;

  /// Whether `metric` clears `threshold` to qualify for merging.
  fn qualifies(metric: f64, threshold: f64) -> bool;
}

/// Similarity semantics: higher metric values mean closer relationship.
#[derive(Debug, Clone, Copy, Default)]
pub struct BySimMatrix;

impl MetricSemantics for BySimMatrix {
  #[inline]
  fn threshold(mean: f64, stdev: f64, k: i32) -> f64 {
    mean + stdev * f64::from(k)
  }

  #[inline]
  fn better(query: f64, subject: f64) -> bool {
    query > subject
  }

  #[inline]
  fn qualifies(metric: f64, threshold: f64) -> bool {
    metric > threshold
  }
}

/// Distance semantics: lower metric values mean closer relationship.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByDistMatrix;

impl MetricSemantics for ByDistMatrix {
  #[inline]
  fn threshold(mean: f64, stdev: f64, k: i32) -> f64 {
    mean - stdev * f64::from(k)
  }

  #[inline]
  fn better(query: f64, subject: f64) -> bool {
    query < subject
  }

  #[inline]
  fn qualifies(metric: f64, threshold: f64) -> bool {
    metric < threshold
  }
}
