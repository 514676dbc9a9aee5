use std::marker::PhantomData;

use lib_core_error::{CoreError, CoreResult};
use lib_treemer::TipId;

use crate::metric_matrix::MetricMatrix;
use crate::semantics::MetricSemantics;

fn cluster_compare(metric: &MetricMatrix, query: &[TipId], subject: &[TipId]) -> f64 {
  let mut sum = 0.0;
  let mut count = 0u64;
  for &a in query {
    for &b in subject {
      sum += metric.get_by_tip(a, b);
      count += 1;
    }
  }
  if count == 0 { 0.0 } else { sum / count as f64 }
}

/// Pooled mean/stdev of the metric over all unordered pairs of `pooled`.
///
/// Uses the sums-of-squares form (`(sum_sq*n - sum^2) / n^2`), clamping a
/// negative variance from floating-point rounding to zero before the square
/// root, and treating a pool of `<= 1` tips (no pairs to average) as
/// stdev `0`.
fn pooled_mean_stdev(metric: &MetricMatrix, pooled: &[TipId]) -> (f64, f64) {
  if pooled.len() <= 1 {
    return (0.0, 0.0);
  }
  let mut sum = 0.0;
  let mut sq_sum = 0.0;
  let mut count = 0u64;
  for i in 0..pooled.len() - 1 {
    for j in i + 1..pooled.len() {
      let v = metric.get_by_tip(pooled[i], pooled[j]);
      sum += v;
      sq_sum += v * v;
      count += 1;
    }
  }
  if count == 0 {
    return (0.0, 0.0);
  }
  let n = count as f64;
  let mean = sum / n;
  let variance = (n * sq_sum - sum * sum) / (n * n);
  (mean, variance.max(0.0).sqrt())
}

/// Threshold-driven merge engine over one residue key's raw clusters from
/// `Treemer::BySite`, generic over [`MetricSemantics`].
#[derive(Debug, Clone)]
pub struct LumpyCluster<M> {
  merged: Vec<Vec<TipId>>,
  _semantics: PhantomData<M>,
}

impl<M: MetricSemantics> LumpyCluster<M> {
  /// Greedily assigns each raw cluster (after the first) to the best
  /// qualifying merged cluster.
  pub fn new(metric: &MetricMatrix, raw_clusters: &[Vec<TipId>], z_value: i32) -> CoreResult<Self> {
    if raw_clusters.is_empty() {
      return Err(CoreError::InvalidInput("no raw clusters supplied".into()));
    }
    for cluster in raw_clusters {
      if cluster.is_empty() {
        return Err(CoreError::InvalidInput("a raw cluster is empty".into()));
      }
      for &tip in cluster {
        if !metric.contains(tip) {
          return Err(CoreError::InvariantViolation(format!(
            "raw cluster references tip {} outside the metric matrix",
            tip.get()
          )));
        }
      }
    }

    let mut merged: Vec<Vec<TipId>> = vec![raw_clusters[0].clone()];
    if raw_clusters.len() == 1 {
      return Ok(Self { merged, _semantics: PhantomData });
    }

    let mut pooled: Vec<TipId> = raw_clusters[0].clone();
    for cluster in &raw_clusters[1..] {
      pooled.extend_from_slice(cluster);
    }
    let (mean, stdev) = pooled_mean_stdev(metric, &pooled);
    let threshold = M::threshold(mean, stdev, z_value);
    log::debug!("lumpy merge: mean={mean:.4} stdev={stdev:.4} k={z_value} threshold={threshold:.4}");

    for candidate in &raw_clusters[1..] {
      let mut best_idx = 0usize;
      let mut best_metric = cluster_compare(metric, candidate, &merged[0]);
      for (idx, existing) in merged.iter().enumerate().skip(1) {
        let candidate_metric = cluster_compare(metric, candidate, existing);
        if M::better(candidate_metric, best_metric) {
          best_idx = idx;
          best_metric = candidate_metric;
        }
      }
      if M::qualifies(best_metric, threshold) {
        merged[best_idx].extend_from_slice(candidate);
      } else {
        merged.push(candidate.clone());
      }
    }

    Ok(Self { merged, _semantics: PhantomData })
  }

  /// Merged clusters as external (1-based) tip indices, preserving
  /// construction order.
  pub fn final_clusters(&self) -> Vec<Vec<u64>> {
    self.merged.iter().map(|cluster| cluster.iter().map(|t| t.get()).collect()).collect()
  }
}
