use rayon::prelude::*;

use lib_core_error::{CoreError, CoreResult};
use lib_genome_kit::genome::Genome;
use lib_treemer::{TipId, sequence_similarity};

/// A read-only, square pairwise metric over tips, indexed 1-based to match
/// `TipId`. Borrowed by every `LumpyCluster` invocation for the duration of
/// one top-level call; never mutated.
#[derive(Debug, Clone)]
pub struct MetricMatrix {
  dim: usize,
  values: Vec<f64>,
}

impl MetricMatrix {
  pub fn from_rows(values: Vec<Vec<f64>>) -> CoreResult<Self> {
    let dim = values.len();
    if values.iter().any(|row| row.len() != dim) {
      return Err(CoreError::InvalidInput("metric matrix is not square".into()));
    }
    Ok(Self { dim, values: values.into_iter().flatten().collect() })
  }

  fn from_flat(dim: usize, values: Vec<f64>) -> Self {
    debug_assert_eq!(values.len(), dim * dim);
    Self { dim, values }
  }

  #[inline]
  pub fn dim(&self) -> usize {
    self.dim
  }

  #[inline]
  pub fn get(&self, i: usize, j: usize) -> f64 {
    self.values[i * self.dim + j]
  }

  #[inline]
  pub fn get_by_tip(&self, a: TipId, b: TipId) -> f64 {
    self.get((a.get() - 1) as usize, (b.get() - 1) as usize)
  }

  /// Whether `tip` falls within this matrix's 1-based `[1, dim]` range.
  pub fn contains(&self, tip: TipId) -> bool {
    let idx = tip.get();
    idx >= 1 && idx as usize <= self.dim
  }
}

/// Pairwise identity similarity among aligned sequences:
/// `TipSeqLinker::compare` for every off-diagonal pair, `1.0` on the
/// diagonal. Computed once per batch and shared by reference across
/// whichever `LumpyCluster` variant the caller runs. This is an
/// embarrassingly-parallel, read-only workload, so the off-diagonal pairs
/// are computed with `rayon`, mirroring how `lib-kruskal` parallelized its
/// own all-pairs edge computation.
pub fn similarity_matrix(aligned_seqs: &[Genome]) -> MetricMatrix {
  let n = aligned_seqs.len();
  let pairs: Vec<(usize, usize, f64)> = (0..n)
    .into_par_iter()
    .flat_map_iter(|i| {
      (i + 1..n).map(move |j| (i, j, sequence_similarity(&aligned_seqs[i], &aligned_seqs[j])))
    })
    .collect();

  let mut values = vec![0.0; n * n];
  for i in 0..n {
    values[i * n + i] = 1.0;
  }
  for (i, j, sim) in pairs {
    values[i * n + j] = sim;
    values[j * n + i] = sim;
  }
  MetricMatrix::from_flat(n, values)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn genome(s: &str) -> Genome {
    Genome::from(s.chars())
  }

  #[test]
  fn symmetric_with_unit_diagonal() {
    let seqs = vec![genome("AC"), genome("AG"), genome("TC")];
    let matrix = similarity_matrix(&seqs);
    for i in 0..matrix.dim() {
      assert_eq!(matrix.get(i, i), 1.0);
      for j in 0..matrix.dim() {
        assert_eq!(matrix.get(i, j), matrix.get(j, i));
      }
    }
  }

  #[test]
  fn identity_for_identical_sequences() {
    let seqs = vec![genome("ARND"), genome("ARND")];
    let matrix = similarity_matrix(&seqs);
    assert_eq!(matrix.get(0, 1), 1.0);
  }

  /// The similarity matrix is always symmetric with a unit diagonal, for
  /// any sequences of any (possibly mismatched) length: `sequence_similarity`
  /// zips to the shorter one rather than panicking.
  #[quickcheck_macros::quickcheck]
  fn prop_similarity_matrix_symmetric_with_unit_diagonal(raw_seqs: Vec<String>) -> bool {
    if raw_seqs.is_empty() || raw_seqs.iter().any(|s| s.is_empty()) {
      return true;
    }
    let seqs: Vec<Genome> = raw_seqs.iter().map(|s| genome(s)).collect();
    let matrix = similarity_matrix(&seqs);
    (0..matrix.dim()).all(|i| {
      matrix.get(i, i) == 1.0 && (0..matrix.dim()).all(|j| matrix.get(i, j) == matrix.get(j, i))
    })
  }
}
