use lib_core_error::{CoreError, CoreResult};
use lib_genome_kit::genome::Genome;
use lib_treemer::{TipArena, by_site};

use crate::lumpy::LumpyCluster;
use crate::metric_matrix::MetricMatrix;
use crate::semantics::MetricSemantics;

/// Drives `Treemer::BySite` + `LumpyCluster` across every requested site.
/// `site_indices` are 1-based alignment columns, matching the external
/// tip-path/residue convention used throughout.
///
/// Output order is deterministic: site order, then residue-key order (the
/// `BTreeMap<char, _>` ordering `Treemer::BySite` already produces), then
/// merge-construction order within a residue group.
pub fn terminal_tips<M: MetricSemantics>(
  tip_paths: &[Vec<u64>],
  aligned_seqs: &[Genome],
  sim_matrix: &MetricMatrix,
  site_indices: &[usize],
  min_snp_num: usize,
  z_value: i32,
) -> CoreResult<Vec<Vec<u64>>> {
  if site_indices.is_empty() {
    return Err(CoreError::InvalidInput("no site indices supplied".into()));
  }

  let mut arena = TipArena::build(tip_paths, aligned_seqs)?;
  let seq_len = arena.seq_len();

  let mut terminal = Vec::new();
  for &site in site_indices {
    if site == 0 || site > seq_len {
      return Err(CoreError::InvalidInput(format!(
        "site index {site} is out of range for sequences of length {seq_len}"
      )));
    }
    let site0 = site - 1;
    let site_clusters = by_site(&mut arena, site0);
    for (_residue, raw_clusters) in site_clusters.into_groups() {
      let merger = LumpyCluster::<M>::new(sim_matrix, &raw_clusters, z_value)?;
      for cluster in merger.final_clusters() {
        if cluster.len() >= min_snp_num {
          terminal.push(cluster);
        }
      }
    }
  }

  log::debug!("terminal_tips: {} clusters across {} sites", terminal.len(), site_indices.len());
  Ok(terminal)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::metric_matrix::similarity_matrix;
  use crate::semantics::BySimMatrix;

  fn genome(s: &str) -> Genome {
    Genome::from(s.chars())
  }

  #[test]
  fn rejects_empty_site_list() {
    let seqs = vec![genome("AC"), genome("AC")];
    let matrix = similarity_matrix(&seqs);
    let paths = vec![vec![1, 2], vec![1, 3]];
    let err = terminal_tips::<BySimMatrix>(&paths, &seqs, &matrix, &[], 1, 0).unwrap_err();
    assert!(matches!(err, CoreError::InvalidInput(_)));
  }

  #[test]
  fn rejects_out_of_range_site() {
    let seqs = vec![genome("AC"), genome("AC")];
    let matrix = similarity_matrix(&seqs);
    let paths = vec![vec![1, 2], vec![1, 3]];
    let err = terminal_tips::<BySimMatrix>(&paths, &seqs, &matrix, &[3], 1, 0).unwrap_err();
    assert!(matches!(err, CoreError::InvalidInput(_)));
  }

  #[test]
  fn filters_by_min_snp_num() {
    let seqs = vec![genome("AA"), genome("AA"), genome("TA")];
    let matrix = similarity_matrix(&seqs);
    let paths = vec![vec![1, 2, 5], vec![1, 2, 6], vec![1, 3, 7]];
    let clusters = terminal_tips::<BySimMatrix>(&paths, &seqs, &matrix, &[1], 2, 0).unwrap();
    assert!(clusters.iter().all(|c| c.len() >= 2));
    assert!(clusters.iter().any(|c| c.contains(&1) && c.contains(&2)));
  }
}
