pub mod compare;
pub mod entropy;
pub mod node_summary;
pub mod operators;
pub mod search;
pub mod segment;

use lib_core_error::CoreResult;

pub use compare::min_entropy_by_comparing;
pub use node_summary::NodeSummary;
pub use operators::{Amalgamator, MinEntropyOperator, Segmentor};
pub use search::SearchTree;
pub use segment::{Segment, Segmentation};

/// Insert-mode (`Segmentor`) search, mapped back onto 1-based original node
/// positions. Matches the original `minEntropyByInserting` entry point.
pub fn min_entropy_by_inserting(
  node_summaries: &[NodeSummary],
  min_effective_size: u64,
  search_depth: usize,
) -> CoreResult<Vec<Vec<usize>>> {
  let tree = SearchTree::<Segmentor>::search(node_summaries, min_effective_size, search_depth)?;
  Ok(tree.get_final().to_node_index_groups())
}

/// Delete-mode (`Amalgamator`) search, mapped back onto 1-based original
/// node positions. Matches the original `minEntropyByDeleting` entry point.
pub fn min_entropy_by_deleting(
  node_summaries: &[NodeSummary],
  min_effective_size: u64,
  search_depth: usize,
) -> CoreResult<Vec<Vec<usize>>> {
  let tree = SearchTree::<Amalgamator>::search(node_summaries, min_effective_size, search_depth)?;
  Ok(tree.get_final().to_node_index_groups())
}

/// Both operators, keeping the segmentation with more segments (ties favor
/// `Segmentor`), mapped back onto 1-based original node positions. Matches
/// the original `minEntropyByComparing` entry point.
pub fn min_entropy_by_comparing_groups(
  node_summaries: &[NodeSummary],
  min_effective_size: u64,
  search_depth: usize,
) -> CoreResult<Vec<Vec<usize>>> {
  let segmentation = min_entropy_by_comparing(node_summaries, min_effective_size, search_depth)?;
  Ok(segmentation.to_node_index_groups())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn inserting_splits_into_pure_residue_groups() {
    let nodes = vec![
      NodeSummary::from([('A', 10)]),
      NodeSummary::from([('A', 10)]),
      NodeSummary::from([('T', 10)]),
      NodeSummary::from([('T', 10)]),
    ];
    let groups = min_entropy_by_inserting(&nodes, 10, 4).unwrap();
    assert_eq!(groups, vec![vec![1, 2], vec![3, 4]]);
  }

  #[quickcheck_macros::quickcheck]
  fn prop_comparing_matches_the_larger_operator_count(counts: Vec<u8>) -> bool {
    if counts.is_empty() {
      return true;
    }
    let nodes: Vec<NodeSummary> =
      counts.iter().map(|&c| NodeSummary::from([('A', c as u64 + 1)])).collect();
    let total: u64 = nodes.iter().map(NodeSummary::total).sum();
    let min_effective = 1u64;
    if total < min_effective {
      return true;
    }
    let Ok(insert) = SearchTree::<Segmentor>::search(&nodes, min_effective, 4) else {
      return true;
    };
    let Ok(delete) = SearchTree::<Amalgamator>::search(&nodes, min_effective, 4) else {
      return true;
    };
    let Ok(compared) = min_entropy_by_comparing(&nodes, min_effective, 4) else {
      return true;
    };
    compared.len() >= insert.get_final().len().max(delete.get_final().len())
  }
}
