use lib_core_error::CoreResult;

use crate::node_summary::NodeSummary;
use crate::operators::{Amalgamator, Segmentor};
use crate::search::SearchTree;
use crate::segment::Segmentation;

/// Runs both operators independently and returns the final segmentation
/// with the larger segment count; on a tie, returns the `Segmentor` result.
///
/// The source computes the tie case via a second, behaviorally identical
/// call to `iSearch.getFinal()`; returning the already-computed `Segmentor`
/// result is equivalent and avoids the redundant call.
pub fn min_entropy_by_comparing(
  node_summaries: &[NodeSummary],
  min_effective_size: u64,
  search_depth: usize,
) -> CoreResult<Segmentation> {
  let insert = SearchTree::<Segmentor>::search(node_summaries, min_effective_size, search_depth)?;
  let delete = SearchTree::<Amalgamator>::search(node_summaries, min_effective_size, search_depth)?;

  let (i_final, d_final) = (insert.get_final(), delete.get_final());
  if i_final.len() >= d_final.len() {
    Ok(i_final.clone())
  } else {
    Ok(d_final.clone())
  }
}
