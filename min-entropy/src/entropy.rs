use crate::node_summary::NodeSummary;
use crate::segment::{Segment, Segmentation};

/// Aggregate histogram of every node folded into `segment`.
fn segment_summary(nodes: &[NodeSummary], segment: &Segment) -> NodeSummary {
  let mut acc = NodeSummary::default();
  for node in &nodes[segment.start..=segment.end] {
    acc = acc.merged_with(node);
  }
  acc
}

/// Entropy cost of one segment: sum over residues `r` of
/// `-count_r * ln(count_r / total)`. An empty segment contributes zero; an
/// all-one-residue segment is exactly zero since `ln(1) == 0`.
pub fn segment_cost(nodes: &[NodeSummary], segment: &Segment) -> f64 {
  let summary = segment_summary(nodes, segment);
  let total = summary.total();
  if total == 0 {
    return 0.0;
  }
  let total_f = total as f64;
  summary
    .counts()
    .map(|(_, count)| {
      if count == 0 {
        0.0
      } else {
        let count_f = count as f64;
        -count_f * (count_f / total_f).ln()
      }
    })
    .sum()
}

/// Sum of every segment's cost.
pub fn segmentation_cost(nodes: &[NodeSummary], segmentation: &Segmentation) -> f64 {
  segmentation.segments().iter().map(|seg| segment_cost(nodes, seg)).sum()
}
