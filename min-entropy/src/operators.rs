use crate::entropy::segment_cost;
use crate::node_summary::NodeSummary;
use crate::segment::{Segment, Segmentation};

/// Total count under one segment, used for the `minEffectiveSize` legality
/// checks in both operators.
fn segment_total(nodes: &[NodeSummary], segment: &Segment) -> u64 {
  nodes[segment.start..=segment.end].iter().map(NodeSummary::total).sum()
}

/// Whether every segment in `segmentation` meets `min_effective_size`.
pub fn is_legal(nodes: &[NodeSummary], segmentation: &Segmentation, min_effective_size: u64) -> bool {
  segmentation.segments().iter().all(|seg| segment_total(nodes, seg) >= min_effective_size)
}

/// One move of a [`MinEntropyOperator`], paired with the cost recomputed
/// for the resulting state so callers never have to re-derive it.
pub struct Neighbor {
  pub segmentation: Segmentation,
  pub cost: f64,
}

/// Captures the two dual search operators behind one interface, so
/// `SearchTree` (in `search.rs`) stays generic over which direction it
/// explores.
pub trait MinEntropyOperator {
  /// The starting segmentation for this operator.
  fn start(node_count: usize) -> Segmentation;

  /// Every legal neighbor reachable from `current` by one move, together
  /// with its entropy cost. Neighbor generation order is preserved so
  /// equal-cost ties resolve deterministically.
  fn neighbors(nodes: &[NodeSummary], current: &Segmentation, min_effective_size: u64) -> Vec<Neighbor>;
}

fn segmentation_total_cost(nodes: &[NodeSummary], segments: &[Segment]) -> f64 {
  segments.iter().map(|seg| segment_cost(nodes, seg)).sum()
}

/// Insert-mode operator: a move splits one existing segment at one interior
/// boundary. A split is legal only if both resulting segments meet
/// `min_effective_size`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Segmentor;

impl MinEntropyOperator for Segmentor {
  fn start(node_count: usize) -> Segmentation {
    Segmentation::whole(node_count)
  }

  fn neighbors(nodes: &[NodeSummary], current: &Segmentation, min_effective_size: u64) -> Vec<Neighbor> {
    let segments = current.segments();
    let mut neighbors = Vec::new();

    for (idx, seg) in segments.iter().enumerate() {
      // Interior boundaries: split after `seg.start + k` for k in 0..seg.len()-1.
      for split_at in seg.start..seg.end {
        let left = Segment::new(seg.start, split_at);
        let right = Segment::new(split_at + 1, seg.end);
        if segment_total(nodes, &left) < min_effective_size
          || segment_total(nodes, &right) < min_effective_size
        {
          continue;
        }
        let mut next: Vec<Segment> = segments[..idx].to_vec();
        next.push(left);
        next.push(right);
        next.extend_from_slice(&segments[idx + 1..]);
        let cost = segmentation_total_cost(nodes, &next);
        neighbors.push(Neighbor { segmentation: Segmentation::from_segments(next), cost });
      }
    }

    neighbors
  }
}

/// Delete-mode operator: a move merges two adjacent segments. Always
/// structurally legal to generate; overall legality against
/// `min_effective_size` is checked by the caller via [`is_legal`] when
/// deciding whether a state can be the search's final answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Amalgamator;

impl MinEntropyOperator for Amalgamator {
  fn start(node_count: usize) -> Segmentation {
    Segmentation::singletons(node_count)
  }

  fn neighbors(nodes: &[NodeSummary], current: &Segmentation, _min_effective_size: u64) -> Vec<Neighbor> {
    let segments = current.segments();
    let mut neighbors = Vec::new();

    for idx in 0..segments.len().saturating_sub(1) {
      let merged = Segment::new(segments[idx].start, segments[idx + 1].end);
      let mut next: Vec<Segment> = segments[..idx].to_vec();
      next.push(merged);
      next.extend_from_slice(&segments[idx + 2..]);
      let cost = segmentation_total_cost(nodes, &next);
      neighbors.push(Neighbor { segmentation: Segmentation::from_segments(next), cost });
    }

    neighbors
  }
}
