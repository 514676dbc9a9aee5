use std::marker::PhantomData;

use lib_core_error::{CoreError, CoreResult};

use crate::entropy::segmentation_cost;
use crate::node_summary::NodeSummary;
use crate::operators::{MinEntropyOperator, is_legal};
use crate::segment::Segmentation;

#[derive(Clone)]
struct State {
  segmentation: Segmentation,
  cost: f64,
}

/// A bounded best-first search over segmentations.
///
/// Generic over the operator (`Segmentor` or `Amalgamator`), which supplies
/// the starting state and the legal single-move neighbors of any state.
/// `searchDepth` caps the frontier of unexpanded states (the de-facto beam
/// width).
pub struct SearchTree<Op> {
  min_effective_size: u64,
  search_depth: usize,
  best: State,
  _operator: PhantomData<Op>,
}

impl<Op: MinEntropyOperator> SearchTree<Op> {
  /// Runs the search to completion and returns the lowest-cost legal
  /// segmentation ever reached. Fails if `node_summaries` is empty,
  /// `min_effective_size` is zero, or no legal starting state exists (the
  /// whole sequence's total count is below `min_effective_size`).
  pub fn search(
    node_summaries: &[NodeSummary],
    min_effective_size: u64,
    search_depth: usize,
  ) -> CoreResult<Self> {
    if node_summaries.is_empty() {
      return Err(CoreError::InvalidInput("node summaries are empty".into()));
    }
    if min_effective_size == 0 {
      return Err(CoreError::InvalidInput("minEffectiveSize must be nonzero".into()));
    }
    if search_depth == 0 {
      return Err(CoreError::InvalidInput("searchDepth must be nonzero".into()));
    }

    let whole_total: u64 = node_summaries.iter().map(NodeSummary::total).sum();
    if whole_total < min_effective_size {
      log::debug!(
        "min-entropy: whole-sequence total {whole_total} below minEffectiveSize {min_effective_size}, no legal state exists"
      );
      return Ok(Self {
        min_effective_size,
        search_depth,
        best: State { segmentation: Segmentation::empty(), cost: f64::INFINITY },
        _operator: PhantomData,
      });
    }

    let start = Op::start(node_summaries.len());
    let start_cost = segmentation_cost(node_summaries, &start);
    let start_legal = is_legal(node_summaries, &start, min_effective_size);

    let mut best = if start_legal {
      State { segmentation: start.clone(), cost: start_cost }
    } else {
      // The fully-merged single segment is always legal given the
      // whole-sequence check above; it is the search's fallback floor.
      let whole = Segmentation::whole(node_summaries.len());
      let whole_cost = segmentation_cost(node_summaries, &whole);
      State { segmentation: whole, cost: whole_cost }
    };
    let mut best_is_legal = true;

    let mut frontier: Vec<State> = vec![State { segmentation: start, cost: start_cost }];

    loop {
      let Some(state) = frontier.first().cloned() else {
        break;
      };
      frontier.remove(0);

      let neighbors = Op::neighbors(node_summaries, &state.segmentation, min_effective_size);
      let mut improved = false;

      for neighbor in neighbors {
        let legal = is_legal(node_summaries, &neighbor.segmentation, min_effective_size);
        if legal && (!best_is_legal || neighbor.cost < best.cost) {
          best = State { segmentation: neighbor.segmentation.clone(), cost: neighbor.cost };
          best_is_legal = true;
          improved = true;
        }
        frontier.push(State { segmentation: neighbor.segmentation, cost: neighbor.cost });
      }

      frontier.sort_by(|a, b| a.cost.partial_cmp(&b.cost).unwrap_or(std::cmp::Ordering::Equal));
      frontier.truncate(search_depth);

      if frontier.is_empty() {
        break;
      }
      if best_is_legal && !improved {
        log::trace!("min-entropy: search converged at cost {:.4}", best.cost);
        break;
      }
    }

    Ok(Self { min_effective_size, search_depth, best, _operator: PhantomData })
  }

  /// The lowest-cost segmentation reached, matching the original `getFinal()`
  /// accessor. Empty when no legal starting state existed.
  pub fn get_final(&self) -> &Segmentation {
    &self.best.segmentation
  }

  pub fn final_cost(&self) -> f64 {
    self.best.cost
  }

  #[inline]
  pub fn min_effective_size(&self) -> u64 {
    self.min_effective_size
  }

  #[inline]
  pub fn search_depth(&self) -> usize {
    self.search_depth
  }
}
