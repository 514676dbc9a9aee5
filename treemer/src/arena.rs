use lib_core_error::{CoreError, CoreResult};
use lib_genome_kit::genome::Genome;

use crate::ids::{CladeId, TipId};
use crate::linker::TipSeqLinker;

/// Owns every `TipSeqLinker` allocated for one top-level call.
///
/// Clusters built against an arena hold only `TipId`s, never references, so
/// they cannot outlive it and there is nothing to free by hand: the arena's
/// `Drop` releases every tip when the owning operation returns, on every
/// exit path including error, which is what the original's "delete on
/// success path only" required doing manually.
#[derive(Debug)]
pub struct TipArena {
  tips: Vec<TipSeqLinker>,
}

impl TipArena {
  /// Builds one linker per `(path, sequence)` pair, validating the shared
  /// invariants from the spec: every tip has the same path root, and every
  /// sequence has the same length.
  pub fn build(tip_paths: &[Vec<u64>], aligned_seqs: &[Genome]) -> CoreResult<Self> {
    if tip_paths.is_empty() || aligned_seqs.is_empty() {
      return Err(CoreError::InvalidInput("no tips supplied".into()));
    }
    if tip_paths.len() != aligned_seqs.len() {
      return Err(CoreError::InvalidInput(format!(
        "{} tip paths but {} aligned sequences",
        tip_paths.len(),
        aligned_seqs.len()
      )));
    }

    let root = CladeId::new(
      *tip_paths[0]
        .first()
        .ok_or_else(|| CoreError::InvalidInput("tip 1 has an empty path".to_string()))?,
    );
    let seq_len = aligned_seqs[0].len();

    let mut tips = Vec::with_capacity(tip_paths.len());
    for (i, (path, seq)) in tip_paths.iter().zip(aligned_seqs.iter()).enumerate() {
      let first = path
        .first()
        .ok_or_else(|| CoreError::InvalidInput(format!("tip {} has an empty path", i + 1)))?;
      if CladeId::new(*first) != root {
        return Err(CoreError::InvalidInput("root in tree paths not equal".into()));
      }
      if seq.len() != seq_len {
        return Err(CoreError::InvalidInput("sequence length not equal".into()));
      }
      let clade_path: Vec<CladeId> = path.iter().copied().map(CladeId::new).collect();
      tips.push(TipSeqLinker::new(TipId::new((i + 1) as u64), seq.clone(), clade_path));
    }
    log::debug!("built tip arena with {} tips, root={:?}", tips.len(), root);
    Ok(Self { tips })
  }

  #[inline]
  pub fn tips(&self) -> &[TipSeqLinker] {
    &self.tips
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.tips.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.tips.is_empty()
  }

  #[inline]
  pub fn seq_len(&self) -> usize {
    self.tips.first().map_or(0, TipSeqLinker::seq_len)
  }

  #[inline]
  pub fn get(&self, id: TipId) -> &TipSeqLinker {
    &self.tips[(id.get() - 1) as usize]
  }

  #[inline]
  pub(crate) fn get_mut(&mut self, id: TipId) -> &mut TipSeqLinker {
    &mut self.tips[(id.get() - 1) as usize]
  }

  pub(crate) fn reset_cursors(&mut self) {
    for tip in &mut self.tips {
      tip.reset_cursor();
    }
  }
}
