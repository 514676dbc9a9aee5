use lib_genome_kit::genome::Genome;

use crate::ids::{CladeId, TipId};

/// Fraction of alignment positions at which two sequences carry the same
/// non-gap residue, over positions where both are non-gap.
///
/// Identical sequences yield `1.0`. A pair with no shared non-gap position
/// is excluded from valid inputs by the spec; we return `0.0` rather than
/// panic.
pub fn sequence_similarity(a: &Genome, b: &Genome) -> f64 {
  let mut same = 0usize;
  let mut denom = 0usize;
  for (x, y) in a.iter().zip(b.iter()) {
    if x.is_gap() || y.is_gap() {
      continue;
    }
    denom += 1;
    if x == y {
      same += 1;
    }
  }
  if denom == 0 { 0.0 } else { same as f64 / denom as f64 }
}

/// Binds one tip's aligned sequence to its root-to-tip path and tracks a
/// cursor that advances rootward one clade at a time.
#[derive(Debug, Clone)]
pub struct TipSeqLinker {
  tip: TipId,
  seq: Genome,
  path: Vec<CladeId>,
  cursor: usize,
}

impl TipSeqLinker {
  pub(crate) fn new(tip: TipId, seq: Genome, path: Vec<CladeId>) -> Self {
    let cursor = path.len() - 1;
    Self { tip, seq, path, cursor }
  }

  /// Resets the cursor to the terminal (tip) position. Each per-site
  /// `Treemer::BySite` run starts from here; cursor state never survives
  /// across sites.
  pub(crate) fn reset_cursor(&mut self) {
    self.cursor = self.path.len() - 1;
  }

  #[inline]
  pub fn tip(&self) -> TipId {
    self.tip
  }

  #[inline]
  pub fn root(&self) -> CladeId {
    self.path[0]
  }

  #[inline]
  pub fn seq_len(&self) -> usize {
    self.seq.len()
  }

  #[inline]
  pub fn path(&self) -> &[CladeId] {
    &self.path
  }

  /// The clade at the cursor.
  #[inline]
  pub fn current_clade(&self) -> CladeId {
    self.path[self.cursor]
  }

  /// The clade one step rootward, capped at the root.
  #[inline]
  pub fn next_clade(&self) -> CladeId {
    if self.cursor == 0 { self.path[0] } else { self.path[self.cursor - 1] }
  }

  /// Advances the cursor rootward. No-op once the cursor is at the root.
  #[inline]
  pub(crate) fn proceed(&mut self) {
    if self.cursor > 0 {
      self.cursor -= 1;
    }
  }

  /// Residue at a 0-based alignment site. The cursor plays no part here:
  /// a tip's own sequence never changes as its cursor moves.
  #[inline]
  pub fn residue_at(&self, site: usize) -> lib_genome_kit::amino::AminoAcid {
    self.seq[site]
  }

  /// See [`sequence_similarity`].
  #[inline]
  pub fn compare(&self, other: &TipSeqLinker) -> f64 {
    sequence_similarity(&self.seq, &other.seq)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn linker(seq: &str, path: &[u64]) -> TipSeqLinker {
    TipSeqLinker::new(
      TipId::new(1),
      Genome::from(seq.chars()),
      path.iter().copied().map(CladeId::new).collect(),
    )
  }

  #[test]
  fn cursor_advances_and_caps_at_root() {
    let mut a = linker("AA", &[1, 2, 3]);
    assert_eq!(a.current_clade(), CladeId::new(3));
    assert_eq!(a.next_clade(), CladeId::new(2));
    a.proceed();
    assert_eq!(a.current_clade(), CladeId::new(2));
    assert_eq!(a.next_clade(), CladeId::new(1));
    a.proceed();
    assert_eq!(a.current_clade(), CladeId::new(1));
    // already at root: next_clade caps at root, proceed is a no-op.
    assert_eq!(a.next_clade(), CladeId::new(1));
    a.proceed();
    assert_eq!(a.current_clade(), CladeId::new(1));
  }

  #[test]
  fn compare_excludes_gaps() {
    let a = Genome::from("A-C".chars());
    let b = Genome::from("AGC".chars());
    // position 1 is a gap in `a`, excluded; positions 0 and 2 both match.
    assert_eq!(sequence_similarity(&a, &b), 1.0);
  }

  #[test]
  fn compare_counts_mismatches() {
    let a = Genome::from("AC".chars());
    let b = Genome::from("AG".chars());
    assert_eq!(sequence_similarity(&a, &b), 0.5);
  }

  #[test]
  fn compare_all_gap_pair_returns_zero() {
    let a = Genome::from("--".chars());
    let b = Genome::from("--".chars());
    assert_eq!(sequence_similarity(&a, &b), 0.0);
  }
}
