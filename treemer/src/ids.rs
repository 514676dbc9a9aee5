/// Opaque internal tip index.
///
/// Matches the 1-based external contract directly (tip `i` in the input
/// lists is `TipId(i)`), so arena lookups and output lists never need a
/// translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TipId(u64);

impl TipId {
  #[inline]
  pub fn new(index: u64) -> Self {
    Self(index)
  }

  /// The 1-based external tip index.
  #[inline]
  pub fn get(self) -> u64 {
    self.0
  }
}

/// Opaque internal tree-node (clade) index, as supplied by the caller's
/// root-to-tip paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CladeId(u64);

impl CladeId {
  #[inline]
  pub fn new(index: u64) -> Self {
    Self(index)
  }

  #[inline]
  pub fn get(self) -> u64 {
    self.0
  }
}
