use std::collections::BTreeMap;

/// Per-node residue histogram at one alignment site.
///
/// Built the same way `lib_path_utils::table_aa` builds one: residue
/// character -> count of tips carrying it under this node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodeSummary(BTreeMap<char, u64>);

impl NodeSummary {
  pub fn new(counts: BTreeMap<char, u64>) -> Self {
    Self(counts)
  }

  #[inline]
  pub fn total(&self) -> u64 {
    self.0.values().sum()
  }

  #[inline]
  pub fn counts(&self) -> impl Iterator<Item = (char, u64)> + '_ {
    self.0.iter().map(|(&c, &n)| (c, n))
  }

  /// Element-wise sum with another summary, used to fold a contiguous run
  /// of node summaries into one segment's aggregate histogram.
  pub fn merged_with(&self, other: &Self) -> Self {
    let mut merged = self.0.clone();
    for (&c, &n) in &other.0 {
      *merged.entry(c).or_insert(0) += n;
    }
    Self(merged)
  }
}

impl<I: IntoIterator<Item = (char, u64)>> From<I> for NodeSummary {
  fn from(iter: I) -> Self {
    Self(iter.into_iter().collect())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn total_sums_all_residues() {
    let ns = NodeSummary::from([('A', 10), ('T', 5)]);
    assert_eq!(ns.total(), 15);
  }

  #[test]
  fn merged_with_adds_shared_residues() {
    let a = NodeSummary::from([('A', 10)]);
    let b = NodeSummary::from([('A', 5), ('T', 2)]);
    let merged = a.merged_with(&b);
    assert_eq!(merged.total(), 17);
    assert_eq!(merged.counts().collect::<BTreeMap<_, _>>(), BTreeMap::from([('A', 15), ('T', 2)]));
  }
}
