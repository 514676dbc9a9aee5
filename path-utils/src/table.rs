use std::collections::BTreeMap;

use lib_core_error::{CoreError, CoreResult};

/// Histogram of the residue character at a 1-based alignment site across a
/// list of sequences. Used both standalone and as the natural way to build
/// a `NodeSummary` for `lib-min-entropy` from the tips under one tree node.
pub fn table_aa(seqs: &[String], site_index: usize) -> CoreResult<BTreeMap<char, u32>> {
  if site_index == 0 {
    return Err(CoreError::InvalidInput("site index is 1-based, got 0".into()));
  }
  let site0 = site_index - 1;

  let mut table = BTreeMap::new();
  for seq in seqs {
    let residue = seq.chars().nth(site0).ok_or_else(|| {
      CoreError::InvalidInput(format!(
        "site index {site_index} is out of range for a sequence of length {}",
        seq.chars().count()
      ))
    })?;
    *table.entry(residue).or_insert(0u32) += 1;
  }
  Ok(table)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tallies_residues_at_site() {
    let seqs = vec!["AC".to_string(), "AC".to_string(), "TG".to_string()];
    let table = table_aa(&seqs, 1).unwrap();
    assert_eq!(table.get(&'A'), Some(&2));
    assert_eq!(table.get(&'T'), Some(&1));
  }

  #[test]
  fn rejects_zero_site_index() {
    let seqs = vec!["AC".to_string()];
    assert!(table_aa(&seqs, 0).is_err());
  }

  #[test]
  fn rejects_out_of_range_site() {
    let seqs = vec!["AC".to_string()];
    assert!(table_aa(&seqs, 5).is_err());
  }
}
