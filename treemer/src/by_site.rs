use std::collections::BTreeMap;

use crate::arena::TipArena;
use crate::ids::{CladeId, TipId};

/// Tips grouped by the clade they currently share, keyed together with the
/// residue they carry at the site under coalescence.
///
/// Keying purely by clade lets two lineages with *different* residues
/// collide at a shared ancestor and silently merge, which loses the signal
/// Treemer exists to find: residues `A`/`A`/`T` over paths that share a root
/// must stay split into `{1,2}` and `{3}`, never coalesce into one cluster
/// at the root. Carrying the residue in the key keeps same-residue lineages
/// free to coalesce all the way to the root while distinct-residue lineages
/// simply never land in the same bucket.
pub type RawClusters = BTreeMap<(CladeId, char), Vec<TipId>>;

/// Output of one [`by_site`] run: residue character -> raw clusters whose
/// members carry that residue at the site.
#[derive(Debug, Default, Clone)]
pub struct SiteClusters(BTreeMap<char, Vec<Vec<TipId>>>);

impl SiteClusters {
  /// Iterates groups in residue-character order: a stable, explicit-sort
  /// ordering rather than arbitrary map-iteration order.
  pub fn iter(&self) -> impl Iterator<Item = (char, &[Vec<TipId>])> {
    self.0.iter().map(|(&c, v)| (c, v.as_slice()))
  }

  pub fn into_groups(self) -> BTreeMap<char, Vec<Vec<TipId>>> {
    self.0
  }

  pub fn residue_keys(&self) -> impl Iterator<Item = char> + '_ {
    self.0.keys().copied()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

fn group_clusters(arena: &TipArena, site: usize) -> RawClusters {
  let mut map = RawClusters::new();
  for tip in arena.tips() {
    let residue: char = tip.residue_at(site).into();
    map.entry((tip.current_clade(), residue)).or_default().push(tip.tip());
  }
  map
}

/// Coalesces tips up the tree for one alignment site.
///
/// Resets every tip's cursor to its terminal position first: cursor state
/// never carries over between sites.
pub fn by_site(arena: &mut TipArena, site: usize) -> SiteClusters {
  arena.reset_cursors();
  let mut clusters = group_clusters(arena, site);

  loop {
    let mut advancing: Vec<(CladeId, char)> = Vec::new();
    for (&key, members) in &clusters {
      let (clade, _residue) = key;
      let representative = arena.get(members[0]);
      if clade == representative.root() {
        continue;
      }
      let shared_next = representative.next_clade();
      let shared_residue = representative.residue_at(site);
      let eligible = members.iter().all(|&t| {
        let linker = arena.get(t);
        linker.next_clade() == shared_next && linker.residue_at(site) == shared_residue
      });
      if eligible {
        advancing.push(key);
      }
    }

    if advancing.is_empty() {
      break;
    }

    for key in &advancing {
      if let Some(members) = clusters.remove(key) {
        for &t in &members {
          arena.get_mut(t).proceed();
        }
      }
    }
    clusters = group_clusters(arena, site);
  }

  log::trace!("site {}: {} raw clusters after coalescence", site, clusters.len());

  let mut grouped: BTreeMap<char, Vec<Vec<TipId>>> = BTreeMap::new();
  for ((_clade, residue), members) in clusters {
    grouped.entry(residue).or_default().push(members);
  }
  SiteClusters(grouped)
}
