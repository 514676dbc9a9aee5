pub mod arena;
pub mod by_site;
pub mod ids;
pub mod linker;

pub use arena::TipArena;
pub use by_site::{RawClusters, SiteClusters, by_site};
pub use ids::{CladeId, TipId};
pub use linker::{TipSeqLinker, sequence_similarity};
