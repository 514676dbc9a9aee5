pub mod lumpy;
pub mod metric_matrix;
pub mod semantics;
pub mod terminal_tips;

pub use lumpy::LumpyCluster;
pub use metric_matrix::{MetricMatrix, similarity_matrix};
pub use semantics::{ByDistMatrix, BySimMatrix, MetricSemantics};
pub use terminal_tips::terminal_tips;
