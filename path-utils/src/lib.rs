pub mod paths;
pub mod reference;
pub mod table;

pub use paths::{divergent_node, merge_paths};
pub use reference::get_reference;
pub use table::table_aa;
