mod llrb;
mod std_btree;

pub use llrb::LlrbSet;
pub use std_btree::StdBTreeSet;
