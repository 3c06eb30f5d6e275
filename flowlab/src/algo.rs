pub mod gomory_hu;
pub mod max_flow;
pub mod tree;

pub use gomory_hu::GomoryHu;
pub use max_flow::MaxFlow;
pub use tree::is_tree;
