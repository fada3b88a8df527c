pub mod generators;
pub mod store;
pub mod traits;

pub use store::{GraphStore, Node, NodeId};
pub use traits::Graph;
