mod id3;
mod node;

pub use id3::DecisionTree;
pub use node::TreeNode;
