pub mod algorithms;
pub(crate) mod node;
#[allow(clippy::module_inception)]
pub mod kdtree;

// 重新导出主要类型
pub use algorithms::concurrent::ConcurrentKdTree;
pub use algorithms::search::{Points, Range};
pub use kdtree::KdTree;
