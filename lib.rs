//! # kdplane：单位正方形内的 2-D 树点集
//!
//! 维护单位正方形内的动态点集，支持成员查询、轴对齐矩形范围查询和最近邻查询。
//! 每个节点保存一个点和它独占的矩形，范围查询与最近邻查询用这个矩形整棵剪掉子树。
//!
//! ## 使用示例
//!
//! ```rust
//! use kdplane::{KdTree, Point, Rectangle};
//!
//! let mut tree = KdTree::new();
//! tree.insert(Point::new(0.0, 0.0));
//! tree.insert(Point::new(0.3, 0.3));
//! tree.insert(Point::new(0.3, 0.5));
//!
//! let query = Rectangle::new(0.2, 0.3, 0.3, 0.5).unwrap();
//! let found: Vec<Point> = tree.range(&query).collect();
//! assert_eq!(found, vec![Point::new(0.3, 0.3), Point::new(0.3, 0.5)]);
//!
//! assert_eq!(tree.nearest(&Point::new(0.25, 0.45)), Some(Point::new(0.3, 0.5)));
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod kdtree;
pub mod logging;

// 重新导出主要的公共接口
pub use crate::config::KdPlaneConfig;
pub use error::{KdError, Result};
pub use geometry::{Axis, Point, Rectangle, Side};
pub use kdtree::{ConcurrentKdTree, KdTree, Points, Range};
