pub mod point;
pub mod rectangle;

pub use point::Point;
pub use rectangle::Rectangle;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// 分割轴
///
/// `X` 表示按 x 坐标比较（竖直分割线），`Y` 表示按 y 坐标比较（水平分割线）。
/// 2-D 树的根节点使用 `X`，之后每下降一层交替一次。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// 切换到另一条轴
    pub fn swap(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// 取点在该轴上的坐标
    pub fn coordinate(self, point: &Point) -> f64 {
        match self {
            Axis::X => point.x(),
            Axis::Y => point.y(),
        }
    }

    /// 仅按该轴上的坐标比较两个点
    pub fn compare(self, a: &Point, b: &Point) -> Ordering {
        match self {
            Axis::X => a.cmp_by_x(b),
            Axis::Y => a.cmp_by_y(b),
        }
    }
}

/// 分割后的哪一半：左/下 或 右/上
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    LeftBottom,
    RightTop,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::LeftBottom => Side::RightTop,
            Side::RightTop => Side::LeftBottom,
        }
    }
}
