use crate::geometry::{Point, Rectangle, Side};

/// 2-D 树节点
///
/// 每个节点拥有一个点和创建时切出的矩形，两者写入后不再改变。
/// 两个子节点由父节点独占持有，没有回指。
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) point: Point,
    pub(crate) rect: Rectangle,
    pub(crate) left_bottom: Option<Box<Node>>,
    pub(crate) right_top: Option<Box<Node>>,
}

impl Node {
    /// 创建新的叶子节点
    pub(crate) fn new(point: Point, rect: Rectangle) -> Self {
        Node {
            point,
            rect,
            left_bottom: None,
            right_top: None,
        }
    }

    /// 获取指定一侧的子节点
    pub fn child(&self, side: Side) -> Option<&Node> {
        match side {
            Side::LeftBottom => self.left_bottom.as_deref(),
            Side::RightTop => self.right_top.as_deref(),
        }
    }

    /// 获取指定一侧子节点的槽位（可变）
    pub(crate) fn child_slot_mut(&mut self, side: Side) -> &mut Option<Box<Node>> {
        match side {
            Side::LeftBottom => &mut self.left_bottom,
            Side::RightTop => &mut self.right_top,
        }
    }
}
