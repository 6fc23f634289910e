use super::super::kdtree::KdTree;
use super::super::node::Node;
use crate::geometry::{Axis, Point, Rectangle, Side};
use std::cmp::Ordering;
use tracing::trace;

/// 插入操作相关算法
impl KdTree {
    /// 插入一个点
    ///
    /// 从根节点开始逐层下降，根节点及偶数层按 x 比较，奇数层按 y 比较：
    /// - 严格小于走左/下子树
    /// - 严格大于走右/上子树
    /// - 当前轴上相等但点不同，走右/上子树
    /// - 两个坐标都相等则什么也不做
    ///
    /// 新节点的矩形由父节点矩形在父节点坐标处沿父节点的轴切出；根节点的矩形恒为单位正方形。
    ///
    /// # 返回值
    /// - `true` - 创建了新节点
    /// - `false` - 点已存在
    pub fn insert(&mut self, point: Point) -> bool {
        let mut slot = self.root_mut();
        let mut axis = Axis::X;
        let mut rect = Rectangle::unit();
        let mut depth = 0usize;

        while let Some(node) = slot {
            let side = match axis.compare(&point, &node.point) {
                Ordering::Less => Side::LeftBottom,
                Ordering::Greater => Side::RightTop,
                Ordering::Equal if point == node.point => {
                    trace!(%point, depth, "duplicate point ignored");
                    return false;
                }
                Ordering::Equal => Side::RightTop,
            };

            rect = node.rect.split(axis, axis.coordinate(&node.point), side);
            axis = axis.swap();
            depth += 1;
            slot = node.child_slot_mut(side);
        }

        trace!(%point, %rect, depth, "new node created");
        *slot = Some(Box::new(Node::new(point, rect)));
        self.increment_size();
        true
    }
}
