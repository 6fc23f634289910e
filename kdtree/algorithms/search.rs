use super::super::kdtree::KdTree;
use super::super::node::Node;
use crate::geometry::{Axis, Point, Rectangle, Side};
use std::cmp::Ordering;
use std::iter::FusedIterator;

/// 搜索操作相关算法
impl KdTree {
    /// 判断点是否在树中
    ///
    /// 与插入相同的下降路径：点相等即命中，否则按当前轴严格小于走左/下，其余走右/上。
    pub fn contains(&self, point: &Point) -> bool {
        let mut current = self.root_ref();
        let mut axis = Axis::X;

        while let Some(node) = current {
            if *point == node.point {
                return true;
            }
            let side = match axis.compare(point, &node.point) {
                Ordering::Less => Side::LeftBottom,
                _ => Side::RightTop,
            };
            current = node.child(side);
            axis = axis.swap();
        }

        false
    }

    /// 查找落在查询矩形内（含边界）的所有点
    ///
    /// 返回惰性迭代器，按先序输出（节点先于子节点，左/下先于右/上）。
    /// 节点矩形与查询矩形不相交时整棵子树被跳过。调用方只应依赖结果集合，不应依赖顺序。
    pub fn range(&self, query: &Rectangle) -> Range<'_> {
        Range {
            stack: self.root_ref().into_iter().collect(),
            query: *query,
        }
    }

    /// 按先序遍历所有点
    pub fn iter(&self) -> Points<'_> {
        Points {
            stack: self.root_ref().into_iter().collect(),
        }
    }
}

/// 范围查询迭代器
///
/// 单次遍历，中途丢弃没有副作用；存活期间借用树，因此不能同时插入。
#[derive(Debug, Clone)]
pub struct Range<'a> {
    stack: Vec<&'a Node>,
    query: Rectangle,
}

impl Iterator for Range<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        while let Some(node) = self.stack.pop() {
            if !node.rect.intersects(&self.query) {
                continue;
            }
            // 右/上先入栈，左/下先出栈
            self.stack.extend(node.right_top.as_deref());
            self.stack.extend(node.left_bottom.as_deref());

            if self.query.contains(&node.point) {
                return Some(node.point);
            }
        }
        None
    }
}

impl FusedIterator for Range<'_> {}

/// 全树先序迭代器
#[derive(Debug, Clone)]
pub struct Points<'a> {
    stack: Vec<&'a Node>,
}

impl Iterator for Points<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right_top.as_deref());
        self.stack.extend(node.left_bottom.as_deref());
        Some(node.point)
    }
}

impl FusedIterator for Points<'_> {}

impl<'a> IntoIterator for &'a KdTree {
    type Item = Point;
    type IntoIter = Points<'a>;

    fn into_iter(self) -> Points<'a> {
        self.iter()
    }
}
