use super::node::Node;
use crate::geometry::Point;

/// 单位正方形内点集的 2-D 树
///
/// 只支持插入，不删除、不重新平衡；每个节点的矩形是父节点矩形沿父节点分割轴切出的一半。
#[derive(Debug, Clone, Default)]
pub struct KdTree {
    /// 根节点
    root: Option<Box<Node>>,
    /// 不同点的数量
    size: usize,
}

impl KdTree {
    /// 创建空树
    pub fn new() -> Self {
        KdTree {
            root: None,
            size: 0,
        }
    }

    /// 检查树是否为空
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// 获取存储的不同点的数量
    pub fn len(&self) -> usize {
        self.size
    }

    /// 获取树的深度，空树为 0
    pub fn depth(&self) -> usize {
        // 退化输入下树可能很深，用显式栈而不是递归
        let mut max_depth = 0;
        let mut stack: Vec<(&Node, usize)> = self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            for child in [node.left_bottom.as_deref(), node.right_top.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        max_depth
    }

    /// 内部方法：获取根节点的引用
    pub(crate) fn root_ref(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// 内部方法：获取根节点槽位的可变引用
    pub(crate) fn root_mut(&mut self) -> &mut Option<Box<Node>> {
        &mut self.root
    }

    /// 内部方法：新节点挂上之后计数加一
    pub(crate) fn increment_size(&mut self) {
        self.size += 1;
    }
}

impl FromIterator<Point> for KdTree {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut tree = KdTree::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<Point> for KdTree {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for point in iter {
            self.insert(point);
        }
    }
}
