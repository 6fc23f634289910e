use super::super::kdtree::KdTree;
use super::super::node::Node;
use crate::config::ExportConfig;
use crate::error::{KdError, Result};
use crate::geometry::{Axis, Point, Rectangle, Side};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

/// 用于JSON序列化的树结构
#[derive(Debug, Serialize)]
pub struct TreeVisualization {
    /// 点的数量
    pub size: usize,
    /// 树的深度
    pub depth: usize,
    /// 根节点（如果存在）
    pub root: Option<NodeVisualization>,
}

/// 用于JSON序列化的节点结构
#[derive(Debug, Serialize)]
pub struct NodeVisualization {
    pub point: Point,
    pub rect: Rectangle,
    /// 该节点的分割轴
    pub axis: Axis,
    pub depth: usize,
    pub left_bottom: Option<Box<NodeVisualization>>,
    pub right_top: Option<Box<NodeVisualization>>,
}

/// 2-D 树调试功能实现
impl KdTree {
    /// 校验分割不变式
    ///
    /// 逐个节点检查：
    /// - 根节点矩形是单位正方形
    /// - 左/下与右/上子节点矩形只可能在边界上重叠
    /// - 子节点矩形等于父节点矩形在父节点坐标处切出的一半；
    ///   父节点的点在其矩形内时，子节点矩形还必须包含在父节点矩形内
    /// - 子节点的点位于父节点分割线的正确一侧
    /// - 节点总数等于 `len()`
    pub fn validate_partition(&self) -> Result<()> {
        let Some(root) = self.root_ref() else {
            return Ok(());
        };

        if root.rect != Rectangle::unit() {
            return Err(violation(root, 0, format!("root rectangle is {}", root.rect)));
        }

        let mut count = 0usize;
        let mut stack = vec![(root, 0usize, Axis::X)];
        while let Some((node, depth, axis)) = stack.pop() {
            count += 1;

            if let (Some(lb), Some(rt)) = (node.child(Side::LeftBottom), node.child(Side::RightTop)) {
                let overlap = lb.rect.intersection_area(&rt.rect);
                if overlap > 0.0 {
                    return Err(violation(
                        node,
                        depth,
                        format!("children overlap with area {}", overlap),
                    ));
                }
            }

            // 单位正方形之外的点切出的矩形可以越出父矩形
            let splits_inside = node.rect.contains(&node.point);
            for side in [Side::LeftBottom, Side::RightTop] {
                let Some(child) = node.child(side) else {
                    continue;
                };
                let expected = node.rect.split(axis, axis.coordinate(&node.point), side);
                if child.rect != expected {
                    return Err(violation(
                        child,
                        depth + 1,
                        format!("rectangle {} differs from derived {}", child.rect, expected),
                    ));
                }
                if splits_inside && !node.rect.contains_rect(&child.rect) {
                    return Err(violation(
                        child,
                        depth + 1,
                        format!("rectangle {} escapes parent {}", child.rect, node.rect),
                    ));
                }
                let on_left = axis.compare(&child.point, &node.point) == Ordering::Less;
                if on_left != (side == Side::LeftBottom) {
                    return Err(violation(
                        child,
                        depth + 1,
                        format!("point on wrong side of parent {}", node.point),
                    ));
                }
                stack.push((child, depth + 1, axis.swap()));
            }
        }

        if count != self.len() {
            return Err(violation(
                root,
                0,
                format!("found {} nodes but size is {}", count, self.len()),
            ));
        }

        debug!(nodes = count, "partition invariant holds");
        Ok(())
    }

    /// 导出树结构为JSON格式
    ///
    /// 返回包含每个节点的点、矩形和分割轴的JSON字符串，用于外部可视化
    pub fn export_to_json(&self, pretty: bool) -> Result<String> {
        let visualization = self.create_tree_visualization();
        let json = if pretty {
            serde_json::to_string_pretty(&visualization)?
        } else {
            serde_json::to_string(&visualization)?
        };
        Ok(json)
    }

    /// 按配置导出
    pub fn export_with_config(&self, config: &ExportConfig) -> Result<String> {
        self.export_to_json(config.pretty)
    }

    /// 创建用于可视化的树结构
    pub fn create_tree_visualization(&self) -> TreeVisualization {
        fn visualize(node: &Node, depth: usize, axis: Axis) -> NodeVisualization {
            NodeVisualization {
                point: node.point,
                rect: node.rect,
                axis,
                depth,
                left_bottom: node
                    .left_bottom
                    .as_deref()
                    .map(|child| Box::new(visualize(child, depth + 1, axis.swap()))),
                right_top: node
                    .right_top
                    .as_deref()
                    .map(|child| Box::new(visualize(child, depth + 1, axis.swap()))),
            }
        }

        TreeVisualization {
            size: self.len(),
            depth: self.depth(),
            root: self.root_ref().map(|root| visualize(root, 0, Axis::X)),
        }
    }

    /// 打印完整的树结构用于调试
    pub fn print_tree_structure_debug(&self) {
        fn print_node_recursive(node: &Node, depth: usize, axis: Axis, label: &str) {
            let indent = "  ".repeat(depth);
            println!(
                "{}{} {} (axis={:?}, rect={})",
                indent, label, node.point, axis, node.rect
            );
            if let Some(child) = node.child(Side::LeftBottom) {
                print_node_recursive(child, depth + 1, axis.swap(), "LB");
            }
            if let Some(child) = node.child(Side::RightTop) {
                print_node_recursive(child, depth + 1, axis.swap(), "RT");
            }
        }

        println!("=== KdTree Structure Debug ===");
        match self.root_ref() {
            Some(root) => print_node_recursive(root, 0, Axis::X, "Root"),
            None => println!("Empty tree (no root)"),
        }
        println!("=== End Debug ===");
    }
}

fn violation(node: &Node, depth: usize, reason: String) -> KdError {
    KdError::PartitionViolated {
        depth,
        point: node.point,
        reason,
    }
}
