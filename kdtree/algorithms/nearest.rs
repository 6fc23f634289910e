//! Nearest-neighbor search for the 2-D tree
//!
//! The search keeps a single best candidate, seeded with the root's point, and threads it
//! through every recursive call as a plain value: each call receives the best point found
//! so far and returns the (possibly improved) best point.
//!
//! ## Algorithm Overview
//!
//! 1. If the node's rectangle is not strictly closer to the query than the current best,
//!    skip the whole subtree (nothing inside the rectangle can beat the best)
//! 2. Replace the best with the node's point only if it is strictly closer; ties keep the
//!    current best, so the first point found in traversal order wins
//! 3. Recurse into the child on the query's side of the splitting line first, then the
//!    other child; both are visited unless pruned by step 1
//!
//! Visiting the query's side first only affects how much gets pruned, never the answer.

use super::super::kdtree::KdTree;
use super::super::node::Node;
use crate::geometry::{Axis, Point, Side};
use std::cmp::Ordering;
use tracing::debug;

impl KdTree {
    /// Find the stored point closest to `query`
    ///
    /// Returns `None` when the tree is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use kdplane::{KdTree, Point};
    ///
    /// let mut tree = KdTree::new();
    /// tree.insert(Point::new(0.5, 1.0));
    /// tree.insert(Point::new(0.2, 0.2));
    ///
    /// assert_eq!(tree.nearest(&Point::new(0.1, 0.3)), Some(Point::new(0.2, 0.2)));
    /// ```
    pub fn nearest(&self, query: &Point) -> Option<Point> {
        let root = self.root_ref()?;
        let best = nearest_recursive(Some(root), query, Axis::X, root.point);

        debug!(%query, nearest = %best, "nearest neighbor search finished");
        Some(best)
    }

    /// Like [`KdTree::nearest`], also returning the Euclidean distance to the result
    pub fn nearest_with_distance(&self, query: &Point) -> Option<(Point, f64)> {
        self.nearest(query).map(|best| (best, best.distance_to(query)))
    }
}

/// One step of the search: returns the best point found in `node`'s subtree, or `best`
/// unchanged if nothing there is strictly closer
fn nearest_recursive(node: Option<&Node>, query: &Point, axis: Axis, best: Point) -> Point {
    let node = match node {
        Some(node) if is_rect_closer(node, query, &best) => node,
        _ => return best,
    };

    let best = closer(query, best, node.point);

    let near_side = match axis.compare(query, &node.point) {
        Ordering::Less => Side::LeftBottom,
        _ => Side::RightTop,
    };
    let best = nearest_recursive(node.child(near_side), query, axis.swap(), best);
    nearest_recursive(node.child(near_side.opposite()), query, axis.swap(), best)
}

/// Whether the node's rectangle is strictly closer to the query than the current best
fn is_rect_closer(node: &Node, query: &Point, best: &Point) -> bool {
    node.rect.distance_squared_to(query) < best.distance_squared_to(query)
}

/// The candidate if strictly closer than the current best, otherwise the current best
fn closer(query: &Point, best: Point, candidate: Point) -> Point {
    if candidate.distance_squared_to(query) < best.distance_squared_to(query) {
        candidate
    } else {
        best
    }
}
