use super::{Axis, Point, Side};
use crate::error::{KdError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 轴对齐矩形
///
/// 不变式：`xmin <= xmax` 且 `ymin <= ymax`，构造时检查。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRectangle")]
pub struct Rectangle {
    min: [f64; 2], // [x_min, y_min]
    max: [f64; 2], // [x_max, y_max]
}

#[derive(Deserialize)]
struct RawRectangle {
    min: [f64; 2],
    max: [f64; 2],
}

impl TryFrom<RawRectangle> for Rectangle {
    type Error = KdError;

    fn try_from(raw: RawRectangle) -> Result<Self> {
        Rectangle::new(raw.min[0], raw.min[1], raw.max[0], raw.max[1])
    }
}

impl Rectangle {
    /// 创建新的矩形，边界颠倒（或含 NaN）时返回 `InvalidGeometry`
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Self> {
        // NaN 参与的比较都是 false，同样会被拒绝
        let ordered = |lo: f64, hi: f64| lo <= hi;
        if !(ordered(xmin, xmax) && ordered(ymin, ymax)) {
            return Err(KdError::InvalidGeometry {
                xmin,
                ymin,
                xmax,
                ymax,
            });
        }
        Ok(Rectangle {
            min: [xmin + 0.0, ymin + 0.0],
            max: [xmax + 0.0, ymax + 0.0],
        })
    }

    /// 单位正方形 [0,1] x [0,1]，即根节点的矩形
    pub fn unit() -> Self {
        Rectangle {
            min: [0.0, 0.0],
            max: [1.0, 1.0],
        }
    }

    pub fn xmin(&self) -> f64 {
        self.min[0]
    }

    pub fn ymin(&self) -> f64 {
        self.min[1]
    }

    pub fn xmax(&self) -> f64 {
        self.max[0]
    }

    pub fn ymax(&self) -> f64 {
        self.max[1]
    }

    /// 判断点是否在矩形内（四条边都包含在内）
    pub fn contains(&self, point: &Point) -> bool {
        self.min[0] <= point.x()
            && point.x() <= self.max[0]
            && self.min[1] <= point.y()
            && point.y() <= self.max[1]
    }

    /// 判断当前矩形是否包含另一个矩形
    pub fn contains_rect(&self, other: &Rectangle) -> bool {
        self.min[0] <= other.min[0]
            && self.min[1] <= other.min[1]
            && self.max[0] >= other.max[0]
            && self.max[1] >= other.max[1]
    }

    /// 判断两个矩形是否相交，只在边或角上接触也算相交
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.min[0] <= other.max[0]
            && self.max[0] >= other.min[0]
            && self.min[1] <= other.max[1]
            && self.max[1] >= other.min[1]
    }

    /// 计算两个矩形的交集面积
    pub fn intersection_area(&self, other: &Rectangle) -> f64 {
        if !self.intersects(other) {
            return 0.0;
        }

        let x_overlap = self.max[0].min(other.max[0]) - self.min[0].max(other.min[0]);
        let y_overlap = self.max[1].min(other.max[1]) - self.min[1].max(other.min[1]);

        x_overlap * y_overlap
    }

    /// 点到矩形最近点的距离平方，点在矩形内或边上时为 0
    pub fn distance_squared_to(&self, point: &Point) -> f64 {
        // 逐轴夹取到矩形范围内再求差
        let closest_x = point.x().max(self.min[0]).min(self.max[0]);
        let closest_y = point.y().max(self.min[1]).min(self.max[1]);
        let dx = point.x() - closest_x;
        let dy = point.y() - closest_y;
        dx * dx + dy * dy
    }

    pub fn distance_to(&self, point: &Point) -> f64 {
        self.distance_squared_to(point).sqrt()
    }

    /// 沿 `axis` 在坐标 `at` 处切开矩形，保留 `side` 对应的一半
    ///
    /// 边界直接取 `at`，不夹取到矩形范围内：单位正方形之外的点切出的矩形可以越出父矩形。
    /// 只有会让边界颠倒的切割（含 NaN）退化为贴在对应边界上的矩形。
    pub(crate) fn split(&self, axis: Axis, at: f64, side: Side) -> Rectangle {
        let i = match axis {
            Axis::X => 0,
            Axis::Y => 1,
        };

        let mut rect = *self;
        match side {
            Side::LeftBottom => rect.max[i] = if at >= self.min[i] { at } else { self.min[i] },
            Side::RightTop => rect.min[i] = if at <= self.max[i] { at } else { self.max[i] },
        }
        rect
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.min[0], self.max[0], self.min[1], self.max[1]
        )
    }
}
