use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// 平面上的不可变点
///
/// 构造时把 `-0.0` 归一化为 `0.0`，因此相等、排序和哈希都不区分正负零。
/// 默认排序先比较 y，再比较 x。
#[derive(Debug, Display, Clone, Copy, Serialize, Deserialize)]
#[display(fmt = "({}, {})", x, y)]
#[serde(from = "RawPoint")]
pub struct Point {
    x: f64,
    y: f64,
}

/// 反序列化用的原始结构，经由 `Point::new` 归一化
#[derive(Deserialize)]
struct RawPoint {
    x: f64,
    y: f64,
}

impl From<RawPoint> for Point {
    fn from(raw: RawPoint) -> Self {
        Point::new(raw.x, raw.y)
    }
}

impl Point {
    /// 创建新的点
    pub fn new(x: f64, y: f64) -> Self {
        // -0.0 + 0.0 == +0.0
        Point {
            x: x + 0.0,
            y: y + 0.0,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// 到另一个点的欧氏距离
    pub fn distance_to(&self, other: &Point) -> f64 {
        self.distance_squared_to(other).sqrt()
    }

    /// 到另一个点的欧氏距离的平方
    ///
    /// 剪枝判断只需要比较大小，不必开方。
    pub fn distance_squared_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// 仅按 x 坐标比较
    pub fn cmp_by_x(&self, other: &Point) -> Ordering {
        self.x.total_cmp(&other.x)
    }

    /// 仅按 y 坐标比较
    pub fn cmp_by_y(&self, other: &Point) -> Ordering {
        self.y.total_cmp(&other.y)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Point {}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_by_y(other).then_with(|| self.cmp_by_x(other))
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}
