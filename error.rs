use crate::geometry::Point;

/// kdplane 的统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum KdError {
    #[error("invalid rectangle coordinates: [{xmin}, {xmax}] x [{ymin}, {ymax}]")]
    InvalidGeometry {
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
    },
    #[error("partition invariant violated at depth {depth} (node {point}): {reason}")]
    PartitionViolated {
        depth: usize,
        point: Point,
        reason: String,
    },
    #[error("Lock was poisoned by a panicked thread")]
    LockPoisoned,
    #[error("Config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, KdError>;
