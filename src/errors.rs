use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClosestPairError {
    #[error("At least 2 points are required, got {len}")]
    InsufficientInput { len: usize },

    #[error("Point {index} has a non-finite coordinate: ({x}, {y})")]
    InvalidCoordinate { index: usize, x: f64, y: f64 },

    #[error("Non-finite coordinate: ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },
}
