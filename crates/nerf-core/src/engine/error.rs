use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum NerfError {
    #[error("Cannot normalize a zero-length vector")]
    DegenerateVector,

    #[error("Degenerate reference geometry: {reason}")]
    DegenerateGeometry { reason: &'static str },

    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}
