use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuadratureError {
    #[error("invalid interval [{a}, {b}]: bounds must be finite with b > a")]
    InvalidInterval { a: f64, b: f64 },

    #[error("invalid subdivision count {0}: at least one subdivision is required")]
    InvalidSubdivisions(usize),

    #[error("invalid lower bound {0}: must be finite")]
    InvalidLowerBound(f64),

    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error)
}

impl QuadratureError {
    pub fn check_interval(a: f64, b: f64) -> Result<(), QuadratureError> {
        if a.is_finite() && b.is_finite() && b > a {
            Ok(())
        } else {
            Err(QuadratureError::InvalidInterval { a, b })
        }
    }

    pub fn check_subdivisions(subdivisions: usize) -> Result<(), QuadratureError> {
        if subdivisions > 0 {
            Ok(())
        } else {
            Err(QuadratureError::InvalidSubdivisions(subdivisions))
        }
    }

    pub fn check_lower_bound(lower_bound: f64) -> Result<(), QuadratureError> {
        if lower_bound.is_finite() {
            Ok(())
        } else {
            Err(QuadratureError::InvalidLowerBound(lower_bound))
        }
    }
}
