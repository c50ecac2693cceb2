//! Error types for hydraulic calculations.

use hf_core::error::HfError;
use thiserror::Error;

/// Errors that can occur during hydraulic calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HydraulicsError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type HydraulicsResult<T> = Result<T, HydraulicsError>;

impl From<HfError> for HydraulicsError {
    fn from(e: HfError) -> Self {
        match e {
            HfError::NonFinite { what, .. } => HydraulicsError::NonPhysical { what },
            HfError::NotPositive { what, .. } => HydraulicsError::InvalidArg { what },
            HfError::Invariant { .. } => HydraulicsError::InvalidArg {
                what: "invariant violated",
            },
        }
    }
}

impl From<HydraulicsError> for HfError {
    fn from(e: HydraulicsError) -> Self {
        HfError::Invariant {
            what: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = HydraulicsError::NonPhysical { what: "density" };
        assert!(err.to_string().contains("density"));
    }

    #[test]
    fn error_conversion() {
        let err: HydraulicsError = HfError::NotPositive {
            what: "diameter",
            value: 0.0,
        }
        .into();
        assert_eq!(err, HydraulicsError::InvalidArg { what: "diameter" });

        let core: HfError = err.into();
        assert!(matches!(core, HfError::Invariant { .. }));
    }
}
