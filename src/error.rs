//! Error types for geozone

use thiserror::Error;

use crate::projection::datum::Datum;
use crate::projection::engine::EngineError;

/// Result type for geozone operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in geozone operations
#[derive(Error, Debug)]
pub enum Error {
    /// A builder was asked to build without any samples
    #[error("No positions")]
    EmptyInput,

    /// UTM inputs from different zones were combined
    #[error("Mismatched zone: expected {expected}, found {found}")]
    MismatchedZone { expected: i32, found: i32 },

    /// UTM inputs on different datums were combined
    #[error("Mismatched datum: expected {expected}, found {found}")]
    MismatchedDatum { expected: Datum, found: Datum },

    /// An ordinate array had fewer than two values
    #[error("Invalid number of ordinates: {0}")]
    InvalidOrdinateCount(usize),

    /// Zone outside the range defined for a datum
    #[error("Invalid {datum} zone: {zone}")]
    InvalidZone { datum: Datum, zone: i32 },

    /// Datum without a UTM coordinate reference system
    #[error("Datum not supported: {0}")]
    UnsupportedDatum(Datum),

    /// Failure reported by the projection backend
    #[error("Projection backend error: {0}")]
    ProjectionBackend(#[from] EngineError),

    /// A string could not be parsed into an enumeration
    #[error("Unknown {kind}: {value:?}")]
    Parse { kind: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidZone { datum: Datum::NAD83, zone: 24 };
        assert_eq!(err.to_string(), "Invalid NAD83 zone: 24");
    }

    #[test]
    fn test_mismatched_zone_display() {
        let err = Error::MismatchedZone { expected: 12, found: 13 };
        assert!(err.to_string().contains("expected 12"));
        assert!(err.to_string().contains("found 13"));
    }

    #[test]
    fn test_engine_error_conversion() {
        let err: Error = EngineError::UnknownEpsgCode(99999).into();
        assert!(matches!(err, Error::ProjectionBackend(EngineError::UnknownEpsgCode(99999))));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_parse_error() {
        let err = Error::Parse { kind: "datum", value: "nad27".to_string() };
        assert_eq!(err.to_string(), "Unknown datum: \"nad27\"");
    }
}
