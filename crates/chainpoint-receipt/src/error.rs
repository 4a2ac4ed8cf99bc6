use thiserror::Error;

/// Validation failures surfaced to callers.
///
/// Fail-fast: the first violated rule terminates validation of the receipt,
/// and every error is returned to the caller rather than logged or swallowed.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The schema generation could not be determined or is unsupported.
    #[error("cannot identify receipt schema: {0}")]
    Schema(String),
    /// A required field is absent, or present but falsy.
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },
    /// A field is present but violates its expected type or pattern.
    #[error("invalid value for {field}: '{value}'")]
    InvalidFormat {
        /// Name of the offending field.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// A structurally well-formed proof whose hash chain does not
    /// reconstruct the declared root, or whose node linkage is broken.
    #[error("invalid proof path: {0}")]
    InvalidProof(String),
}
