//! Error types for statement recognition

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Recognition errors. Every variant carries the offending SQL fragment or
/// parameter ordinal so the caller can surface a useful diagnostic. Failures
/// are per-accessor: a failed accessor leaves the other accessors on the same
/// recognizer usable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A primary-key column's value expression cannot be resolved statically
    /// or dynamically. The downstream compensation layer would be unable to
    /// identify the affected row, so the whole statement must be rejected.
    #[error("cannot resolve primary key value expression: {fragment}")]
    UnresolvableKeyExpression { fragment: String },

    /// A declared column reference is not a simple identifier.
    #[error("malformed column expression: {fragment}")]
    MalformedColumnExpression { fragment: String },

    /// The parameters holder has no entry for a referenced placeholder
    /// ordinal. Caller configuration error.
    #[error("no parameter binding for placeholder ordinal {ordinal}")]
    MissingParameterBinding { ordinal: usize },

    /// Bound-value lists disagree on batch cardinality across ordinals of the
    /// same clause.
    #[error(
        "parameter batch mismatch at ordinal {ordinal}: expected {expected} values, found {found}"
    )]
    ParameterBatchMismatch {
        ordinal: usize,
        expected: usize,
        found: usize,
    },

    /// The WHERE/LIMIT/duplicate-key clause uses a construct the projector
    /// cannot canonicalize. Fatal for this accessor only.
    #[error("unsupported SQL construct: {fragment}")]
    UnsupportedConstruct { fragment: String },
}
