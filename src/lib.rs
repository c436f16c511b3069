//! Dialect-independent recognition of SQL DML mutation intent
//!
//! Projects a single parsed INSERT, DELETE, UPDATE, or SELECT-FOR-UPDATE
//! statement into a normalized model: target table, affected columns,
//! per-row literal/placeholder values, and a WHERE-clause renderer that
//! substitutes runtime-bound parameter values while preserving the original
//! clause structure. The model feeds a compensation mechanism that reads
//! before/after row images and synthesizes undo statements, so it carries
//! concrete values, not just SQL text.
//!
//! Statements are parsed externally with the `sqlparser` crate; a
//! [`Recognizer`] wraps the already-parsed AST together with the original
//! SQL text and is discarded after one recognition pass. Recognition is
//! synchronous and side-effect-free.

mod error;
mod flavor;
mod params;
mod projection;
mod recognizer;
mod types;

pub use error::{Error, Result};
pub use flavor::Flavor;
pub use params::ParametersHolder;
pub use projection::WhereProjection;
pub use recognizer::{
    DeleteRecognizer, InsertRecognizer, Recognizer, SelectForUpdateRecognizer, SqlType,
    UpdateRecognizer,
};
pub use types::{Row, Value, ValueMarker};
