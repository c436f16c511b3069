//! Core data model: runtime values and value markers

pub mod marker;
pub mod value;

pub use marker::ValueMarker;
pub use value::{Row, Value};
