//! Dialect flavor strategy
//!
//! Statement kind and dialect vary independently; instead of one recognizer
//! subclass per (dialect, statement) pair, the flavor is injected into the
//! recognizer at construction. Grammar-level differences live in the external
//! parser; the flavor only decides dialect-specific recognition surfaces.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Database dialect flavor for a recognition pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Flavor {
    #[default]
    Generic,
    MySql,
    Postgres,
    Sqlite,
}

impl Flavor {
    /// Whether the dialect has a duplicate-key-update surface on INSERT
    /// (`ON DUPLICATE KEY UPDATE` / `ON CONFLICT ... DO UPDATE`). Dialects
    /// without it always report an empty column sequence.
    pub fn has_duplicate_key_update(&self) -> bool {
        matches!(self, Flavor::MySql | Flavor::Postgres | Flavor::Sqlite)
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Flavor::Generic => "generic",
            Flavor::MySql => "mysql",
            Flavor::Postgres => "postgres",
            Flavor::Sqlite => "sqlite",
        };
        write!(f, "{name}")
    }
}
