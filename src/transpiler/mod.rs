//! Serializers for parsed filters.
//!
//! Both backends are pure folds over the same tree; validation has already
//! happened in the parser.

pub mod mongo;
pub mod mysql;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

pub use mongo::ToMongo;

/// Trait for converting filter nodes to MySQL text.
pub trait ToSql {
    /// Convert this node to a SQL string.
    fn to_sql(&self) -> String;
}

/// Output backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Mysql,
    Mongo,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Mysql => write!(f, "mysql"),
            Backend::Mongo => write!(f, "mongo"),
        }
    }
}

impl std::str::FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" => Ok(Backend::Mysql),
            "mongo" | "mongodb" => Ok(Backend::Mongo),
            other => Err(format!("unknown backend '{}'", other)),
        }
    }
}
