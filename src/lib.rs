//! # qfilter
//!
//! Turns a JSON request filter into a validated condition tree, then into
//! a MySQL fragment (or a MongoDB query document).
//!
//! ## Quick Example
//!
//! ```rust
//! use qfilter::prelude::*;
//! use serde_json::json;
//!
//! let filter = qfilter::parse(&json!({
//!     "where": {"and": [{"name": "astra"}, {"age": {"gte": 18}}]},
//!     "order": "age desc",
//!     "limit": 10
//! }))
//! .unwrap();
//!
//! assert_eq!(
//!     filter.to_sql(),
//!     " WHERE (name = 'astra' AND age >= 18) ORDER BY age desc LIMIT 10"
//! );
//! ```
//!
//! ## Where keywords
//!
//! | Keyword | Position        | SQL          |
//! |---------|-----------------|--------------|
//! | `and`   | statement       | `(a AND b)`  |
//! | `or`    | statement       | `(a OR b)`   |
//! | `neq`   | under property  | `!=`         |
//! | `lt`    | under property  | `<`          |
//! | `lte`   | under property  | `<=`         |
//! | `gt`    | under property  | `>`          |
//! | `gte`   | under property  | `>=`         |
//! | `like`  | under property  | `LIKE`       |
//! | `nlike` | under property  | `NOT LIKE`   |
//! | `in`    | under property  | `IN (...)`   |
//! | `nin`   | under property  | `NOT IN (...)` |
//!
//! Keywords match case-insensitively. Values are inlined as literals; this
//! crate does not produce bind parameters.

pub mod ast;
pub mod config;
pub mod error;
pub mod filter;
pub mod parser;
pub mod transpiler;

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::error::*;
    pub use crate::filter::Filter;
    pub use crate::parser::{parse_limit, parse_order, parse_skip, parse_where};
    pub use crate::transpiler::{Backend, ToMongo, ToSql};
}

/// Build a [`filter::Filter`] from a decoded JSON object.
///
/// Fails on the first invalid field. Use [`filter::Filter::build`] to keep
/// the valid fields of a partly invalid filter.
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// let filter = qfilter::parse(&json!({"where": {"id": 7}})).unwrap();
/// assert!(filter.condition.is_some());
/// ```
pub fn parse(value: &serde_json::Value) -> Result<filter::Filter, error::FilterError> {
    filter::Filter::from_json(value)
}
