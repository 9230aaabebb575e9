//! Filter parsers.
//!
//! Each top-level filter field has its own pure parser taking the decoded
//! JSON value for that field:
//!
//! | Field   | Accepts                         | Produces        |
//! |---------|---------------------------------|-----------------|
//! | `where` | one-key object (recursive)      | [`Where`]       |
//! | `order` | string or array of strings      | [`Order`]       |
//! | `limit` | any JSON number                 | `u64`           |
//! | `skip`  | any JSON number                 | `u64`           |

mod keywords;
mod where_clause;


use serde_json::{Number, Value};
use tracing::warn;

use crate::ast::{Order, Where};
use crate::error::{FilterError, FilterResult};

/// Parse a `where` expression into a condition tree.
pub fn parse_where(value: &Value) -> FilterResult<Where> {
    match value {
        Value::Object(obj) => where_clause::parse_object(obj),
        _ => {
            warn!(filter = "where", "invalid filter");
            Err(FilterError::invalid_filter("where"))
        }
    }
}

/// Parse an `order` value.
///
/// Non-string array entries are dropped. `Ok(None)` means no usable clause
/// was found, which is not an error.
pub fn parse_order(value: &Value) -> FilterResult<Option<Order>> {
    let clauses = match value {
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => {
            warn!(filter = "order", "invalid filter");
            return Err(FilterError::invalid_filter("order"));
        }
    };

    Ok(Order::new(clauses))
}

/// Parse a `limit` value.
pub fn parse_limit(value: &Value) -> FilterResult<u64> {
    parse_count("limit", value)
}

/// Parse a `skip` value.
pub fn parse_skip(value: &Value) -> FilterResult<u64> {
    parse_count("skip", value)
}

/// Any non-negative number, truncated toward zero.
fn parse_count(field: &'static str, value: &Value) -> FilterResult<u64> {
    let count = match value {
        Value::Number(n) => number_to_count(n),
        _ => None,
    };

    count.ok_or_else(|| {
        warn!(filter = field, value = %value, "invalid filter");
        FilterError::invalid_filter(field)
    })
}

fn number_to_count(n: &Number) -> Option<u64> {
    if let Some(v) = n.as_u64() {
        return Some(v);
    }
    if n.is_i64() {
        return None;
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f >= 0.0 => Some(f.trunc() as u64),
        _ => None,
    }
}
