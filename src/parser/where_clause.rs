//! Recursive grammar for `where` expressions.
//!
//! ```text
//! where     := { "<prop>": scalar }
//!            | { "<prop>": { "<op>": value } }
//!            | { "and" | "or": [ where, ... ] }
//! ```
//!
//! Every object in the grammar carries exactly one key. The first error
//! aborts the whole parse.

use serde_json::{Map, Value};
use tracing::warn;

use super::keywords::Keyword;
use crate::ast::{Condition, LogicalOp, Membership, Operator, Scalar, SetOperator, Where};
use crate::error::{FilterError, FilterResult};

/// Parse a one-key object at statement position.
pub(crate) fn parse_object(obj: &Map<String, Value>) -> FilterResult<Where> {
    if obj.len() != 1 {
        warn!(keys = obj.len(), "where object must have exactly one key");
        return Err(FilterError::NotAnObject);
    }

    let Some((key, value)) = obj.iter().next() else {
        return Err(FilterError::Unknown);
    };

    match Keyword::lookup(key) {
        Some(Keyword::Logical(op)) => {
            let Value::Array(items) = value else {
                warn!(key = %key, "logical operand is not an array");
                return Err(FilterError::not_an_array(key));
            };
            parse_compound(op, key, items)
        }
        Some(keyword) if keyword.is_reserved() => {
            warn!(key = %key, "reserved keyword used as a property name");
            Err(FilterError::ReservedKeyword(key.clone()))
        }
        _ => parse_property(key, value),
    }
}

fn parse_compound(op: LogicalOp, key: &str, items: &[Value]) -> FilterResult<Where> {
    if items.is_empty() {
        warn!(key = %key, "logical operand is empty");
        return Err(FilterError::empty_array(key));
    }

    let children = items
        .iter()
        .map(|item| match item {
            Value::Object(obj) => parse_object(obj),
            _ => {
                warn!(key = %key, "logical operand element is not an object");
                Err(FilterError::NotAnObject)
            }
        })
        .collect::<FilterResult<Vec<_>>>()?;

    Ok(Where::logical(op, children))
}

fn parse_property(property: &str, value: &Value) -> FilterResult<Where> {
    match value {
        Value::Object(obj) => parse_operator(property, obj),
        _ => match Scalar::from_json(value) {
            Some(scalar) => Ok(Condition::new(property, Operator::Eq, scalar).into()),
            None => {
                warn!(property = %property, "value is not a supported type");
                Err(FilterError::not_supported(property))
            }
        },
    }
}

/// `{ "<op>": value }` nested under a property.
fn parse_operator(property: &str, obj: &Map<String, Value>) -> FilterResult<Where> {
    if obj.len() != 1 {
        warn!(property = %property, keys = obj.len(), "operator object must have exactly one key");
        return Err(FilterError::NotAnObject);
    }

    let Some((op, value)) = obj.iter().next() else {
        return Err(FilterError::Unknown);
    };

    match Keyword::lookup(op) {
        Some(Keyword::Compare(op)) if op.is_pattern() => parse_pattern(property, op, value),
        Some(Keyword::Compare(op)) => parse_comparison(property, op, value),
        Some(Keyword::Member(op)) => parse_membership(property, op, value),
        _ => {
            warn!(property = %property, op = %op, "invalid operator keyword");
            Err(FilterError::InvalidKeyword(op.clone()))
        }
    }
}

/// NEQ, LT, LTE, GT, GTE: any scalar.
fn parse_comparison(property: &str, op: Operator, value: &Value) -> FilterResult<Where> {
    match Scalar::from_json(value) {
        Some(scalar) => Ok(Condition::new(property, op, scalar).into()),
        None => {
            warn!(property = %property, op = %op, "value is not a supported type");
            Err(FilterError::not_supported(property))
        }
    }
}

/// LIKE, NLIKE: strings only.
fn parse_pattern(property: &str, op: Operator, value: &Value) -> FilterResult<Where> {
    match value {
        Value::String(pattern) => Ok(Condition::new(property, op, pattern.as_str()).into()),
        _ => {
            warn!(property = %property, op = %op, "pattern is not a string");
            Err(FilterError::not_supported(property))
        }
    }
}

/// IN, NIN: non-empty array. The datatype is taken from the first scalar
/// element; elements of any other type are dropped.
fn parse_membership(property: &str, op: SetOperator, value: &Value) -> FilterResult<Where> {
    let Value::Array(items) = value else {
        warn!(property = %property, op = %op, "value is not an array");
        return Err(FilterError::not_an_array(property));
    };

    let membership = Membership::from_values(property, op, items.iter().filter_map(Scalar::from_json));
    match membership {
        Some(cdt) => Ok(cdt.into()),
        None => {
            warn!(property = %property, op = %op, "value has no usable element");
            Err(FilterError::empty_array(property))
        }
    }
}
