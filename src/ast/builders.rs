//! Condition builders, for assembling trees in code instead of JSON.

use crate::ast::{Condition, Operator, Scalar, Where};

fn make_condition(property: &str, op: Operator, value: Scalar) -> Where {
    Where::Compare(Condition {
        property: property.to_string(),
        op,
        value,
    })
}

/// Create an equality condition (property = value)
pub fn eq(property: &str, value: impl Into<Scalar>) -> Where {
    make_condition(property, Operator::Eq, value.into())
}

pub fn neq(property: &str, value: impl Into<Scalar>) -> Where {
    make_condition(property, Operator::Neq, value.into())
}

pub fn lt(property: &str, value: impl Into<Scalar>) -> Where {
    make_condition(property, Operator::Lt, value.into())
}

pub fn lte(property: &str, value: impl Into<Scalar>) -> Where {
    make_condition(property, Operator::Lte, value.into())
}

pub fn gt(property: &str, value: impl Into<Scalar>) -> Where {
    make_condition(property, Operator::Gt, value.into())
}

pub fn gte(property: &str, value: impl Into<Scalar>) -> Where {
    make_condition(property, Operator::Gte, value.into())
}

pub fn like(property: &str, pattern: &str) -> Where {
    make_condition(property, Operator::Like, Scalar::String(pattern.to_string()))
}

pub fn not_like(property: &str, pattern: &str) -> Where {
    make_condition(property, Operator::NotLike, Scalar::String(pattern.to_string()))
}
