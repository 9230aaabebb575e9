use serde::{Deserialize, Serialize};

use crate::ast::{LogicalOp, Operator, Scalar, ScalarKind, SetOperator};

/// A validated condition tree, the parsed form of a `where` expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Where {
    /// All children must hold.
    And(Vec<Where>),
    /// At least one child must hold.
    Or(Vec<Where>),
    /// `property <op> value`
    Compare(Condition),
    /// `property [NOT] IN (values)`
    Member(Membership),
}

/// A single property-operator-value clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub property: String,
    pub op: Operator,
    pub value: Scalar,
}

/// An `IN` / `NOT IN` clause over values of one datatype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    pub property: String,
    pub op: SetOperator,
    pub datatype: ScalarKind,
    pub values: Vec<Scalar>,
}

impl Where {
    /// Logical node of the given kind.
    pub fn logical(op: LogicalOp, children: Vec<Where>) -> Self {
        match op {
            LogicalOp::And => Where::And(children),
            LogicalOp::Or => Where::Or(children),
        }
    }

    /// The logical kind of this node, or `None` for leaves.
    pub fn logical_op(&self) -> Option<LogicalOp> {
        match self {
            Where::And(_) => Some(LogicalOp::And),
            Where::Or(_) => Some(LogicalOp::Or),
            Where::Compare(_) | Where::Member(_) => None,
        }
    }

    /// Children of a logical node; empty for leaves.
    pub fn children(&self) -> &[Where] {
        match self {
            Where::And(children) | Where::Or(children) => children,
            Where::Compare(_) | Where::Member(_) => &[],
        }
    }

    /// Fold `self` and `others` into one flat logical node of kind `op`.
    ///
    /// Operands that are already `op` nodes are spliced in; anything else
    /// (leaves, or logical nodes of the other kind) becomes one child.
    pub fn combine(op: LogicalOp, operands: impl IntoIterator<Item = Where>) -> Option<Where> {
        let mut children = Vec::new();
        for operand in operands {
            match operand {
                Where::And(inner) if op == LogicalOp::And => children.extend(inner),
                Where::Or(inner) if op == LogicalOp::Or => children.extend(inner),
                other => children.push(other),
            }
        }

        if children.is_empty() {
            None
        } else {
            Some(Where::logical(op, children))
        }
    }
}

impl Condition {
    pub fn new(property: impl Into<String>, op: Operator, value: impl Into<Scalar>) -> Self {
        Self {
            property: property.into(),
            op,
            value: value.into(),
        }
    }
}

impl Membership {
    /// Build a membership clause, inferring the datatype from the first value.
    ///
    /// Values of any other datatype are dropped. Returns `None` when nothing is left.
    pub fn from_values(
        property: impl Into<String>,
        op: SetOperator,
        values: impl IntoIterator<Item = Scalar>,
    ) -> Option<Self> {
        let mut values = values.into_iter().peekable();
        let datatype = values.peek()?.kind();
        let values: Vec<Scalar> = values.filter(|v| v.kind() == datatype).collect();

        Some(Self {
            property: property.into(),
            op,
            datatype,
            values,
        })
    }
}

impl From<Condition> for Where {
    fn from(cdt: Condition) -> Self {
        Where::Compare(cdt)
    }
}

impl From<Membership> for Where {
    fn from(cdt: Membership) -> Self {
        Where::Member(cdt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str) -> Where {
        Condition::new(name, Operator::Eq, 1).into()
    }

    #[test]
    fn test_combine_flattens_same_kind() {
        let left = Where::And(vec![leaf("a"), leaf("b")]);
        let combined = Where::combine(LogicalOp::And, [left, leaf("c")]).unwrap();
        assert_eq!(combined, Where::And(vec![leaf("a"), leaf("b"), leaf("c")]));
    }

    #[test]
    fn test_combine_keeps_other_kind_nested() {
        let left = Where::Or(vec![leaf("a"), leaf("b")]);
        let combined = Where::combine(LogicalOp::And, [left.clone(), leaf("c")]).unwrap();
        assert_eq!(combined, Where::And(vec![left, leaf("c")]));
    }

    #[test]
    fn test_combine_nothing() {
        assert_eq!(Where::combine(LogicalOp::Or, []), None);
    }

    #[test]
    fn test_membership_drops_mismatched() {
        let cdt = Membership::from_values(
            "str",
            SetOperator::In,
            [Scalar::from("A"), Scalar::from(1), Scalar::from("B")],
        )
        .unwrap();
        assert_eq!(cdt.datatype, ScalarKind::String);
        assert_eq!(cdt.values, vec![Scalar::from("A"), Scalar::from("B")]);
    }
}
