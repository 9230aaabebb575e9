//! Keyword table for the where grammar. Matching is case-insensitive.

use crate::ast::{LogicalOp, Operator, SetOperator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Keyword {
    Logical(LogicalOp),
    Compare(Operator),
    Member(SetOperator),
}

impl Keyword {
    pub(crate) fn lookup(key: &str) -> Option<Self> {
        let keyword = match key.to_ascii_uppercase().as_str() {
            "AND" => Keyword::Logical(LogicalOp::And),
            "OR" => Keyword::Logical(LogicalOp::Or),
            "NEQ" => Keyword::Compare(Operator::Neq),
            "LT" => Keyword::Compare(Operator::Lt),
            "LTE" => Keyword::Compare(Operator::Lte),
            "GT" => Keyword::Compare(Operator::Gt),
            "GTE" => Keyword::Compare(Operator::Gte),
            "LIKE" => Keyword::Compare(Operator::Like),
            "NLIKE" => Keyword::Compare(Operator::NotLike),
            "IN" => Keyword::Member(SetOperator::In),
            "NIN" => Keyword::Member(SetOperator::NotIn),
            _ => return None,
        };
        Some(keyword)
    }

    /// Operator keywords that may never appear as a property name.
    ///
    /// `LIKE` and `NLIKE` are not in this set: at property position they are
    /// read as ordinary column names.
    pub(crate) fn is_reserved(&self) -> bool {
        match self {
            Keyword::Logical(_) => false,
            Keyword::Compare(op) => !op.is_pattern(),
            Keyword::Member(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(Keyword::lookup("and"), Some(Keyword::Logical(LogicalOp::And)));
        assert_eq!(Keyword::lookup("Or"), Some(Keyword::Logical(LogicalOp::Or)));
        assert_eq!(Keyword::lookup("nLiKe"), Some(Keyword::Compare(Operator::NotLike)));
        assert_eq!(Keyword::lookup("NIN"), Some(Keyword::Member(SetOperator::NotIn)));
        assert_eq!(Keyword::lookup("eq"), None);
        assert_eq!(Keyword::lookup("name"), None);
    }

    #[test]
    fn test_reserved() {
        assert!(Keyword::lookup("gte").unwrap().is_reserved());
        assert!(Keyword::lookup("in").unwrap().is_reserved());
        assert!(!Keyword::lookup("like").unwrap().is_reserved());
        assert!(!Keyword::lookup("and").unwrap().is_reserved());
    }
}
