//! MySQL fragment generation.
//!
//! Produces the tail of a `SELECT ... FROM ...` statement:
//! ` WHERE ... ORDER BY ... LIMIT n OFFSET n`, each clause only when set.

use super::ToSql;
use crate::ast::*;
use crate::filter::Filter;

impl ToSql for Filter {
    fn to_sql(&self) -> String {
        let mut sql = String::new();

        if let Some(cdt) = &self.condition {
            sql.push_str(" WHERE ");
            sql.push_str(&cdt.to_sql());
        }
        if let Some(order) = &self.order {
            sql.push_str(" ORDER BY ");
            sql.push_str(&order.to_sql());
        }
        if let Some(n) = self.limit {
            sql.push_str(&format!(" LIMIT {}", n));
        }
        if let Some(n) = self.skip {
            sql.push_str(&format!(" OFFSET {}", n));
        }

        sql
    }
}

impl ToSql for Where {
    fn to_sql(&self) -> String {
        match self {
            Where::And(children) => group(children, LogicalOp::And),
            Where::Or(children) => group(children, LogicalOp::Or),
            Where::Compare(cdt) => cdt.to_sql(),
            Where::Member(cdt) => cdt.to_sql(),
        }
    }
}

fn group(children: &[Where], op: LogicalOp) -> String {
    let joiner = format!(" {} ", op.sql_keyword());
    let parts: Vec<String> = children.iter().map(|c| c.to_sql()).collect();
    format!("({})", parts.join(&joiner))
}

impl ToSql for Condition {
    fn to_sql(&self) -> String {
        format!("{} {} {}", self.property, self.op.sql_symbol(), self.value)
    }
}

impl ToSql for Membership {
    fn to_sql(&self) -> String {
        let values: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        format!("{} {} ({})", self.property, self.op.sql_symbol(), values.join(", "))
    }
}

impl ToSql for Order {
    fn to_sql(&self) -> String {
        self.clauses().join(", ")
    }
}
