//! MongoDB query documents.

use serde_json::{Map, Value, json};

use crate::ast::*;
use crate::filter::Filter;

pub trait ToMongo {
    fn to_mongo(&self) -> Value;
}

/// `{ "filter": ..., "sort": ..., "limit": n, "skip": n }`, keys present only when set.
impl ToMongo for Filter {
    fn to_mongo(&self) -> Value {
        let mut doc = Map::new();

        if let Some(cdt) = &self.condition {
            doc.insert("filter".to_string(), cdt.to_mongo());
        }
        if let Some(order) = &self.order {
            doc.insert("sort".to_string(), order.to_mongo());
        }
        if let Some(n) = self.limit {
            doc.insert("limit".to_string(), json!(n));
        }
        if let Some(n) = self.skip {
            doc.insert("skip".to_string(), json!(n));
        }

        Value::Object(doc)
    }
}

impl ToMongo for Where {
    fn to_mongo(&self) -> Value {
        match self {
            Where::And(children) => json!({ "$and": children.iter().map(|c| c.to_mongo()).collect::<Vec<_>>() }),
            Where::Or(children) => json!({ "$or": children.iter().map(|c| c.to_mongo()).collect::<Vec<_>>() }),
            Where::Compare(cdt) => cdt.to_mongo(),
            Where::Member(cdt) => cdt.to_mongo(),
        }
    }
}

impl ToMongo for Condition {
    fn to_mongo(&self) -> Value {
        let value = self.value.to_json();
        let expr = match self.op {
            // Simple equality keeps the short form { key: val }
            Operator::Eq => value,
            Operator::Neq => json!({ "$ne": value }),
            Operator::Lt => json!({ "$lt": value }),
            Operator::Lte => json!({ "$lte": value }),
            Operator::Gt => json!({ "$gt": value }),
            Operator::Gte => json!({ "$gte": value }),
            Operator::Like => json!({ "$regex": like_to_regex(&self.value) }),
            Operator::NotLike => json!({ "$not": { "$regex": like_to_regex(&self.value) } }),
        };
        single(&self.property, expr)
    }
}

impl ToMongo for Membership {
    fn to_mongo(&self) -> Value {
        let op = match self.op {
            SetOperator::In => "$in",
            SetOperator::NotIn => "$nin",
        };
        let values: Vec<Value> = self.values.iter().map(Scalar::to_json).collect();
        single(&self.property, single(op, Value::Array(values)))
    }
}

/// `{ "<column>": 1 | -1, ... }` in clause order.
impl ToMongo for Order {
    fn to_mongo(&self) -> Value {
        let mut sort = Map::new();
        for (column, direction) in self.columns() {
            let dir = match direction {
                SortDirection::Asc => 1,
                SortDirection::Desc => -1,
            };
            sort.insert(column.to_string(), json!(dir));
        }
        Value::Object(sort)
    }
}

fn single(key: &str, value: Value) -> Value {
    let mut obj = Map::new();
    obj.insert(key.to_string(), value);
    Value::Object(obj)
}

/// Translate a LIKE pattern into an anchored regex: `%` -> `.*`, `_` -> `.`.
fn like_to_regex(pattern: &Scalar) -> String {
    let Scalar::String(pattern) = pattern else {
        return format!("^{}$", pattern.to_json());
    };

    let mut regex = String::with_capacity(pattern.len() + 2);
    regex.push('^');
    for c in pattern.chars() {
        match c {
            '%' => regex.push_str(".*"),
            '_' => regex.push('.'),
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^'
            | '$' => {
                regex.push('\\');
                regex.push(c);
            }
            _ => regex.push(c),
        }
    }
    regex.push('$');
    regex
}
