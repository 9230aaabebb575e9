use serde::{Deserialize, Serialize};

/// Ordered list of raw sort clauses, e.g. `["created_at desc", "id asc"]`.
///
/// Clauses are caller text and are emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Order(Vec<String>);

/// Sort direction read back out of a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl Order {
    /// Returns `None` for an empty list; an empty order means "no order".
    pub fn new(clauses: Vec<String>) -> Option<Self> {
        if clauses.is_empty() {
            None
        } else {
            Some(Self(clauses))
        }
    }

    pub fn clauses(&self) -> &[String] {
        &self.0
    }

    /// Split each clause into a column and a direction.
    ///
    /// The direction comes from a trailing `asc`/`desc` token (any case);
    /// anything else sorts ascending on the whole clause.
    pub fn columns(&self) -> Vec<(&str, SortDirection)> {
        self.0
            .iter()
            .filter_map(|clause| {
                let clause = clause.trim();
                if clause.is_empty() {
                    return None;
                }
                let (column, direction) = match clause.rsplit_once(char::is_whitespace) {
                    Some((column, dir)) if dir.eq_ignore_ascii_case("desc") => {
                        (column.trim_end(), SortDirection::Desc)
                    }
                    Some((column, dir)) if dir.eq_ignore_ascii_case("asc") => {
                        (column.trim_end(), SortDirection::Asc)
                    }
                    _ => (clause, SortDirection::Asc),
                };
                Some((column, direction))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_order_is_none() {
        assert_eq!(Order::new(vec![]), None);
    }

    #[test]
    fn test_columns() {
        let order = Order::new(vec![
            "x desc".to_string(),
            "y ASC".to_string(),
            "z".to_string(),
        ])
        .unwrap();
        assert_eq!(
            order.columns(),
            vec![
                ("x", SortDirection::Desc),
                ("y", SortDirection::Asc),
                ("z", SortDirection::Asc),
            ]
        );
    }
}
