//! The filter façade.
//!
//! A [`Filter`] holds the four independently parsed parts of a request
//! filter. Each `build_*` call resets its own field before parsing, so a
//! failed build leaves that field unset instead of keeping a stale value.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::ast::{LogicalOp, Order, Where};
use crate::error::{FilterError, FilterResult};
use crate::parser;

/// A parsed `{ where, order, limit, skip }` filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// Search criteria; the WHERE clause.
    #[serde(rename = "where", default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Where>,

    /// Sort clauses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,

    /// Maximum number of rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    /// Number of rows to skip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<u64>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from a decoded JSON object, failing on the first bad field.
    pub fn from_json(value: &Value) -> FilterResult<Self> {
        let Value::Object(obj) = value else {
            return Err(FilterError::invalid_filter("filter"));
        };

        let mut filter = Self::new();
        if let Some(v) = obj.get("where") {
            filter.build_where(v)?;
        }
        if let Some(v) = obj.get("order") {
            filter.build_order(v)?;
        }
        if let Some(v) = obj.get("limit") {
            filter.build_limit(v)?;
        }
        if let Some(v) = obj.get("skip") {
            filter.build_skip(v)?;
        }
        Ok(filter)
    }

    /// Rebuild every field whose key is present, in `where`, `order`,
    /// `limit`, `skip` order.
    ///
    /// Fields are independent: a failure in one does not stop the others.
    /// Absent keys leave their field untouched. Returns the last error seen.
    pub fn build(&mut self, obj: &Map<String, Value>) -> FilterResult<&mut Self> {
        let mut last_err = None;

        if let Some(v) = obj.get("where") {
            last_err = self.build_where(v).err().or(last_err);
        }
        if let Some(v) = obj.get("order") {
            last_err = self.build_order(v).err().or(last_err);
        }
        if let Some(v) = obj.get("limit") {
            last_err = self.build_limit(v).err().or(last_err);
        }
        if let Some(v) = obj.get("skip") {
            last_err = self.build_skip(v).err().or(last_err);
        }

        match last_err {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }

    pub fn build_where(&mut self, value: &Value) -> FilterResult<&mut Self> {
        self.condition = None;
        let condition = parser::parse_where(value)?;
        debug!(condition = ?condition, "built where");
        self.condition = Some(condition);
        Ok(self)
    }

    /// An empty or all-non-string order list leaves `order` unset without error.
    pub fn build_order(&mut self, value: &Value) -> FilterResult<&mut Self> {
        self.order = None;
        self.order = parser::parse_order(value)?;
        debug!(order = ?self.order, "built order");
        Ok(self)
    }

    pub fn build_limit(&mut self, value: &Value) -> FilterResult<&mut Self> {
        self.limit = None;
        self.limit = Some(parser::parse_limit(value)?);
        Ok(self)
    }

    pub fn build_skip(&mut self, value: &Value) -> FilterResult<&mut Self> {
        self.skip = None;
        self.skip = Some(parser::parse_skip(value)?);
        Ok(self)
    }

    /// AND the current condition with `clauses` into one flat node.
    pub fn and(&mut self, clauses: impl IntoIterator<Item = Where>) -> &mut Self {
        self.combine(LogicalOp::And, clauses)
    }

    /// OR the current condition with `clauses` into one flat node.
    pub fn or(&mut self, clauses: impl IntoIterator<Item = Where>) -> &mut Self {
        self.combine(LogicalOp::Or, clauses)
    }

    fn combine(&mut self, op: LogicalOp, clauses: impl IntoIterator<Item = Where>) -> &mut Self {
        let current = self.condition.take();
        self.condition = Where::combine(op, current.into_iter().chain(clauses));
        self
    }
}
