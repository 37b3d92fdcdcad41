//! List query encoding.
//!
//! Each query travels as one `queries[]` parameter holding a JSON object,
//! e.g. `{"method":"equal","attribute":"status","values":["active"]}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Attribute holding a document's creation time.
pub const CREATED_AT: &str = "$createdAt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QueryMethod {
    Equal,
    NotEqual,
    OrderAsc,
    OrderDesc,
    Limit,
    Offset,
    Search,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    method: QueryMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attribute: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    values: Vec<Value>,
}

impl Query {
    fn new(method: QueryMethod, attribute: Option<&str>, values: Vec<Value>) -> Self {
        Self {
            method,
            attribute: attribute.map(str::to_string),
            values,
        }
    }

    pub fn equal(attribute: &str, value: impl Into<Value>) -> Self {
        Self::new(QueryMethod::Equal, Some(attribute), vec![value.into()])
    }

    /// Matches when the attribute equals any of `values`.
    pub fn equal_any(attribute: &str, values: Vec<Value>) -> Self {
        Self::new(QueryMethod::Equal, Some(attribute), values)
    }

    pub fn not_equal(attribute: &str, value: impl Into<Value>) -> Self {
        Self::new(QueryMethod::NotEqual, Some(attribute), vec![value.into()])
    }

    pub fn order_asc(attribute: &str) -> Self {
        Self::new(QueryMethod::OrderAsc, Some(attribute), Vec::new())
    }

    pub fn order_desc(attribute: &str) -> Self {
        Self::new(QueryMethod::OrderDesc, Some(attribute), Vec::new())
    }

    pub fn limit(limit: u32) -> Self {
        Self::new(QueryMethod::Limit, None, vec![limit.into()])
    }

    pub fn offset(offset: u32) -> Self {
        Self::new(QueryMethod::Offset, None, vec![offset.into()])
    }

    pub fn search(attribute: &str, text: &str) -> Self {
        Self::new(QueryMethod::Search, Some(attribute), vec![text.into()])
    }

    pub fn method(&self) -> QueryMethod {
        self.method
    }

    pub fn attribute(&self) -> Option<&str> {
        self.attribute.as_deref()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Decode a `queries[]` parameter.
    pub fn parse(wire: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(wire)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wire = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&wire)
    }
}
