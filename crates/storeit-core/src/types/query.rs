//! Typed document queries.
//!
//! Queries travel to the hosted backend as JSON objects of the form
//! `{"method": "...", "attribute": "...", "values": [...]}`, one per
//! `queries[]` parameter.

use std::fmt;

use serde_json::{Value, json};

/// A single filter, ordering, or limit applied to a document listing.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// The attribute equals one of `values`.
    Equal {
        /// Attribute name.
        attribute: String,
        /// Accepted values.
        values: Vec<Value>,
    },
    /// The array attribute contains one of `values`.
    Contains {
        /// Attribute name.
        attribute: String,
        /// Values to look for.
        values: Vec<Value>,
    },
    /// Any of the nested queries matches.
    Or(Vec<Query>),
    /// Order ascending by attribute.
    OrderAsc(String),
    /// Order descending by attribute.
    OrderDesc(String),
    /// Return at most this many documents.
    Limit(u64),
}

impl Query {
    /// Equality filter.
    pub fn equal<V, I>(attribute: impl Into<String>, values: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Self::Equal {
            attribute: attribute.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Array-membership filter.
    pub fn contains<V, I>(attribute: impl Into<String>, values: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Self::Contains {
            attribute: attribute.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Disjunction of filters.
    pub fn or(queries: impl IntoIterator<Item = Query>) -> Self {
        Self::Or(queries.into_iter().collect())
    }

    /// Whether this query selects documents rather than ordering or limiting them.
    pub fn is_filter(&self) -> bool {
        matches!(self, Self::Equal { .. } | Self::Contains { .. } | Self::Or(_))
    }

    /// The wire representation.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Equal { attribute, values } => {
                json!({ "method": "equal", "attribute": attribute, "values": values })
            }
            Self::Contains { attribute, values } => {
                json!({ "method": "contains", "attribute": attribute, "values": values })
            }
            Self::Or(queries) => {
                let nested: Vec<Value> = queries.iter().map(Query::to_json).collect();
                json!({ "method": "or", "values": nested })
            }
            Self::OrderAsc(attribute) => json!({ "method": "orderAsc", "attribute": attribute }),
            Self::OrderDesc(attribute) => json!({ "method": "orderDesc", "attribute": attribute }),
            Self::Limit(limit) => json!({ "method": "limit", "values": [limit] }),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}
