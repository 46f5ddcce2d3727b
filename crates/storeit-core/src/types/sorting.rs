//! Sorting types for list endpoints.

use serde::{Deserialize, Serialize};

use super::query::Query;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// The suffix used in sort keys such as `name-asc`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A sort order made of a field name and direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    /// Attribute name to sort by.
    pub field: String,
    /// Sort direction.
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortField {
    /// Create a new sort field.
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Create an ascending sort on the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Create a descending sort on the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Parse a `field-direction` key such as `$createdAt-desc`.
    ///
    /// The split happens at the last `-`, so field names may contain dashes.
    pub fn parse_key(key: &str) -> Option<Self> {
        let (field, direction) = key.rsplit_once('-')?;
        if field.is_empty() {
            return None;
        }
        let direction = match direction {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => return None,
        };
        Some(Self::new(field, direction))
    }

    /// Render back to the `field-direction` key form.
    pub fn key(&self) -> String {
        format!("{}-{}", self.field, self.direction.as_str())
    }

    /// The ordering query for this sort.
    pub fn to_query(&self) -> Query {
        match self.direction {
            SortDirection::Asc => Query::OrderAsc(self.field.clone()),
            SortDirection::Desc => Query::OrderDesc(self.field.clone()),
        }
    }
}
