//! The list envelope returned by document queries.

use serde::{Deserialize, Serialize};

/// A page of documents together with the total match count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentList<T> {
    /// Total number of documents matching the query.
    pub total: u64,
    /// The documents in this response.
    pub documents: Vec<T>,
}

impl<T> DocumentList<T> {
    /// An empty list.
    pub fn empty() -> Self {
        Self {
            total: 0,
            documents: Vec::new(),
        }
    }

    /// Whether the query matched nothing.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Consume the list and return its first document.
    pub fn into_first(self) -> Option<T> {
        self.documents.into_iter().next()
    }
}

impl DocumentList<serde_json::Value> {
    /// Deserialize every raw document into `T`.
    pub fn parse<T: serde::de::DeserializeOwned>(self) -> Result<DocumentList<T>, serde_json::Error> {
        let documents = self
            .documents
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()?;
        Ok(DocumentList {
            total: self.total,
            documents,
        })
    }
}
