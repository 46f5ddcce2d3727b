//! Core type definitions used across the StoreIt workspace.

pub mod document;
pub mod id;
pub mod query;
pub mod sorting;

pub use document::DocumentList;
pub use id::unique_id;
pub use query::Query;
pub use sorting::{SortDirection, SortField};
