//! # storeit-core
//!
//! Core crate for StoreIt. Contains configuration schemas, typed backend
//! queries, sort keys, document identifiers, and the unified error system.
//!
//! This crate has **no** internal dependencies on other StoreIt crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
