//! # storeit-entity
//!
//! Domain entity models for StoreIt. Every struct in this crate mirrors a
//! document or response body of the hosted backend. Attribute names follow
//! the backend's camelCase convention, and system attributes keep their
//! `$` prefix on the wire (`$id`, `$createdAt`).

pub mod account;
pub mod file;
pub mod user;
