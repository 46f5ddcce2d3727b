//! Backend account entities: accounts, email tokens, and sessions.

pub mod model;

pub use model::{Account, EmailToken, Session};
