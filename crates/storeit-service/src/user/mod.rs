//! User lookup and current-user resolution.

pub mod directory;
pub mod service;

pub use directory::UserDirectory;
pub use service::UserService;
