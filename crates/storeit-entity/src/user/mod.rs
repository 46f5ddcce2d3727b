//! User domain entities.

pub mod avatar;
pub mod model;

pub use avatar::DEFAULT_AVATAR;
pub use model::{CreateUser, User};
