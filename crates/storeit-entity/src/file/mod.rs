//! File domain entities.

pub mod kind;
pub mod model;

pub use kind::FileType;
pub use model::{CreateFile, File, StoredFile};
