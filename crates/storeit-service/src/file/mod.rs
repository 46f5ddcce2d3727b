//! File listing and upload.

pub mod service;
pub mod upload;

pub use service::FileService;
pub use upload::{UploadParams, UploadService};
