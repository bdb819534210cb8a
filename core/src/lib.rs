pub mod error;
pub mod handler;
pub mod metadata;
pub mod pagination;
pub mod types;

pub use error::ApiError;
