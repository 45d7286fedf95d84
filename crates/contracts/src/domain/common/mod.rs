//! Common types shared by all catalog endpoints

pub mod api_error;
pub mod pagination;

// Re-exports
pub use api_error::ApiErrorBody;
pub use pagination::Pagination;
