pub mod aggregate;

pub use aggregate::{CategoryId, CategoryNode, CategoryOption, CategoryPayload, CategorySummary};
