pub mod aggregate;

pub use aggregate::{
    CategoryProductsResponse, ProductDetail, ProductId, ProductListItem, ProductPayload,
};
