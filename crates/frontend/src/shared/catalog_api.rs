//! Catalog REST client
//!
//! [`CatalogApi`] is the seam between the view models and the network:
//! the browser uses [`HttpCatalogApi`] (gloo-net), tests plug in fakes.

use async_trait::async_trait;
use contracts::domain::a001_category::{CategoryId, CategoryNode, CategoryOption, CategoryPayload};
use contracts::domain::a002_product::{
    CategoryProductsResponse, ProductDetail, ProductId, ProductPayload,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{
    api_base, expect_success, join_url, path_segment, read_json, with_bearer, ApiError,
};

#[async_trait(?Send)]
pub trait CatalogApi {
    /// `GET /categories/tree`
    async fn fetch_tree(&self) -> Result<Vec<CategoryNode>, ApiError>;
    /// `GET /categories/`
    async fn fetch_categories(&self) -> Result<Vec<CategoryOption>, ApiError>;
    /// `GET /categories/{slug}/products`
    async fn fetch_category_products(
        &self,
        slug: &str,
    ) -> Result<CategoryProductsResponse, ApiError>;
    /// `GET /products/{slug}`
    async fn fetch_product(&self, slug: &str) -> Result<ProductDetail, ApiError>;
    async fn create_category(&self, payload: &CategoryPayload) -> Result<(), ApiError>;
    async fn update_category(
        &self,
        id: CategoryId,
        payload: &CategoryPayload,
    ) -> Result<(), ApiError>;
    async fn create_product(&self, payload: &ProductPayload) -> Result<(), ApiError>;
    async fn update_product(&self, id: ProductId, payload: &ProductPayload)
        -> Result<(), ApiError>;
}

/// gloo-net implementation bound to one session token
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    base_url: String,
    access_token: Option<String>,
}

impl HttpCatalogApi {
    pub fn new(base_url: impl Into<String>, access_token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token,
        }
    }

    /// Client for the configured API base
    pub fn for_token(access_token: Option<String>) -> Self {
        Self::new(api_base(), access_token)
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[async_trait(?Send)]
impl CatalogApi for HttpCatalogApi {
    async fn fetch_tree(&self) -> Result<Vec<CategoryNode>, ApiError> {
        let response = with_bearer(Request::get(&self.url("/categories/tree")), self.token())
            .send()
            .await
            .map_err(network)?;
        read_json(response).await
    }

    async fn fetch_categories(&self) -> Result<Vec<CategoryOption>, ApiError> {
        let response = with_bearer(Request::get(&self.url("/categories/")), self.token())
            .send()
            .await
            .map_err(network)?;
        read_json(response).await
    }

    async fn fetch_category_products(
        &self,
        slug: &str,
    ) -> Result<CategoryProductsResponse, ApiError> {
        let url = self.url(&format!("/categories/{}/products", path_segment(slug)));
        let response = with_bearer(Request::get(&url), self.token())
            .send()
            .await
            .map_err(network)?;
        read_json(response).await
    }

    async fn fetch_product(&self, slug: &str) -> Result<ProductDetail, ApiError> {
        let url = self.url(&format!("/products/{}", path_segment(slug)));
        let response = with_bearer(Request::get(&url), self.token())
            .send()
            .await
            .map_err(network)?;
        read_json(response).await
    }

    async fn create_category(&self, payload: &CategoryPayload) -> Result<(), ApiError> {
        let response = with_bearer(Request::post(&self.url("/admin/categories")), self.token())
            .json(payload)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        expect_success(response).await
    }

    async fn update_category(
        &self,
        id: CategoryId,
        payload: &CategoryPayload,
    ) -> Result<(), ApiError> {
        let url = self.url(&format!("/admin/categories/{}", id));
        let response = with_bearer(Request::put(&url), self.token())
            .json(payload)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        expect_success(response).await
    }

    async fn create_product(&self, payload: &ProductPayload) -> Result<(), ApiError> {
        let response = with_bearer(Request::post(&self.url("/admin/products")), self.token())
            .json(payload)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        expect_success(response).await
    }

    async fn update_product(
        &self,
        id: ProductId,
        payload: &ProductPayload,
    ) -> Result<(), ApiError> {
        let url = self.url(&format!("/admin/products/{}", id));
        let response = with_bearer(Request::patch(&url), self.token())
            .json(payload)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        expect_success(response).await
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory [`CatalogApi`] used by the view-model tests.

    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Records every call and replays queued responses in order.
    /// An exhausted queue answers with `ApiError::Network("no response queued")`.
    #[derive(Default)]
    pub struct FakeCatalogApi {
        pub calls: RefCell<Vec<String>>,
        pub trees: RefCell<VecDeque<Result<Vec<CategoryNode>, ApiError>>>,
        pub options: RefCell<VecDeque<Result<Vec<CategoryOption>, ApiError>>>,
        pub listings: RefCell<VecDeque<Result<CategoryProductsResponse, ApiError>>>,
        pub products: RefCell<VecDeque<Result<ProductDetail, ApiError>>>,
        pub writes: RefCell<VecDeque<Result<(), ApiError>>>,
        pub category_payloads: RefCell<Vec<CategoryPayload>>,
        pub product_payloads: RefCell<Vec<ProductPayload>>,
    }

    fn next<T>(queue: &RefCell<VecDeque<Result<T, ApiError>>>) -> Result<T, ApiError> {
        queue
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no response queued".into())))
    }

    impl FakeCatalogApi {
        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: String) {
            self.calls.borrow_mut().push(call);
        }
    }

    #[async_trait(?Send)]
    impl CatalogApi for FakeCatalogApi {
        async fn fetch_tree(&self) -> Result<Vec<CategoryNode>, ApiError> {
            self.record("GET /categories/tree".into());
            next(&self.trees)
        }

        async fn fetch_categories(&self) -> Result<Vec<CategoryOption>, ApiError> {
            self.record("GET /categories/".into());
            next(&self.options)
        }

        async fn fetch_category_products(
            &self,
            slug: &str,
        ) -> Result<CategoryProductsResponse, ApiError> {
            self.record(format!("GET /categories/{slug}/products"));
            next(&self.listings)
        }

        async fn fetch_product(&self, slug: &str) -> Result<ProductDetail, ApiError> {
            self.record(format!("GET /products/{slug}"));
            next(&self.products)
        }

        async fn create_category(&self, payload: &CategoryPayload) -> Result<(), ApiError> {
            self.record("POST /admin/categories".into());
            self.category_payloads.borrow_mut().push(payload.clone());
            next(&self.writes)
        }

        async fn update_category(
            &self,
            id: CategoryId,
            payload: &CategoryPayload,
        ) -> Result<(), ApiError> {
            self.record(format!("PUT /admin/categories/{id}"));
            self.category_payloads.borrow_mut().push(payload.clone());
            next(&self.writes)
        }

        async fn create_product(&self, payload: &ProductPayload) -> Result<(), ApiError> {
            self.record("POST /admin/products".into());
            self.product_payloads.borrow_mut().push(payload.clone());
            next(&self.writes)
        }

        async fn update_product(
            &self,
            id: ProductId,
            payload: &ProductPayload,
        ) -> Result<(), ApiError> {
            self.record(format!("PATCH /admin/products/{id}"));
            self.product_payloads.borrow_mut().push(payload.clone());
            next(&self.writes)
        }
    }
}
