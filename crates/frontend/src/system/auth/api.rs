use async_trait::async_trait;
use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_json, ApiError};

#[async_trait(?Send)]
pub trait AuthApi {
    /// `POST /admin/auth/login`
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
}

/// Login endpoint of the configured API base
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpAuthApi;

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = Request::post(&api_url("/admin/auth/login"))
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    pub struct FakeAuthApi {
        pub requests: RefCell<Vec<LoginRequest>>,
        pub responses: RefCell<Vec<Result<LoginResponse, ApiError>>>,
    }

    #[async_trait(?Send)]
    impl AuthApi for FakeAuthApi {
        async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
            self.requests.borrow_mut().push(request.clone());
            self.responses
                .borrow_mut()
                .pop()
                .unwrap_or_else(|| Err(ApiError::Network("no response queued".into())))
        }
    }
}
