//! API utilities for frontend-backend communication
//!
//! URL construction, bearer authentication and the mapping of HTTP failures to
//! [`ApiError`].

use contracts::domain::common::ApiErrorBody;
use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::shared::config::config;

/// Failure of a call to the catalog REST service
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Запрос не дошёл до сервера (сеть, CORS, сериализация тела)
    #[error("network error: {0}")]
    Network(String),
    /// Сервер ответил кодом ошибки
    #[error("HTTP {status}")]
    Remote {
        status: u16,
        message: Option<String>,
    },
    /// Ответ пришёл, но не разобрался
    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for the user: the server message when there is one, otherwise `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Remote {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Get the base URL for API requests
pub fn api_base() -> String {
    config().api.base_url.clone()
}

/// Build a full API URL from a path relative to the API base
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// Join a base URL and a path with exactly one slash between them
///
/// # Example
/// ```rust
/// use laserio_admin::shared::api_utils::join_url;
///
/// assert_eq!(join_url("https://host/api", "/categories/tree"), "https://host/api/categories/tree");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Encode a slug for use as a path segment
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Attach `Authorization: Bearer ...` when a token is present
pub fn with_bearer(builder: RequestBuilder, access_token: Option<&str>) -> RequestBuilder {
    match access_token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Extract the human readable part of an error body
pub fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(ApiErrorBody::into_message)
}

async fn remote_error(response: Response) -> ApiError {
    let status = response.status();
    let message = match response.text().await {
        Ok(body) => parse_error_message(&body),
        Err(_) => None,
    };
    ApiError::Remote { status, message }
}

/// Decode a JSON response, turning non-2xx statuses into [`ApiError::Remote`]
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(remote_error(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Check the status of a response whose body is not needed
pub async fn expect_success(response: Response) -> Result<(), ApiError> {
    if !response.ok() {
        return Err(remote_error(response).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Remote {
            status: 422,
            message: Some("Slug уже используется".into()),
        };
        assert_eq!(err.user_message("Не удалось сохранить категорию."), "Slug уже используется");
    }

    #[test]
    fn test_user_message_falls_back() {
        let fallback = "Не удалось загрузить дерево категорий.";
        let remote = ApiError::Remote {
            status: 500,
            message: None,
        };
        assert_eq!(remote.user_message(fallback), fallback);
        assert_eq!(ApiError::Network("offline".into()).user_message(fallback), fallback);
        assert_eq!(ApiError::Decode("eof".into()).user_message(fallback), fallback);
    }

    #[test]
    fn test_parse_error_message() {
        assert_eq!(
            parse_error_message(r#"{"error":"Unauthorized"}"#).as_deref(),
            Some("Unauthorized")
        );
        assert_eq!(parse_error_message("<html>502</html>"), None);
        assert_eq!(parse_error_message(""), None);
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://h/api/", "/products/x"), "https://h/api/products/x");
        assert_eq!(join_url("https://h/api", "categories/"), "https://h/api/categories/");
    }

    #[test]
    fn test_path_segment_encodes() {
        assert_eq!(path_segment("lazery"), "lazery");
        assert_eq!(path_segment("a b/c"), "a%20b%2Fc");
    }
}
