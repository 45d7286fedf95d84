//! Login form state and the submit workflow

use contracts::system::auth::{LoginRequest, LoginResponse};

use super::api::AuthApi;
use crate::shared::config::config;
use crate::shared::state::StateCell;

const LOGIN_FAILED: &str = "Не удалось войти. Проверьте почту и пароль.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub submitting: bool,
    pub error: Option<String>,
}

impl Default for LoginForm {
    fn default() -> Self {
        let auth = &config().auth;
        Self::with_credentials(&auth.default_email, &auth.default_password)
    }
}

impl LoginForm {
    pub fn with_credentials(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            submitting: false,
            error: None,
        }
    }

    /// Start a submit; `None` while another one is in flight
    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.error = None;
        Some(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Post the credentials. On success returns the response for the session to
/// consume; on failure the form carries the message.
pub async fn submit_login<A, S>(api: &A, form: &S) -> Option<LoginResponse>
where
    A: AuthApi + ?Sized,
    S: StateCell<LoginForm>,
{
    let request = form.update_state(|f| f.begin_submit()).flatten()?;

    let result = api.login(&request).await;
    match &result {
        Ok(_) => log::info!("Logged in as {}", request.email),
        Err(e) => log::error!("Login failed for {}: {e}", request.email),
    }
    form.update_state(|f| {
        f.submitting = false;
        match result {
            Ok(response) => Some(response),
            Err(e) => {
                f.error = Some(e.user_message(LOGIN_FAILED));
                None
            }
        }
    })
    .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::ApiError;
    use crate::system::auth::api::fake::FakeAuthApi;
    use crate::system::auth::Session;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[test]
    fn test_default_credentials_come_from_config() {
        let form = LoginForm::default();
        assert_eq!(form.email, "admin@local");
        assert_eq!(form.password, "admin123");
    }

    #[test]
    fn test_successful_login_starts_session() {
        let api = FakeAuthApi::default();
        api.responses.borrow_mut().push(Ok(LoginResponse {
            access_token: "tok".into(),
            expires_in: None,
        }));
        let form = RefCell::new(LoginForm::with_credentials(" admin@local ", "secret"));

        let response = block_on(submit_login(&api, &form)).unwrap();
        let mut session = Session::anonymous();
        session.login(response);

        assert!(session.is_authenticated());
        assert_eq!(api.requests.borrow()[0].email, "admin@local");
        assert!(!form.borrow().submitting);
        assert_eq!(form.borrow().error, None);
    }

    #[test]
    fn test_error_message_fallback() {
        let api = FakeAuthApi::default();
        api.responses.borrow_mut().push(Err(ApiError::Remote {
            status: 401,
            message: None,
        }));
        let form = RefCell::new(LoginForm::with_credentials("a@b", "x"));

        assert_eq!(block_on(submit_login(&api, &form)), None);
        assert_eq!(form.borrow().error.as_deref(), Some(LOGIN_FAILED));

        api.responses.borrow_mut().push(Err(ApiError::Remote {
            status: 401,
            message: Some("Invalid credentials".into()),
        }));
        assert_eq!(block_on(submit_login(&api, &form)), None);
        assert_eq!(form.borrow().error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn test_submit_suppressed_while_in_flight() {
        let api = FakeAuthApi::default();
        let form = RefCell::new(LoginForm::with_credentials("a@b", "x"));
        form.borrow_mut().submitting = true;

        assert_eq!(block_on(submit_login(&api, &form)), None);
        assert!(api.requests.borrow().is_empty());
    }
}
