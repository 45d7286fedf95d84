//! Authenticated session
//!
//! A plain value: the provider keeps it in a signal and hands it down through
//! the context, tests build as many independent sessions as they need.

use contracts::system::auth::LoginResponse;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    access_token: Option<String>,
    /// Срок жизни токена в секундах, как его сообщил сервер (клиент не следит)
    expires_in: Option<u64>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session restored from a token persisted earlier; the expiry is unknown
    pub fn restored(access_token: String) -> Self {
        let access_token = Some(access_token).filter(|token| !token.is_empty());
        Self {
            access_token,
            expires_in: None,
        }
    }

    pub fn login(&mut self, response: LoginResponse) {
        self.access_token = Some(response.access_token).filter(|token| !token.is_empty());
        self.expires_in = response.expires_in;
    }

    pub fn logout(&mut self) {
        self.access_token = None;
        self.expires_in = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn expires_in(&self) -> Option<u64> {
        self.expires_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(token: &str) -> LoginResponse {
        LoginResponse {
            access_token: token.into(),
            expires_in: Some(3600),
        }
    }

    #[test]
    fn test_login_logout_lifecycle() {
        let mut session = Session::anonymous();
        assert!(!session.is_authenticated());

        session.login(response("tok-1"));
        assert!(session.is_authenticated());
        assert_eq!(session.access_token(), Some("tok-1"));
        assert_eq!(session.expires_in(), Some(3600));

        session.logout();
        assert_eq!(session, Session::anonymous());
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut admin = Session::anonymous();
        let other = Session::anonymous();
        admin.login(response("tok-1"));

        assert!(admin.is_authenticated());
        assert!(!other.is_authenticated());
    }

    #[test]
    fn test_empty_token_is_not_a_session() {
        assert!(!Session::restored(String::new()).is_authenticated());

        let mut session = Session::anonymous();
        session.login(response(""));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_restored_session() {
        let session = Session::restored("persisted".into());
        assert_eq!(session.access_token(), Some("persisted"));
        assert_eq!(session.expires_in(), None);
    }
}
