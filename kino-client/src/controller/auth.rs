//! Register, login and logout

use shared::models::UserCreate;

use super::*;
use crate::view::state::{LoginForm, RegisterForm};

pub const LOGIN_FAILED: &str = "Invalid username or password";
pub const REGISTERED: &str = "Registration successful, you can now log in";

impl<H: HttpClient, S: TokenStore> ViewController<H, S> {
    /// Submit the register form. Does not log the new user in.
    pub async fn register(&mut self) -> ClientResult<()> {
        let RegisterForm {
            username,
            email,
            password,
        } = self.view.forms.register.clone();
        if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return self.fail(ClientError::Validation(
                "Username, email and password are required".to_string(),
            ));
        }

        let user = UserCreate {
            username: username.trim().to_string(),
            email: email.trim().to_string(),
            password,
        };
        match self.api.register(&user).await {
            Ok(()) => {
                tracing::info!(username = %user.username, "User registered");
                self.view.forms.register = RegisterForm::default();
                self.view.info(REGISTERED);
                Ok(())
            }
            Err(e) => self.fail(e),
        }
    }

    /// Submit the login form.
    ///
    /// Failures land in the inline login error slot instead of a notice.
    pub async fn login(&mut self) -> ClientResult<()> {
        let LoginForm { username, password } = self.view.forms.login.clone();
        let username = username.trim().to_string();
        if username.is_empty() || password.is_empty() {
            let err = ClientError::Validation("Enter username and password".to_string());
            self.view.login_error = Some(err.user_message());
            return Err(err);
        }

        let token = match self.api.login(&username, &password).await {
            Ok(token) => token.access_token,
            Err(e) => {
                tracing::warn!(username = %username, error = %e, "Login failed");
                self.view.login_error = Some(login_failure_message(&e));
                return Err(e);
            }
        };

        if let Err(e) = self.session.begin(token.clone()) {
            tracing::warn!(error = %e, "Failed to persist token");
        }
        self.api.set_token(Some(token));

        match self.api.me().await {
            Ok(user) => {
                tracing::info!(username = %user.username, role = ?user.role, "Logged in");
                self.session.set_user(user);
                self.render_signed_in().await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Profile fetch after login failed");
                self.drop_session();
                self.view.login_error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Clear token and user and show the logged-out page. No request is
    /// made.
    pub fn logout(&mut self) {
        if let Some(user) = self.session.user() {
            tracing::info!(username = %user.username, "Logging out");
        }
        self.drop_session();
    }
}

fn login_failure_message(err: &ClientError) -> String {
    match err {
        ClientError::Api {
            detail: Some(detail),
            ..
        }
        | ClientError::Unauthorized(Some(detail)) => detail.clone(),
        e if e.is_rejection() => LOGIN_FAILED.to_string(),
        e => e.user_message(),
    }
}
