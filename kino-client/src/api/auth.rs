//! Registration, token and profile endpoints

use serde::de::IgnoredAny;
use shared::models::{CurrentUser, UserCreate};
use shared::{TokenRequest, TokenResponse};

use super::Api;
use crate::ClientResult;
use crate::http::HttpClient;

impl<H: HttpClient> Api<H> {
    /// Create an account. The created user is not used by the client.
    pub async fn register(&self, user: &UserCreate) -> ClientResult<()> {
        let _: IgnoredAny = self.http.post("/users/", user).await?;
        Ok(())
    }

    /// Exchange credentials for a bearer token (form-encoded)
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<TokenResponse> {
        let form = TokenRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.http.post_form(self.backend.token_path(), &form).await
    }

    /// Profile of the token's owner
    pub async fn me(&self) -> ClientResult<CurrentUser> {
        self.http.get(self.backend.profile_path()).await
    }
}
