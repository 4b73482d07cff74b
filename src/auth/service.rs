// src/auth/service.rs
//! Login, refresh, and session bootstrap against the auth endpoints.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::client::ApiClient;
use crate::config::{LOGIN_ENDPOINT, ME_ENDPOINT, REFRESH_ENDPOINT};
use crate::error::ApiError;
use crate::types::wire::{AuthTokens, UserProfile};

#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

pub struct AuthService {
    client: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Exchange credentials for a token pair and persist it. The login
    /// request itself is form-encoded and unauthenticated.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthTokens, ApiError> {
        let form = [
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
        ];
        let tokens: AuthTokens = self.client.post_form(LOGIN_ENDPOINT, &form).await?;
        self.persist(&tokens);
        Ok(tokens)
    }

    /// Trade a refresh token for a fresh pair and persist it.
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthTokens, ApiError> {
        let tokens: AuthTokens = self
            .client
            .post_json(REFRESH_ENDPOINT, &RefreshRequest { refresh_token })
            .await?;
        self.persist(&tokens);
        Ok(tokens)
    }

    /// Profile of the bearer identity.
    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.client.get(ME_ENDPOINT).await
    }

    pub fn logout(&self) {
        self.client.tokens().clear();
    }

    /// Make sure a session exists, logging in with the supplied credentials
    /// if no token is stored. A present token is trusted as-is; there is no
    /// validity check, so a stale token still counts as authenticated until
    /// some request comes back 401. Login failure is logged and reported as
    /// `false`, never propagated.
    pub async fn ensure_authenticated(&self, credentials: &LoginCredentials) -> bool {
        if self.client.tokens().is_authenticated() {
            return true;
        }

        match self.login(credentials).await {
            Ok(_) => {
                info!("Logged in as {}", credentials.username);
                true
            }
            Err(e) => {
                warn!("Login failed: {}", e);
                false
            }
        }
    }

    fn persist(&self, tokens: &AuthTokens) {
        // A failed write leaves this process logged in but the session
        // won't survive a restart.
        if let Err(e) = self
            .client
            .tokens()
            .store(&tokens.access_token, &tokens.refresh_token)
        {
            warn!("Failed to persist tokens: {}", e);
        }
    }
}
