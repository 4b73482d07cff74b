// src/client.rs
//! Authenticated HTTP client over reqwest.
//!
//! Every call attaches the stored bearer token unless the caller opts out
//! (the login call itself must not, or a 401 there would recurse). A 401
//! from any endpoint clears the token store before surfacing; this client
//! never refreshes or retries on its own.

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{trace, warn};

use crate::auth::TokenStore;
use crate::config::ApiConfig;
use crate::error::ApiError;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: TokenStore,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            tokens: TokenStore::new(config.token_file.clone()),
        })
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub async fn get<R>(&self, endpoint: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        self.get_with_query(endpoint, &[]).await
    }

    pub async fn get_with_query<R>(
        &self,
        endpoint: &str,
        query: &[(String, String)],
    ) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let mut request = self.http.get(self.url(endpoint));
        if !query.is_empty() {
            request = request.query(query);
        }
        self.send(request, true).await
    }

    /// POST with no body (the candidate/position link endpoint).
    pub async fn post<R>(&self, endpoint: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        self.send(self.http.post(self.url(endpoint)), true).await
    }

    pub async fn post_json<T, R>(&self, endpoint: &str, payload: &T) -> Result<R, ApiError>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        self.send(self.http.post(self.url(endpoint)).json(payload), true)
            .await
    }

    pub async fn put_json<T, R>(&self, endpoint: &str, payload: &T) -> Result<R, ApiError>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        self.send(self.http.put(self.url(endpoint)).json(payload), true)
            .await
    }

    pub async fn delete<R>(&self, endpoint: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        self.send(self.http.delete(self.url(endpoint)), true).await
    }

    /// Form-encoded POST without the bearer header. Only the login call
    /// uses this.
    pub async fn post_form<R>(&self, endpoint: &str, form: &[(&str, &str)]) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        self.send(self.http.post(self.url(endpoint)).form(form), false)
            .await
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn send<R>(&self, request: RequestBuilder, attach_auth: bool) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let request = if attach_auth {
            match self.tokens.access() {
                Some(token) => request.bearer_auth(token),
                None => request,
            }
        } else {
            request
        };

        let response = request.send().await?;
        let status = response.status();
        trace!("Response status: {}", status);

        if status == StatusCode::UNAUTHORIZED {
            warn!("Received 401, clearing stored tokens");
            self.tokens.clear();
            return Err(ApiError::Unauthenticated);
        }

        if !status.is_success() {
            let status_text = status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string();
            let text = response.text().await.unwrap_or_default();
            let body = serde_json::from_str(&text)
                .unwrap_or_else(|_| serde_json::json!({ "message": status_text }));
            return Err(ApiError::Http {
                status: status.as_u16(),
                status_text,
                body,
            });
        }

        Ok(response.json::<R>().await?)
    }
}
