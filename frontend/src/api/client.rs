use reqwest::{Client, StatusCode};

use crate::{api::types::*, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Posts the credentials to `/auth/login`. Only `200 OK` counts as success; the
    /// response body is never read.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(&format!("{}/auth/login", base_url))
            .json(credentials)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        log::debug!("login responded with {}", status);
        if status == StatusCode::OK {
            Ok(())
        } else {
            Err(ApiError::Http(status.as_u16()))
        }
    }
}
