//! Authenticated session shared by every scenario

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::common::{Error, Result};

use super::auth::{acquire_token, Credentials};
use super::protocol::Endpoint;

/// Status and raw text body of one request
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub body: String,
}

impl Response {
    /// Parse the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// HTTP client bound to one base address and one bearer token
///
/// Built once per run and released once at the end. `release` consumes the
/// session, so it cannot be used afterwards.
pub struct Session {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl Session {
    /// Log in and build the authenticated session
    pub async fn connect(base_url: &str, credentials: &Credentials, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(Error::ClientBuild)?;

        let token = acquire_token(&client, base_url, credentials).await?;
        tracing::info!(base_url = %base_url, "Acquired access token");

        Ok(Self::with_token(client, base_url, token))
    }

    /// Build a session from an already acquired token
    pub fn with_token(client: reqwest::Client, base_url: &str, token: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Base address requests are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an endpoint, with any id pushed as one encoded segment
    pub fn url(&self, endpoint: Endpoint<'_>) -> Result<reqwest::Url> {
        let raw = format!("{}{}", self.base_url, endpoint.route);
        let mut url = reqwest::Url::parse(&raw)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", raw, e)))?;
        if let Some(id) = endpoint.id {
            url.path_segments_mut()
                .map_err(|()| Error::InvalidUrl(format!("{} cannot take path segments", raw)))?
                .push(id);
        }
        Ok(url)
    }

    /// Issue one authenticated request
    ///
    /// Any status is returned as-is; only transport failures are errors.
    pub async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: Endpoint<'_>,
        body: Option<&B>,
    ) -> Result<Response> {
        let url = self.url(endpoint)?;
        let path = endpoint.to_string();

        let mut request = self
            .client
            .request(method.clone(), url)
            .bearer_auth(&self.token);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::transport(&method, &path, e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(&method, &path, e))?;

        tracing::debug!(method = %method, path = %path, status = status.as_u16(), "Request completed");

        Ok(Response { status, body })
    }

    pub async fn get(&self, endpoint: Endpoint<'_>) -> Result<Response> {
        self.execute::<()>(Method::GET, endpoint, None).await
    }

    pub async fn delete(&self, endpoint: Endpoint<'_>) -> Result<Response> {
        self.execute::<()>(Method::DELETE, endpoint, None).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint<'_>,
        body: &B,
    ) -> Result<Response> {
        self.execute(Method::POST, endpoint, Some(body)).await
    }

    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint<'_>,
        body: &B,
    ) -> Result<Response> {
        self.execute(Method::PATCH, endpoint, Some(body)).await
    }

    /// Release the underlying client
    pub fn release(self) {
        tracing::debug!(base_url = %self.base_url, "Releasing session");
        drop(self.client);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_token() {
        let session = Session::with_token(
            reqwest::Client::new(),
            "http://localhost:1/",
            "super-secret-token".to_string(),
        );
        let rendered = format!("{:?}", session);
        assert!(!rendered.contains("super-secret-token"));
        assert_eq!(session.base_url(), "http://localhost:1");
    }

    #[test]
    fn test_url_encodes_id_as_one_segment() {
        let session = Session::with_token(
            reqwest::Client::new(),
            "http://localhost:1",
            "t".to_string(),
        );
        let url = session
            .url(crate::api::protocol::food_edit("tray/7?x#y"))
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:1/api/Food/Edit/tray%2F7%3Fx%23y");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);

        let url = session.url(crate::api::protocol::FOOD_ALL).unwrap();
        assert_eq!(url.as_str(), "http://localhost:1/api/Food/All");
    }

    #[test]
    fn test_url_keeps_base_path_prefix() {
        let session = Session::with_token(
            reqwest::Client::new(),
            "http://localhost:1/foody/",
            "t".to_string(),
        );
        let url = session
            .url(crate::api::protocol::food_delete("1234"))
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:1/foody/api/Food/Delete/1234");
    }

    #[test]
    fn test_response_json() {
        let response = Response {
            status: StatusCode::OK,
            body: r#"[{"name":"a"}]"#.to_string(),
        };
        let items: Vec<serde_json::Value> = response.json().unwrap();
        assert_eq!(items.len(), 1);
    }
}
