//! Bearer token acquisition

use serde::{Deserialize, Serialize};

use crate::common::{truncate_body, Error, Result};

use super::protocol::{LoginRequest, ACCESS_TOKEN_FIELD, AUTHENTICATION};

/// Login used to obtain the bearer token
#[derive(Deserialize, Serialize, Clone)]
pub struct Credentials {
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_password")]
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn default_username() -> String {
    "ivoivanov".to_string()
}

fn default_password() -> String {
    "ivo123456789".to_string()
}

/// Log in once and return the bearer token
///
/// Fails on transport errors, non-2xx statuses, malformed JSON and a missing
/// or empty token. No retries.
pub async fn acquire_token(
    client: &reqwest::Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<String> {
    let url = format!("{}{}", base_url, AUTHENTICATION);
    tracing::debug!(url = %url, username = %credentials.username, "Requesting access token");

    let response = client
        .post(&url)
        .json(&LoginRequest {
            username: &credentials.username,
            password: &credentials.password,
        })
        .send()
        .await
        .map_err(|source| Error::AuthUnreachable {
            url: url.clone(),
            source,
        })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|source| Error::AuthUnreachable { url, source })?;

    if !status.is_success() {
        return Err(Error::AuthRejected {
            status: status.as_u16(),
            body: truncate_body(&body, 200),
        });
    }

    extract_token(&body, ACCESS_TOKEN_FIELD)
}

/// Pull a non-empty string field out of a JSON login response
pub fn extract_token(body: &str, field: &str) -> Result<String> {
    let json: serde_json::Value = serde_json::from_str(body).map_err(Error::AuthMalformed)?;
    match json.get(field).and_then(|v| v.as_str()) {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(Error::token_missing(field)),
    }
}
