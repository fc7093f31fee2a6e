//! Supabase Auth (`GoTrue`) REST adapter.

use super::{
    Credentials, IdentityProvider, ProviderConfig, ProviderError, ProviderSession, ProviderUser,
};
use crate::APP_USER_AGENT;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, header::AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};
use tracing::{Instrument, debug, info_span};
use url::Url;

const API_KEY_HEADER: &str = "apikey";
const TOKEN_PATH: &str = "/auth/v1/token?grant_type=password";
const USER_PATH: &str = "/auth/v1/user";

#[derive(Debug)]
pub struct GoTrueProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl GoTrueProvider {
    /// Build the adapter and its HTTP client.
    ///
    /// # Errors
    /// Returns an error if the provider URL is not an `http(s)` URL with a host,
    /// or the HTTP client cannot be built.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let base_url = base_url(config.url())?;

        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.timeout())
            .build()
            .context("Failed to build identity provider HTTP client")?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key().clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl IdentityProvider for GoTrueProvider {
    async fn sign_in(&self, credentials: &Credentials) -> Result<ProviderSession, ProviderError> {
        let url = self.endpoint(TOKEN_PATH);

        let payload = json!({
            "email": credentials.email,
            "password": credentials.password.expose_secret(),
        });

        let span = info_span!("provider.sign_in", http.method = "POST", url = %url);
        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .bearer_auth(self.api_key.expose_secret())
            .json(&payload)
            .send()
            .instrument(span)
            .await?;

        let body = success_body(response).await?;

        let access_token = body
            .get("access_token")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ProviderError::Malformed("no access_token found".to_string()))?;

        let user = body
            .get("user")
            .and_then(parse_user)
            .ok_or_else(|| ProviderError::Malformed("no user found".to_string()))?;

        debug!("provider issued session for user {}", user.id);

        Ok(ProviderSession {
            access_token: SecretString::from(access_token),
            user,
        })
    }

    async fn verify_token(&self, token: &str) -> Result<Option<ProviderUser>, ProviderError> {
        let url = self.endpoint(USER_PATH);

        let span = info_span!("provider.verify_token", http.method = "GET", url = %url);
        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .instrument(span)
            .await?;

        let body = success_body(response).await?;

        // Some deployments answer 200 with an empty object for an unknown user.
        Ok(parse_user(&body))
    }
}

/// Validate the provider base URL and strip any trailing slash.
fn base_url(url: &str) -> Result<String> {
    let parsed = Url::parse(url)
        .with_context(|| format!("Invalid identity provider URL: {url}"))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(anyhow!(
            "Unsupported identity provider URL scheme: {}",
            parsed.scheme()
        ));
    }

    if parsed.host_str().is_none() {
        return Err(anyhow!("Identity provider URL must include a host: {url}"));
    }

    Ok(url.trim_end_matches('/').to_string())
}

/// Read the body of a response, mapping non-success statuses to provider errors.
async fn success_body(response: Response) -> Result<Value, ProviderError> {
    let status = response.status();
    let text = response.text().await?;

    if status.is_success() {
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        return serde_json::from_str(&text)
            .map_err(|err| ProviderError::Malformed(format!("invalid JSON body: {err}")));
    }

    let message = error_message(status, &text);

    if status.is_client_error() {
        debug!("provider rejected request: {} - {}", status, message);
        Err(ProviderError::Rejected(message))
    } else {
        Err(ProviderError::Upstream { status, message })
    }
}

/// Pick the human readable message out of a provider error body.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(json_response) = serde_json::from_str::<Value>(body) {
        // First non-empty field wins.
        let message = ["msg", "message", "error_description", "error"]
            .iter()
            .filter_map(|key| json_response.get(*key).and_then(Value::as_str))
            .find(|message| !message.is_empty());
        if let Some(message) = message {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("identity provider error")
            .to_string()
    } else {
        trimmed.to_string()
    }
}

fn parse_user(value: &Value) -> Option<ProviderUser> {
    let id = value
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())?;

    Some(ProviderUser {
        id: id.to_string(),
        email: value
            .get("email")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}
