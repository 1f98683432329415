//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the services that
//! need it. Nothing in this crate reads environment variables; the binary does that and hands
//! the raw values to the `*_from_env_value(s)` helpers below.

use crate::auth::Credentials;
use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_LOGIN_PASSWORD};
use crate::schema::RecordKind;
use crate::{CoreError, CoreResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    api_base_url: String,
    credentials: Credentials,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// Trailing slashes are removed from `api_base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] if the base URL is empty or is not an
    /// `http://`/`https://` URL.
    pub fn new(api_base_url: impl AsRef<str>, credentials: Credentials) -> CoreResult<Self> {
        let api_base_url = normalise_base_url(api_base_url.as_ref())?;
        Ok(Self {
            api_base_url,
            credentials,
        })
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Full URL of the create/list endpoint for `kind`.
    pub fn endpoint_url(&self, kind: RecordKind) -> String {
        format!("{}/{}", self.api_base_url, kind.endpoint())
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            credentials: Credentials::default(),
        }
    }
}

fn normalise_base_url(value: &str) -> CoreResult<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(CoreError::InvalidInput("api base url cannot be empty".into()));
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(CoreError::InvalidInput(format!(
            "api base url must start with http:// or https://, got '{trimmed}'"
        )));
    }
    Ok(trimmed.to_owned())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse the API base URL from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default service URL.
pub fn api_base_url_from_env_value(value: Option<String>) -> CoreResult<String> {
    match non_blank(value) {
        Some(url) => normalise_base_url(&url),
        None => Ok(DEFAULT_API_BASE_URL.to_owned()),
    }
}

/// Build login credentials from optional email/password values.
///
/// Each blank value falls back to its default independently.
pub fn credentials_from_env_values(email: Option<String>, password: Option<String>) -> Credentials {
    let defaults = Credentials::default();
    let email = non_blank(email).unwrap_or_else(|| defaults.email().to_owned());
    // Passwords are compared verbatim, never trimmed.
    let password = password
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOGIN_PASSWORD.to_owned());
    Credentials::new(email, password)
}
