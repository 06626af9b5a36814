use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::common::{ErrorKind, Result};

// Account view configuration.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    // Backend base url. login, logout and api paths are resolved against it.
    base_url: Option<String>,
    // Name of the cookie the backend keeps the session id in.
    session_cookie_name: Option<String>,
    // Session id issued by the backend after login.
    session: Option<String>,
    // Timeout of each backend request.
    timeout_milliseconds: Option<u64>,
    // Identity provider used by login.
    default_provider: Option<String>,
}

impl Config {
    const DEFAULT_BASE_URL: &'static str = "http://localhost:8080";
    const DEFAULT_SESSION_COOKIE_NAME: &'static str = "session_id";
    const DEFAULT_TIMEOUT_MILLISECONDS: u64 = 1000 * 10;
    const MIN_TIMEOUT_MILLISECONDS: u64 = 100;
    const DEFAULT_PROVIDER: &'static str = crate::profile::GOOGLE_PROVIDER_ID;

    pub fn set_base_url(&mut self, val: &mut Option<String>) {
        if let Some(val) = val.take() {
            self.base_url = Some(val)
        }
    }
    pub fn set_session_cookie_name(&mut self, val: &mut Option<String>) {
        if let Some(val) = val.take() {
            self.session_cookie_name = Some(val)
        }
    }
    pub fn set_session(&mut self, val: &mut Option<String>) {
        if let Some(val) = val.take() {
            self.session = Some(val)
        }
    }
    pub fn set_timeout_milliseconds(&mut self, val: Option<u64>) {
        if let Some(val) = val {
            self.timeout_milliseconds = Some(std::cmp::max(val, Config::MIN_TIMEOUT_MILLISECONDS));
        }
    }
    pub fn set_default_provider(&mut self, val: &mut Option<String>) {
        if let Some(val) = val.take() {
            self.default_provider = Some(val)
        }
    }
    /// Values set in `other` win.
    pub fn override_merge(&mut self, other: &mut Config) {
        self.set_base_url(&mut other.base_url);
        self.set_session_cookie_name(&mut other.session_cookie_name);
        self.set_session(&mut other.session);
        self.set_timeout_milliseconds(other.timeout_milliseconds);
        self.set_default_provider(&mut other.default_provider);
    }

    /// Absolute http(s) base url.
    pub fn base_url(&self) -> Result<Url> {
        let raw = self
            .base_url
            .as_deref()
            .unwrap_or(Config::DEFAULT_BASE_URL);
        let url = Url::parse(raw)?;

        match url.scheme() {
            "http" | "https" if url.has_host() => Ok(url),
            _ => Err(ErrorKind::BaseUrl {
                url: raw.to_owned(),
            }
            .into()),
        }
    }

    pub fn session_cookie_name(&self) -> &str {
        self.session_cookie_name
            .as_deref()
            .unwrap_or(Config::DEFAULT_SESSION_COOKIE_NAME)
    }

    pub fn session(&self) -> Option<&str> {
        self.session.as_deref().filter(|session| !session.is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(
            self.timeout_milliseconds
                .unwrap_or(Config::DEFAULT_TIMEOUT_MILLISECONDS),
        )
    }

    pub fn default_provider(&self) -> &str {
        self.default_provider
            .as_deref()
            .unwrap_or(Config::DEFAULT_PROVIDER)
    }
}
