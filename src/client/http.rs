use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::COOKIE;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use url::Url;

use crate::client::{me_url, Api};
use crate::common::{debug, ErrorKind};
use crate::profile::UserProfile;
use crate::Result;

/// Http client of the account backend.
/// Carries the session cookie on every request, like a browser with credentials included.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    cookie: Option<String>,
}

impl Client {
    const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);
    const POOL_MAX_IDLE_PER_HOST: usize = 10;

    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Client::POOL_IDLE_TIMEOUT)
            .pool_max_idle_per_host(Client::POOL_MAX_IDLE_PER_HOST)
            .build()?;

        Ok(Self {
            http,
            base_url,
            cookie: None,
        })
    }

    /// Attach session cookie `name=value` to subsequent requests.
    pub fn with_session(mut self, cookie_name: &str, session: &str) -> Self {
        self.cookie = Some(format!("{}={}", cookie_name, session));
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match self.cookie.as_deref() {
            Some(cookie) => builder.header(COOKIE, cookie),
            None => builder,
        }
    }

    async fn send(&self, method: Method, url: Url) -> Result<Response> {
        debug!(%method, %url, "request");

        let response = self.request(method.clone(), url.clone()).send().await?;
        let status = response.status();

        debug!(%method, %url, %status, "response");

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ErrorKind::Unauthenticated.into()),
            status if status.is_success() => Ok(response),
            status => Err(ErrorKind::Status {
                method,
                url,
                status,
            }
            .into()),
        }
    }
}

#[async_trait]
impl Api for Client {
    async fn me(&self) -> Result<UserProfile> {
        let response = self.send(Method::GET, me_url(&self.base_url)?).await?;
        let body = response.bytes().await?;

        Ok(serde_json::from_slice(&body)?)
    }

    async fn delete_me(&self) -> Result<()> {
        self.send(Method::DELETE, me_url(&self.base_url)?).await?;

        Ok(())
    }
}
