use async_trait::async_trait;
use url::Url;

use crate::error::ErrorKind;
use crate::profile::UserProfile;
use crate::Result;

pub mod http;

/// Backend operations the account view depends on.
#[async_trait]
pub trait Api: Send + Sync {
    /// Profile of the user owning the current session.
    async fn me(&self) -> Result<UserProfile>;
    /// Delete the account of the user owning the current session.
    async fn delete_me(&self) -> Result<()>;
}

pub(crate) mod endpoint {
    pub(crate) const ME: &[&str] = &["private", "api", "me"];
    pub(crate) const LOGOUT: &[&str] = &["logout"];
    pub(crate) const LOGIN: &str = "login";
}

/// Append path segments to base url.
/// Segments are percent encoded. `.` and `..` segments are dropped.
pub fn endpoint(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| ErrorKind::BaseUrl {
            url: base.to_string(),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// `/login/{identity_provider_id}`. Empty, `.` and `..` ids are rejected.
pub fn login_url(base: &Url, identity_provider_id: &str) -> Result<Url> {
    if matches!(identity_provider_id, "" | "." | "..") {
        return Err(ErrorKind::InvalidProvider {
            identity_provider_id: identity_provider_id.to_owned(),
        }
        .into());
    }
    endpoint(base, &[endpoint::LOGIN, identity_provider_id])
}

pub fn logout_url(base: &Url) -> Result<Url> {
    endpoint(base, endpoint::LOGOUT)
}

pub fn me_url(base: &Url) -> Result<Url> {
    endpoint(base, endpoint::ME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        let base = Url::parse("http://localhost:8080").unwrap();

        assert_eq!(
            me_url(&base).unwrap().as_str(),
            "http://localhost:8080/private/api/me"
        );
        assert_eq!(logout_url(&base).unwrap().path(), "/logout");
        assert_eq!(login_url(&base, "google").unwrap().path(), "/login/google");
    }

    #[test]
    fn endpoints_under_path_prefix() {
        let base = Url::parse("https://example.com/app/?next=1#top").unwrap();

        assert_eq!(
            me_url(&base).unwrap().as_str(),
            "https://example.com/app/private/api/me"
        );
    }

    #[test]
    fn provider_is_single_segment() {
        let base = Url::parse("http://localhost:8080/").unwrap();

        assert_eq!(
            login_url(&base, "../logout").unwrap().path(),
            "/login/..%2Flogout"
        );
    }

    #[test]
    fn reject_dot_segment_provider() {
        let base = Url::parse("http://localhost:8080/").unwrap();

        for provider in ["", ".", ".."] {
            let err = login_url(&base, provider).unwrap_err();
            assert!(
                matches!(err.kind(), ErrorKind::InvalidProvider { identity_provider_id } if identity_provider_id == provider)
            );
        }
    }
}
