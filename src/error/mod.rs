use std::error;
use std::fmt;
use std::io;

use backtrace::Backtrace;
use reqwest::{Method, StatusCode};
use url::Url;

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    backtrace: Option<Backtrace>,
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error(transparent)]
    Io(io::Error),
    // Transport failure: connect, timeout, body read.
    #[error("http request failed. {0}")]
    Http(reqwest::Error),
    #[error("{method} {url} responded {status}")]
    Status {
        method: Method,
        url: Url,
        status: StatusCode,
    },
    // 401 or 403 from the backend, no valid session.
    #[error("unauthenticated")]
    Unauthenticated,
    #[error("response decode error. {0}")]
    Decode(serde_json::Error),
    #[error("identity {identity_provider_id}/{external_id} has no id token")]
    MissingIdToken {
        identity_provider_id: String,
        external_id: String,
    },
    #[error("invalid url. {0}")]
    Url(url::ParseError),
    #[error("invalid identity provider id {identity_provider_id:?}")]
    InvalidProvider { identity_provider_id: String },
    #[error("base url must be an absolute http(s) url. {url}")]
    BaseUrl { url: String },
    #[error("config error. {0}")]
    Config(serde_yaml::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::with_backtrace(kind)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::from(ErrorKind::Io(err))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::from(ErrorKind::Http(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::from(ErrorKind::Decode(err))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::from(ErrorKind::Url(err))
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::from(ErrorKind::Config(err))
    }
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn backtrace(&self) -> Option<&Backtrace> {
        self.backtrace.as_ref()
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self.kind(), ErrorKind::Unauthenticated)
    }

    /// Http status the backend answered with, if the request got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self.kind() {
            ErrorKind::Status { status, .. } => Some(*status),
            ErrorKind::Http(err) => err.status(),
            _ => None,
        }
    }

    fn with_backtrace(kind: ErrorKind) -> Self {
        Self {
            kind,
            backtrace: Some(Backtrace::new()),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        error::Error::source(&self.kind)
    }
}
