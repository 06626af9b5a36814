#![allow(clippy::module_inception)]

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod navigator;
pub mod profile;
pub mod view;

pub use crate::error::Error;
pub type Result<T, E = crate::error::Error> = std::result::Result<T, E>;

pub use profile::{derive_google_linked, project_identities, Identity, IdentityRow, UserProfile};
pub use view::{AccountView, ViewState};

pub(crate) mod common {
    pub(crate) type Result<T, E = crate::error::Error> = std::result::Result<T, E>;

    pub(crate) type ErrorKind = crate::error::ErrorKind;

    pub use tracing::{debug, info, warn};
}
