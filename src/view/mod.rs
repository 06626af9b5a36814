//! Account view of the session owner.
//!
//! The view starts in [`ViewState::Loading`] and fetches the profile at most once.
//! A successful fetch moves it to [`ViewState::Authenticated`], any failure to
//! [`ViewState::Anonymous`]. Deleting the account moves it back to anonymous.
//! Login and logout leave the view through the injected [`Navigator`].

mod render;
mod state;
pub use state::ViewState;

use url::Url;

use crate::client::{login_url, logout_url, Api};
use crate::common::{debug, info};
use crate::navigator::Navigator;
use crate::Result;

pub struct AccountView<A, N> {
    api: A,
    navigator: N,
    base_url: Url,
    state: ViewState,
}

impl<A, N> AccountView<A, N>
where
    A: Api,
    N: Navigator,
{
    pub fn new(api: A, navigator: N, base_url: Url) -> Self {
        Self {
            api,
            navigator,
            base_url,
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Fetch the session owner's profile.
    /// On failure the view becomes anonymous and the cause is returned to the caller.
    /// Only the first call issues a request.
    pub async fn load_profile(&mut self) -> Result<()> {
        if !self.state.is_loading() {
            debug!("profile already loaded");
            return Ok(());
        }

        match self.api.me().await {
            Ok(profile) => {
                debug!(
                    email = %profile.email,
                    identities = profile.identities.len(),
                    "authenticated"
                );
                self.state = ViewState::Authenticated(profile);
                Ok(())
            }
            Err(err) => {
                debug!("anonymous");
                self.state = ViewState::Anonymous;
                Err(err)
            }
        }
    }

    pub fn start_login(&mut self, identity_provider_id: &str) -> Result<()> {
        let url = login_url(&self.base_url, identity_provider_id)?;
        info!(%url, "login");
        self.navigator.navigate(&url)
    }

    pub fn start_logout(&mut self) -> Result<()> {
        let url = logout_url(&self.base_url)?;
        info!(%url, "logout");
        self.navigator.navigate(&url)
    }

    /// Delete the account. The view becomes anonymous only if the backend accepted the deletion.
    pub async fn delete_account(&mut self) -> Result<()> {
        self.api.delete_me().await?;

        info!("account deleted");
        self.state = ViewState::Anonymous;
        Ok(())
    }
}
