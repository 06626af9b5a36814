use std::path::Path;

use tokio::fs;

use crate::client::http::Client;
use crate::common::{debug, Result};
use crate::config::Config;
use crate::navigator::Navigator;
use crate::view::AccountView;

#[derive(Debug, Default)]
pub struct Initializer {
    pub config: Config,
}

impl Initializer {
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    pub async fn load_config_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "load config");

        let raw = fs::read_to_string(path).await?;
        let config = serde_yaml::from_str::<Config>(&raw)?;

        Ok(Self { config })
    }

    pub fn build_client(&self) -> Result<Client> {
        let client = Client::new(self.config.base_url()?, self.config.timeout())?;

        Ok(match self.config.session() {
            Some(session) => client.with_session(self.config.session_cookie_name(), session),
            None => client,
        })
    }

    pub fn build_view<N: Navigator>(&self, navigator: N) -> Result<AccountView<Client, N>> {
        let client = self.build_client()?;
        let base_url = client.base_url().clone();

        Ok(AccountView::new(client, navigator, base_url))
    }
}
