use clap::Args;

use crate::cli::{navigator, ClientOptions};
use crate::Result;

/// Start the login flow of an identity provider
#[derive(Args, Debug)]
pub struct LoginCommand {
    /// Identity provider (default google)
    #[arg(long, short = 'p', env = "ACCTVIEW_PROVIDER")]
    provider: Option<String>,
    /// Open the login url in the system browser
    #[arg(long)]
    open: bool,
}

impl LoginCommand {
    pub async fn run(self, options: ClientOptions) -> Result<()> {
        let LoginCommand { mut provider, open } = self;

        let mut initializer = options.initializer().await?;
        initializer.config.set_default_provider(&mut provider);

        let provider = initializer.config.default_provider().to_owned();
        let mut view = initializer.build_view(navigator(open))?;

        view.start_login(&provider)
    }
}
