use clap::Args;

use crate::cli::{navigator, ClientOptions};
use crate::Result;

/// End the session
#[derive(Args, Debug)]
pub struct LogoutCommand {
    /// Open the logout url in the system browser
    #[arg(long)]
    open: bool,
}

impl LogoutCommand {
    pub async fn run(self, options: ClientOptions) -> Result<()> {
        let initializer = options.initializer().await?;
        let mut view = initializer.build_view(navigator(self.open))?;

        view.start_logout()
    }
}
