use std::io;

use clap::Args;

use crate::cli::ClientOptions;
use crate::common::{info, warn};
use crate::navigator::TerminalNavigator;
use crate::Result;

/// Show the account of the session owner
#[derive(Args, Debug)]
pub struct ShowCommand {
    /// Print the profile as json
    #[arg(long)]
    raw: bool,
}

impl ShowCommand {
    pub async fn run(self, options: ClientOptions) -> Result<()> {
        let initializer = options.initializer().await?;
        let mut view = initializer.build_view(TerminalNavigator::stdout())?;

        // Any failure leaves the view anonymous.
        if let Err(err) = view.load_profile().await {
            if err.is_unauthenticated() {
                info!("no valid session");
            } else {
                warn!("load profile failed. {err}");
            }
        }

        let mut out = io::stdout().lock();
        if self.raw {
            view.render_raw(&mut out)
        } else {
            view.render(&mut out)
        }
    }
}
