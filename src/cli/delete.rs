use clap::Args;

use crate::cli::ClientOptions;
use crate::navigator::TerminalNavigator;
use crate::Result;

/// Delete the account of the session owner
#[derive(Args, Debug)]
pub struct DeleteCommand {}

impl DeleteCommand {
    pub async fn run(self, options: ClientOptions) -> Result<()> {
        let initializer = options.initializer().await?;
        let mut view = initializer.build_view(TerminalNavigator::stdout())?;

        view.delete_account().await?;

        println!("OK");

        Ok(())
    }
}
