use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::cli::{delete, login, logout, show};
use crate::common::debug;
use crate::config::{Config, Initializer};
use crate::Result;

/// Acctview command
#[derive(Parser, Debug)]
#[command(version, propagate_version = true, subcommand_required = true)]
pub struct AcctviewCommand {
    /// Client options
    #[command(flatten)]
    pub client: ClientOptions,
    /// Subcommand
    #[command(subcommand)]
    pub command: Command,
}

/// Client options
#[derive(Args, Debug)]
pub struct ClientOptions {
    /// Backend base url (default http://localhost:8080)
    #[arg(long, env = "ACCTVIEW_BASE_URL", global = true)]
    pub base_url: Option<String>,
    /// Session id issued by the backend after login
    #[arg(long, env = "ACCTVIEW_SESSION", hide_env_values = true, global = true)]
    pub session: Option<String>,
    /// Session cookie name (default session_id)
    #[arg(long, env = "ACCTVIEW_SESSION_COOKIE_NAME", global = true)]
    pub session_cookie_name: Option<String>,
    /// Backend request timeout
    #[arg(long, env = "ACCTVIEW_TIMEOUT_MILLISECONDS", global = true)]
    pub timeout_milliseconds: Option<u64>,
    /// Configuration file path
    #[arg(long, short = 'C', env = "ACCTVIEW_CONFIG_PATH", global = true)]
    pub config: Option<PathBuf>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show
    Show(show::ShowCommand),
    /// Login
    Login(login::LoginCommand),
    /// Logout
    Logout(logout::LogoutCommand),
    /// Delete
    Delete(delete::DeleteCommand),
}

/// Parse command line args
pub fn parse() -> AcctviewCommand {
    AcctviewCommand::parse()
}

impl AcctviewCommand {
    pub async fn run(self) -> Result<()> {
        let AcctviewCommand { client, command } = self;

        match command {
            Command::Show(show) => show.run(client).await,
            Command::Login(login) => login.run(client).await,
            Command::Logout(logout) => logout.run(client).await,
            Command::Delete(delete) => delete.run(client).await,
        }
    }
}

impl ClientOptions {
    /// Load the config file if any, then apply command line values over it.
    pub async fn initializer(self) -> Result<Initializer> {
        let ClientOptions {
            mut base_url,
            mut session,
            mut session_cookie_name,
            timeout_milliseconds,
            config,
        } = self;

        let mut initializer = match config {
            Some(path) => Initializer::load_config_file(path).await?,
            None => Initializer::default(),
        };

        let mut overrides = {
            let mut config = Config::default();

            config.set_base_url(&mut base_url);
            config.set_session(&mut session);
            config.set_session_cookie_name(&mut session_cookie_name);
            config.set_timeout_milliseconds(timeout_milliseconds);
            config
        };

        initializer.config.override_merge(&mut overrides);

        debug!(
            base_url = ?initializer.config.base_url().ok().map(|url| url.to_string()),
            session = initializer.config.session().is_some(),
            "client options"
        );

        Ok(initializer)
    }
}
