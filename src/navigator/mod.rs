//! Leaving the account view for a backend driven redirect flow (login, logout).

use std::io::{self, Write};

use url::Url;

use crate::common::{debug, warn};
use crate::Result;

pub trait Navigator {
    /// Hand `url` over to whoever follows it. The view is done after this.
    fn navigate(&mut self, url: &Url) -> Result<()>;
}

impl<N: Navigator + ?Sized> Navigator for Box<N> {
    fn navigate(&mut self, url: &Url) -> Result<()> {
        (**self).navigate(url)
    }
}

/// Print the url for the user to follow.
#[derive(Debug)]
pub struct TerminalNavigator<W> {
    out: W,
}

impl TerminalNavigator<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalNavigator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Navigator for TerminalNavigator<W> {
    fn navigate(&mut self, url: &Url) -> Result<()> {
        writeln!(self.out, "{}", url)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Open the url in the system browser.
/// Falls back to printing the url when no browser can be launched.
#[derive(Debug)]
pub struct BrowserNavigator<W> {
    fallback: TerminalNavigator<W>,
}

impl BrowserNavigator<io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            fallback: TerminalNavigator::stdout(),
        }
    }
}

impl<W: Write> Navigator for BrowserNavigator<W> {
    fn navigate(&mut self, url: &Url) -> Result<()> {
        // Detached launch, the browser process is not waited on.
        match open::that_detached(url.as_str()) {
            Ok(()) => {
                debug!(%url, "opened in browser");
                Ok(())
            }
            Err(err) => {
                warn!(%url, "open browser failed. {err}");
                self.fallback.navigate(url)
            }
        }
    }
}
