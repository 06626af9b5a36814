mod root;
pub use root::{parse, AcctviewCommand, ClientOptions, Command};

pub mod delete;
pub mod login;
pub mod logout;
pub mod show;

use crate::navigator::{BrowserNavigator, Navigator, TerminalNavigator};

/// Navigator for login and logout. `open` launches the system browser.
pub(crate) fn navigator(open: bool) -> Box<dyn Navigator> {
    if open {
        Box::new(BrowserNavigator::stdout())
    } else {
        Box::new(TerminalNavigator::stdout())
    }
}
