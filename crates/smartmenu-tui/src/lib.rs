//! Full-screen sign-in form for SmartMenu.

pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
pub use runtime::TuiRuntime;
use smartmenu_core::config::Config;
pub use state::OnLogin;

/// Shows the sign-in screen until the user quits.
///
/// `on_login` receives every accepted set of credentials; the screen stays
/// open afterwards.
pub fn run_login_screen(config: &Config, on_login: Option<OnLogin>) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The sign-in screen requires a terminal.\n\
             Use `smartmenu submit --email ...` for non-interactive runs."
        );
    }

    let mut runtime = TuiRuntime::new(config, on_login)?;
    runtime.run()
}
