//! Interactive sign-in screen handler.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use smartmenu_core::config::Config;

pub fn run(config: &Config) -> Result<()> {
    let last_email: Rc<RefCell<Option<String>>> = Rc::default();
    let sink = Rc::clone(&last_email);

    smartmenu_tui::run_login_screen(
        config,
        Some(Box::new(move |credentials| {
            tracing::info!(email = credentials.email(), "login credentials received");
            *sink.borrow_mut() = Some(credentials.email().to_string());
        })),
    )
    .context("sign-in screen failed")?;

    if let Some(email) = last_email.borrow().as_deref() {
        println!("Signed in as {email}");
    }
    Ok(())
}
