//! Headless sign-in command handler.
//!
//! Drives the same controller as the interactive screen: one submit, then
//! wait for the stub backend.

use anyhow::Result;
use smartmenu_core::config::Config;
use smartmenu_core::login::LoginSession;

use super::ConsoleHost;

pub async fn run(config: &Config, email: String, password: String) -> Result<()> {
    let mut session = LoginSession::new(config.submit_delay(), ConsoleHost::default());
    session.set_email(email);
    session.set_password(password);
    session.submit();

    session.wait_for_completion().await;

    if let Some(err) = &session.form().error {
        anyhow::bail!("{err}");
    }
    let Some(credentials) = session.host_mut().take_delivered() else {
        anyhow::bail!("sign-in did not complete");
    };

    // Same shape as the host app's log line; the password is never printed.
    println!("Login credentials: {}", credentials.email());
    Ok(())
}
