//! Forgot-password command handler.

use smartmenu_core::config::Config;
use smartmenu_core::login::LoginSession;

use super::ConsoleHost;

pub fn run(config: &Config) {
    let mut session = LoginSession::new(config.submit_delay(), ConsoleHost::default());
    session.request_password_recovery();
}
