//! CLI command handlers.

pub mod config;
pub mod forgot;
pub mod screen;
pub mod submit;

use smartmenu_core::login::{Credentials, LoginHost, Notice};

/// Login host for headless commands: notices go to stdout, accepted
/// credentials are kept for the caller.
#[derive(Debug, Default)]
pub struct ConsoleHost {
    delivered: Option<Credentials>,
}

impl ConsoleHost {
    pub fn take_delivered(&mut self) -> Option<Credentials> {
        self.delivered.take()
    }
}

impl LoginHost for ConsoleHost {
    fn on_login(&mut self, credentials: Credentials) {
        self.delivered = Some(credentials);
    }

    fn notify(&mut self, notice: Notice) {
        println!("{}: {}", notice.title, notice.message);
    }
}
