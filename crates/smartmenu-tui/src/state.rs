//! Screen state composition.
//!
//! ```text
//! AppState
//! ├── session: LoginSession<ScreenHost>   (form controller + effect runtime)
//! │   └── host: ScreenHost                (on_login callback, open notice)
//! ├── focus: Focus                        (which control receives keys)
//! ├── spinner_frame                       (loading animation)
//! └── theme, brand_name                   (from Config, read-only)
//! ```
//!
//! Focus and the notice dialog are presentation concerns and never reach
//! the controller.

use smartmenu_core::config::Config;
use smartmenu_core::login::{Credentials, FormState, LoginHost, LoginSession, Notice};

use crate::theme::Theme;

/// Host callback invoked with accepted credentials.
pub type OnLogin = Box<dyn FnMut(Credentials)>;

/// Bridges controller effects to the screen.
pub struct ScreenHost {
    on_login: Option<OnLogin>,
    notice: Option<Notice>,
}

impl ScreenHost {
    pub fn new(on_login: Option<OnLogin>) -> Self {
        Self {
            on_login,
            notice: None,
        }
    }
}

impl LoginHost for ScreenHost {
    fn on_login(&mut self, credentials: Credentials) {
        if let Some(callback) = self.on_login.as_mut() {
            callback(credentials);
        }
    }

    fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }
}

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Email,
    Password,
    ShowPassword,
    Submit,
    ForgotPassword,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Email,
        Focus::Password,
        Focus::ShowPassword,
        Focus::Submit,
        Focus::ForgotPassword,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_text_field(self) -> bool {
        matches!(self, Focus::Email | Focus::Password)
    }
}

/// Sign-in screen state.
pub struct AppState {
    /// Form controller and its effect runtime.
    pub session: LoginSession<ScreenHost>,
    /// Control receiving keyboard input.
    pub focus: Focus,
    /// Flag indicating the screen should close.
    pub should_quit: bool,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
    /// Header text.
    pub brand_name: String,
    /// Resolved palette.
    pub theme: Theme,
}

impl AppState {
    pub fn new(config: &Config, on_login: Option<OnLogin>) -> Self {
        Self {
            session: LoginSession::new(config.submit_delay(), ScreenHost::new(on_login)),
            focus: Focus::default(),
            should_quit: false,
            spinner_frame: 0,
            brand_name: config.brand_name.clone(),
            theme: Theme::from(&config.theme),
        }
    }

    pub fn form(&self) -> &FormState {
        self.session.form()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.session.host().notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.session.host_mut().notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_both_ways() {
        let mut focus = Focus::Email;
        for _ in 0..Focus::ORDER.len() {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Email);
        assert_eq!(Focus::Email.prev(), Focus::ForgotPassword);
        assert_eq!(Focus::Password.next(), Focus::ShowPassword);
    }
}
