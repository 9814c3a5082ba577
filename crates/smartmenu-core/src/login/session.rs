//! Login session - owns the controller and executes its effects.
//!
//! This is the effect boundary for the login form: the controller stays
//! pure and produces effects; the session spawns the submission task,
//! calls the host, and cancels tokens.
//!
//! ## Inbox Pattern
//!
//! Submission tasks send their `LoginEvent::SubmissionCompleted` into an
//! unbounded inbox. Callers drain it either without blocking (`drain_inbox`,
//! once per frame in the TUI) or by awaiting the next completion
//! (`wait_for_completion`, headless mode). Each event is reduced and its
//! effects executed before the next one is read, so the phase change and
//! the `on_login` call are never observed apart.
//!
//! Dropping the session tears the controller down and cancels any attempt
//! still in flight.

use std::time::Duration;

use tokio::sync::mpsc;

use super::controller::{FormState, LoginController, LoginEvent, Phase};
use super::credentials::Credentials;
use super::effects::{LoginEffect, Notice};
use super::submission::stub_sign_in;
use super::task::TaskCompleted;

/// The two outward effects of the login form.
pub trait LoginHost {
    /// Called once per accepted sign-in attempt.
    ///
    /// The default does nothing, for hosts that supply no callback.
    fn on_login(&mut self, credentials: Credentials) {
        let _ = credentials;
    }

    /// Surfaces a notice through the platform's alert facility.
    fn notify(&mut self, notice: Notice);
}

type InboxSender = mpsc::UnboundedSender<LoginEvent>;
type InboxReceiver = mpsc::UnboundedReceiver<LoginEvent>;

/// Controller plus effect runtime for one screen lifetime.
///
/// Must be used inside a tokio runtime: submissions are spawned tasks.
pub struct LoginSession<H: LoginHost> {
    controller: LoginController,
    host: H,
    inbox_tx: InboxSender,
    inbox_rx: InboxReceiver,
}

impl<H: LoginHost> LoginSession<H> {
    pub fn new(submit_delay: Duration, host: H) -> Self {
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        Self {
            controller: LoginController::new(submit_delay),
            host,
            inbox_tx,
            inbox_rx,
        }
    }

    pub fn controller(&self) -> &LoginController {
        &self.controller
    }

    pub fn form(&self) -> &FormState {
        self.controller.form()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.dispatch(LoginEvent::EmailChanged(value.into()));
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.dispatch(LoginEvent::PasswordChanged(value.into()));
    }

    pub fn toggle_show_password(&mut self) {
        self.dispatch(LoginEvent::ToggleShowPassword);
    }

    pub fn submit(&mut self) {
        self.dispatch(LoginEvent::Submit);
    }

    pub fn request_password_recovery(&mut self) {
        self.dispatch(LoginEvent::ForgotPassword);
    }

    /// Tears the controller down. Idempotent.
    pub fn teardown(&mut self) {
        self.dispatch(LoginEvent::Teardown);
    }

    /// Reduces one event and executes the resulting effects.
    pub fn dispatch(&mut self, event: LoginEvent) {
        let effects = self.controller.update(event);
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Applies every completion already waiting in the inbox.
    ///
    /// Returns how many events were applied.
    pub fn drain_inbox(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.inbox_rx.try_recv() {
            self.dispatch(event);
            applied += 1;
        }
        applied
    }

    /// Waits for the in-flight attempt to finish and applies it.
    ///
    /// Returns `false` immediately when nothing is in flight.
    pub async fn wait_for_completion(&mut self) -> bool {
        if self.controller.phase() != Phase::Submitting {
            return false;
        }
        // The session holds a sender, so `recv` cannot observe a closed channel.
        if let Some(event) = self.inbox_rx.recv().await {
            self.dispatch(event);
        }
        true
    }

    fn execute_effect(&mut self, effect: LoginEffect) {
        match effect {
            LoginEffect::SpawnSubmission {
                task,
                cancel,
                credentials,
                delay,
            } => {
                let tx = self.inbox_tx.clone();
                tokio::spawn(async move {
                    let Some(result) = stub_sign_in(credentials, delay, cancel).await else {
                        return;
                    };
                    let completed = TaskCompleted { id: task, result };
                    // Receiver is gone once the session is dropped.
                    let _ = tx.send(LoginEvent::SubmissionCompleted(completed));
                });
            }
            LoginEffect::DeliverCredentials(credentials) => {
                self.host.on_login(credentials);
            }
            LoginEffect::Notify(notice) => {
                self.host.notify(notice);
            }
            LoginEffect::CancelTask { token } => {
                token.cancel();
            }
        }
    }
}

impl<H: LoginHost> Drop for LoginSession<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}
