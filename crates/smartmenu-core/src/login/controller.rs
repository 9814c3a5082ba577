//! Login form reducer.
//!
//! All form state mutations happen here. The session calls
//! `LoginController::update(event)` and executes the returned effects.
//!
//! ## Phases
//!
//! ```text
//! Idle ──submit(valid)──▶ Submitting ──completed──▶ Idle (DeliverCredentials)
//!  ▲  └─submit(invalid)─┐      │
//!  └────── error ───────┘      └─submit─▶ ignored
//! ```
//!
//! Fields stay editable while `Submitting`. The attempt in flight keeps the
//! snapshot taken when it started, later edits only affect the next attempt.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::credentials::Credentials;
use super::effects::{LoginEffect, Notice};
use super::submission::{SubmissionError, SubmissionResult};
use super::task::{TaskCompleted, TaskSeq, TaskState};
use super::validation::{ValidationError, validate_credentials};

/// Submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

/// Last failure shown under the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// Inputs to the reducer: user gestures forwarded by the presentation layer,
/// plus task completions and teardown from the session.
#[derive(Debug)]
pub enum LoginEvent {
    EmailChanged(String),
    PasswordChanged(String),
    ToggleShowPassword,
    Submit,
    ForgotPassword,
    SubmissionCompleted(TaskCompleted<SubmissionResult>),
    Teardown,
}

/// Everything the presentation layer reads to draw the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub phase: Phase,
    pub error: Option<FormError>,
}

/// Owns the form state for one screen lifetime.
#[derive(Debug)]
pub struct LoginController {
    form: FormState,
    submit_delay: Duration,
    task_seq: TaskSeq,
    submission: TaskState,
    torn_down: bool,
}

impl LoginController {
    pub fn new(submit_delay: Duration) -> Self {
        Self {
            form: FormState::default(),
            submit_delay,
            task_seq: TaskSeq::default(),
            submission: TaskState::default(),
            torn_down: false,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn phase(&self) -> Phase {
        self.form.phase
    }

    pub fn error(&self) -> Option<&FormError> {
        self.form.error.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.form.phase == Phase::Submitting
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// The reducer.
    ///
    /// Mutates form state and returns effects for the session to execute.
    /// After `Teardown` every event is ignored.
    pub fn update(&mut self, event: LoginEvent) -> Vec<LoginEffect> {
        if self.torn_down {
            tracing::trace!(?event, "event after teardown ignored");
            return vec![];
        }

        match event {
            LoginEvent::EmailChanged(value) => {
                self.form.email = value;
                vec![]
            }
            LoginEvent::PasswordChanged(value) => {
                self.form.password = value;
                vec![]
            }
            LoginEvent::ToggleShowPassword => {
                self.form.show_password = !self.form.show_password;
                vec![]
            }
            LoginEvent::Submit => self.submit(),
            LoginEvent::ForgotPassword => {
                tracing::info!("password recovery requested");
                vec![LoginEffect::Notify(Notice::password_recovery())]
            }
            LoginEvent::SubmissionCompleted(completed) => self.complete(completed),
            LoginEvent::Teardown => self.teardown(),
        }
    }

    fn submit(&mut self) -> Vec<LoginEffect> {
        if self.is_submitting() {
            tracing::debug!("submit ignored: attempt already in flight");
            return vec![];
        }

        self.form.error = None;
        if let Err(err) = validate_credentials(&self.form.email, &self.form.password) {
            tracing::debug!(error = %err, "validation failed");
            self.form.error = Some(err.into());
            return vec![];
        }

        let task = self.task_seq.next_id();
        let cancel = CancellationToken::new();
        self.submission.on_started(task, cancel.clone());
        self.form.phase = Phase::Submitting;
        tracing::info!(task = task.0, email = %self.form.email, "sign-in attempt started");

        vec![LoginEffect::SpawnSubmission {
            task,
            cancel,
            credentials: Credentials::new(self.form.email.clone(), self.form.password.clone()),
            delay: self.submit_delay,
        }]
    }

    fn complete(&mut self, completed: TaskCompleted<SubmissionResult>) -> Vec<LoginEffect> {
        if !self.submission.finish_if_active(completed.id) {
            tracing::debug!(task = completed.id.0, "stale completion ignored");
            return vec![];
        }

        self.form.phase = Phase::Idle;
        match completed.result {
            Ok(credentials) => {
                tracing::info!(task = completed.id.0, email = credentials.email(), "sign-in accepted");
                vec![LoginEffect::DeliverCredentials(credentials)]
            }
            Err(err) => {
                tracing::warn!(task = completed.id.0, error = %err, "sign-in failed");
                self.form.error = Some(err.into());
                vec![]
            }
        }
    }

    fn teardown(&mut self) -> Vec<LoginEffect> {
        self.torn_down = true;
        self.form.phase = Phase::Idle;
        match self.submission.take_cancel() {
            Some(token) => {
                tracing::debug!("teardown with attempt in flight, cancelling");
                vec![LoginEffect::CancelTask { token }]
            }
            None => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::login::task::TaskId;

    const DELAY: Duration = Duration::from_millis(900);

    fn controller_with(email: &str, password: &str) -> LoginController {
        let mut c = LoginController::new(DELAY);
        c.update(LoginEvent::EmailChanged(email.to_string()));
        c.update(LoginEvent::PasswordChanged(password.to_string()));
        c
    }

    fn spawned_task(effects: &[LoginEffect]) -> TaskId {
        match effects {
            [LoginEffect::SpawnSubmission { task, .. }] => *task,
            other => panic!("expected a single SpawnSubmission, got {other:?}"),
        }
    }

    #[test]
    fn starts_empty_and_idle() {
        let c = LoginController::new(DELAY);
        assert_eq!(c.form(), &FormState::default());
        assert_eq!(c.phase(), Phase::Idle);
        assert!(!c.form().show_password);
    }

    #[test]
    fn empty_fields_report_empty_field() {
        for (email, password) in [("", ""), ("a@b.com", ""), ("", "x"), ("bad", "")] {
            let mut c = controller_with(email, password);
            let effects = c.update(LoginEvent::Submit);
            assert!(effects.is_empty());
            assert_eq!(
                c.error(),
                Some(&FormError::Validation(ValidationError::EmptyField))
            );
            assert_eq!(c.phase(), Phase::Idle);
        }
    }

    #[test]
    fn malformed_email_reports_invalid_format() {
        let mut c = controller_with("bad-email", "x");
        let effects = c.update(LoginEvent::Submit);

        assert!(effects.is_empty());
        assert_eq!(c.phase(), Phase::Idle);
        let err = c.error().unwrap();
        assert_eq!(err, &FormError::Validation(ValidationError::InvalidEmailFormat));
        assert_eq!(err.to_string(), "enter a valid email");
    }

    #[test]
    fn valid_submit_enters_submitting_with_snapshot() {
        let mut c = controller_with("a@b.com", "x");
        let effects = c.update(LoginEvent::Submit);

        assert_eq!(c.phase(), Phase::Submitting);
        assert!(c.error().is_none());
        match effects.as_slice() {
            [
                LoginEffect::SpawnSubmission {
                    credentials, delay, ..
                },
            ] => {
                assert_eq!(credentials, &Credentials::new("a@b.com", "x"));
                assert_eq!(*delay, DELAY);
            }
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn submit_clears_previous_error_before_validating() {
        let mut c = controller_with("bad-email", "x");
        c.update(LoginEvent::Submit);
        assert!(c.error().is_some());

        // Editing does not clear the error.
        c.update(LoginEvent::EmailChanged("a@b.com".to_string()));
        assert!(c.error().is_some());

        c.update(LoginEvent::Submit);
        assert!(c.error().is_none());
        assert_eq!(c.phase(), Phase::Submitting);
    }

    #[test]
    fn resubmit_while_submitting_is_ignored() {
        let mut c = controller_with("a@b.com", "x");
        spawned_task(&c.update(LoginEvent::Submit));
        let before = c.form().clone();

        let effects = c.update(LoginEvent::Submit);

        assert!(effects.is_empty());
        assert_eq!(c.form(), &before);
    }

    #[test]
    fn resubmit_while_submitting_ignores_invalid_fields_too() {
        let mut c = controller_with("a@b.com", "x");
        c.update(LoginEvent::Submit);
        c.update(LoginEvent::PasswordChanged(String::new()));

        assert!(c.update(LoginEvent::Submit).is_empty());
        assert!(c.error().is_none());
        assert_eq!(c.phase(), Phase::Submitting);
    }

    #[test]
    fn completion_returns_to_idle_and_delivers() {
        let mut c = controller_with("a@b.com", "x");
        let task = spawned_task(&c.update(LoginEvent::Submit));

        let effects = c.update(LoginEvent::SubmissionCompleted(TaskCompleted {
            id: task,
            result: Ok(Credentials::new("a@b.com", "x")),
        }));

        assert_eq!(c.phase(), Phase::Idle);
        assert!(c.error().is_none());
        match effects.as_slice() {
            [LoginEffect::DeliverCredentials(creds)] => {
                assert_eq!(creds, &Credentials::new("a@b.com", "x"));
            }
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn completion_failure_sets_submission_error() {
        let mut c = controller_with("a@b.com", "x");
        let task = spawned_task(&c.update(LoginEvent::Submit));

        let effects = c.update(LoginEvent::SubmissionCompleted(TaskCompleted {
            id: task,
            result: Err(SubmissionError::Rejected("bad password".to_string())),
        }));

        assert!(effects.is_empty());
        assert_eq!(c.phase(), Phase::Idle);
        assert!(matches!(c.error(), Some(FormError::Submission(_))));
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut c = controller_with("a@b.com", "x");
        let task = spawned_task(&c.update(LoginEvent::Submit));

        let effects = c.update(LoginEvent::SubmissionCompleted(TaskCompleted {
            id: TaskId(task.0 + 1),
            result: Ok(Credentials::new("a@b.com", "x")),
        }));

        assert!(effects.is_empty());
        assert_eq!(c.phase(), Phase::Submitting);
    }

    #[test]
    fn toggle_show_password_is_involutive() {
        let mut c = LoginController::new(DELAY);
        c.update(LoginEvent::ToggleShowPassword);
        assert!(c.form().show_password);
        c.update(LoginEvent::ToggleShowPassword);
        assert!(!c.form().show_password);
    }

    #[test]
    fn forgot_password_notifies_without_touching_state() {
        let mut c = controller_with("bad-email", "x");
        c.update(LoginEvent::Submit);
        let before = c.form().clone();

        let effects = c.update(LoginEvent::ForgotPassword);

        assert_eq!(c.form(), &before);
        match effects.as_slice() {
            [LoginEffect::Notify(notice)] => {
                assert_eq!(notice.message, "a recovery link has been sent");
            }
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn teardown_cancels_in_flight_attempt() {
        let mut c = controller_with("a@b.com", "x");
        let task = spawned_task(&c.update(LoginEvent::Submit));

        let effects = c.update(LoginEvent::Teardown);
        assert!(c.is_torn_down());
        assert!(matches!(effects.as_slice(), [LoginEffect::CancelTask { .. }]));

        // A completion racing the cancel must not deliver anything.
        let late = c.update(LoginEvent::SubmissionCompleted(TaskCompleted {
            id: task,
            result: Ok(Credentials::new("a@b.com", "x")),
        }));
        assert!(late.is_empty());
        assert!(c.update(LoginEvent::ForgotPassword).is_empty());
    }

    #[test]
    fn teardown_when_idle_has_no_effects() {
        let mut c = LoginController::new(DELAY);
        assert!(c.update(LoginEvent::Teardown).is_empty());
        assert!(c.is_torn_down());
    }
}
