//! Login form controller.
//!
//! - `controller`: form state and the reducer
//! - `validation`: field rules
//! - `effects`: what the reducer asks the outside world to do
//! - `session`: executes effects and binds submissions to the screen lifetime
//! - `submission`: the stub backend
//! - `task`: task ids and cancellation bookkeeping

mod controller;
mod credentials;
mod effects;
mod session;
mod submission;
mod task;
mod validation;

pub use controller::{FormError, FormState, LoginController, LoginEvent, Phase};
pub use credentials::Credentials;
pub use effects::{LoginEffect, Notice, RECOVERY_MESSAGE, RECOVERY_TITLE};
pub use session::{LoginHost, LoginSession};
pub use submission::{SubmissionError, SubmissionResult, stub_sign_in};
pub use task::{TaskCompleted, TaskId, TaskSeq, TaskState};
pub use validation::{ValidationError, is_valid_email, validate_credentials};
