//! Waitlist submission state machine
//!
//! One [`WaitlistSubmission`] backs one form instance:
//!
//! ```text
//! Editing ──submit──▶ Submitting ──ok──▶ Succeeded (terminal)
//!    ▲  │                  │
//!    │  └─rejected─┐       └─err──▶ Failed
//!    │             ▼                  │
//!    └────edit──── Failed ◀───────────┘
//! ```
//!
//! The state lives behind a [`SubmissionStore`] so the same [`submit`] flow
//! drives a reactive signal in the browser and a plain `RefCell` in tests.

use std::cell::RefCell;

use super::email::normalize_email;
use super::submitter::{SubmitError, WaitlistSubmitter};

/// Lifecycle of a waitlist submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaitlistStatus {
    /// The user is typing; nothing is outstanding
    #[default]
    Editing,
    /// A submission call is in flight
    Submitting,
    /// The email was registered; terminal for this form instance
    Succeeded,
    /// Validation or submission failed; an error is shown
    Failed,
}

/// Errors a waitlist form can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WaitlistError {
    #[error("Email is required")]
    MissingEmail,

    #[error("Please enter a valid email address")]
    InvalidFormat,

    #[error("Something went wrong. Please try again.")]
    SubmissionFailed,
}

impl WaitlistError {
    /// Stable machine-readable code, used by the API
    pub fn code(&self) -> &'static str {
        match self {
            WaitlistError::MissingEmail => "MISSING_EMAIL",
            WaitlistError::InvalidFormat => "INVALID_EMAIL",
            WaitlistError::SubmissionFailed => "SUBMISSION_FAILED",
        }
    }
}

/// Result of [`WaitlistSubmission::begin_submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStart {
    /// Validation passed; the trimmed email must be sent
    Started(String),
    /// Validation failed; no call should be made
    Rejected(WaitlistError),
    /// A submission is already in flight or has succeeded
    Ignored,
}

/// Final result of one [`submit`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded,
    Failed(WaitlistError),
    /// The call was a no-op (already submitting, already succeeded, or the
    /// form is gone)
    Ignored,
}

/// Transient state of one waitlist form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistSubmission {
    email: String,
    status: WaitlistStatus,
    error: Option<WaitlistError>,
}

impl WaitlistSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of the email field
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> WaitlistStatus {
        self.status
    }

    pub fn error(&self) -> Option<WaitlistError> {
        self.error
    }

    /// Human-readable error for display, if any
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }

    pub fn is_submitting(&self) -> bool {
        self.status == WaitlistStatus::Submitting
    }

    pub fn is_succeeded(&self) -> bool {
        self.status == WaitlistStatus::Succeeded
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        !matches!(
            self.status,
            WaitlistStatus::Submitting | WaitlistStatus::Succeeded
        )
    }

    /// Apply a keystroke to the email field.
    ///
    /// Clears any shown error and leaves `Failed`. An in-flight submission is
    /// not affected. Returns `false` once the submission has succeeded, since
    /// the field is gone by then.
    pub fn edit(&mut self, value: impl Into<String>) -> bool {
        if self.is_succeeded() {
            return false;
        }

        self.email = value.into();
        self.clear_error();
        true
    }

    /// Dismiss the inline error without changing the field.
    pub fn dismiss_error(&mut self) {
        self.clear_error();
    }

    fn clear_error(&mut self) {
        self.error = None;
        if self.status == WaitlistStatus::Failed {
            self.status = WaitlistStatus::Editing;
        }
    }

    /// Validate the field and, when it passes, enter `Submitting`.
    pub fn begin_submit(&mut self) -> SubmitStart {
        if !self.can_submit() {
            return SubmitStart::Ignored;
        }

        match normalize_email(&self.email) {
            Ok(email) => {
                let email = email.to_string();
                self.status = WaitlistStatus::Submitting;
                self.error = None;
                SubmitStart::Started(email)
            }
            Err(err) => {
                self.fail(err);
                SubmitStart::Rejected(err)
            }
        }
    }

    /// Resolve an in-flight submission.
    ///
    /// Has no effect unless the status is `Submitting`, so a late result can
    /// never overwrite a terminal state. The typed email is kept on failure.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) -> WaitlistStatus {
        if self.status != WaitlistStatus::Submitting {
            return self.status;
        }

        match result {
            Ok(()) => {
                self.status = WaitlistStatus::Succeeded;
                self.error = None;
            }
            Err(_) => self.fail(WaitlistError::SubmissionFailed),
        }
        self.status
    }

    fn fail(&mut self, err: WaitlistError) {
        self.status = WaitlistStatus::Failed;
        self.error = Some(err);
    }
}

/// Shared, interior-mutable home of a [`WaitlistSubmission`]
pub trait SubmissionStore {
    /// Mutate the submission. Returns `None` if the store is no longer
    /// available (e.g. the owning component was disposed).
    fn with_mut<R>(&self, f: impl FnOnce(&mut WaitlistSubmission) -> R) -> Option<R>;
}

impl SubmissionStore for RefCell<WaitlistSubmission> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut WaitlistSubmission) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Run one submission attempt for the email currently held in `store`.
///
/// Validation failures return immediately without calling `submitter`. A
/// second call while the first is in flight returns
/// [`SubmissionOutcome::Ignored`]. The store is never borrowed across the
/// await, so edits can happen while the call is outstanding.
pub async fn submit<St, S>(store: &St, submitter: &S) -> SubmissionOutcome
where
    St: SubmissionStore,
    S: WaitlistSubmitter,
{
    let email = match store.with_mut(|s| s.begin_submit()) {
        Some(SubmitStart::Started(email)) => email,
        Some(SubmitStart::Rejected(err)) => return SubmissionOutcome::Failed(err),
        Some(SubmitStart::Ignored) | None => return SubmissionOutcome::Ignored,
    };

    let result = submitter.submit(&email).await;
    if let Err(err) = &result {
        leptos::logging::warn!("waitlist submission failed: {err}");
    }

    match store.with_mut(|s| s.finish_submit(result)) {
        Some(WaitlistStatus::Succeeded) => SubmissionOutcome::Succeeded,
        Some(WaitlistStatus::Failed) => SubmissionOutcome::Failed(WaitlistError::SubmissionFailed),
        _ => SubmissionOutcome::Ignored,
    }
}
