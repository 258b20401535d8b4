//! Submit state machine for one registration attempt.
//!
//! States: `Idle → Validating → (invalid | Submitting) → (Succeeded |
//! Failed)`, collapsing back to `Idle` once the attempt resolves. The
//! in-flight guard lives here rather than only in the disabled submit
//! control, so duplicate dispatch is refused at the state-machine level.

use crate::form::RegistrationForm;
use crate::messages;
use crate::transport::{RegisteredUser, RegistrationApi, RegistrationCallError};

/// Phase of the submit state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    /// No attempt in progress.
    #[default]
    Idle,
    /// Running the validators.
    Validating,
    /// Awaiting the network response.
    Submitting,
    /// The last attempt created a record.
    Succeeded,
    /// The last attempt failed after dispatch.
    Failed,
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The server created the record.
    Success(RegisteredUser),
    /// The email is already registered (HTTP 409).
    Conflict(String),
    /// At least one field failed validation; no request was made.
    ValidationFailure,
    /// The request failed in transit or the server rejected it for another
    /// reason.
    TransportOrServerError(String),
}

/// Submit control surface: enabled flag plus label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    /// Whether the control accepts clicks.
    pub enabled: bool,
    /// Current label text.
    pub label: String,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self {
            enabled: true,
            label: messages::SUBMIT_LABEL.to_owned(),
        }
    }
}

impl SubmitControl {
    fn busy() -> Self {
        Self {
            enabled: false,
            label: messages::SUBMIT_BUSY_LABEL.to_owned(),
        }
    }
}

/// Terminal success/error summary region shown after an attempt resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalPanel {
    /// Whether the panel is hidden.
    pub hidden: bool,
    /// Whether the panel renders in its error visual variant.
    pub error_variant: bool,
    /// Panel title.
    pub title: String,
    /// Panel body text.
    pub body: String,
}

impl Default for TerminalPanel {
    fn default() -> Self {
        Self {
            hidden: true,
            error_variant: false,
            title: String::new(),
            body: String::new(),
        }
    }
}

/// Orchestrates one submit attempt over a [`RegistrationForm`].
///
/// Owns the submit control and terminal panel state; a UI renders from those
/// snapshots after each call. The control is re-enabled with its resting
/// label on every path out of [`Submitter::submit`], including transport
/// failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitter {
    phase: SubmitPhase,
    control: SubmitControl,
    panel: TerminalPanel,
    success_title: String,
    success_body: String,
}

impl Default for Submitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Submitter {
    /// Create a submitter with the default success copy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_success_copy(messages::SUCCESS_TITLE, messages::SUCCESS_BODY)
    }

    /// Create a submitter with custom terminal success copy.
    #[must_use]
    pub fn with_success_copy(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            phase: SubmitPhase::Idle,
            control: SubmitControl::default(),
            panel: TerminalPanel::default(),
            success_title: title.into(),
            success_body: body.into(),
        }
    }

    /// Current state-machine phase.
    #[must_use]
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Current submit control state.
    #[must_use]
    pub fn control(&self) -> &SubmitControl {
        &self.control
    }

    /// Current terminal panel state.
    #[must_use]
    pub fn panel(&self) -> &TerminalPanel {
        &self.panel
    }

    /// Run one submit attempt: revalidate everything, then dispatch.
    ///
    /// Returns `None` without side effects when a request is already in
    /// flight (duplicate dispatch guard). Otherwise returns the attempt's
    /// [`SubmissionOutcome`]; there is no retry, a new user-initiated submit
    /// starts the next attempt.
    pub async fn submit(
        &mut self,
        form: &mut RegistrationForm,
        api: &dyn RegistrationApi,
    ) -> Option<SubmissionOutcome> {
        if self.phase == SubmitPhase::Submitting {
            return None;
        }

        self.phase = SubmitPhase::Validating;
        if !form.validate_all() {
            // Field messages stay as the validators set them; the terminal
            // panel disappears and the control is never disabled.
            self.panel.hidden = true;
            self.phase = SubmitPhase::Idle;
            return Some(SubmissionOutcome::ValidationFailure);
        }

        let Some(payload) = form.payload() else {
            self.phase = SubmitPhase::Idle;
            return Some(SubmissionOutcome::ValidationFailure);
        };

        self.phase = SubmitPhase::Submitting;
        self.control = SubmitControl::busy();
        self.panel = TerminalPanel::default();

        let outcome = match api.register(&payload).await {
            Ok(user) => {
                form.reset();
                self.panel = TerminalPanel {
                    hidden: false,
                    error_variant: false,
                    title: self.success_title.clone(),
                    body: self.success_body.clone(),
                };
                self.phase = SubmitPhase::Succeeded;
                SubmissionOutcome::Success(user)
            }
            Err(error) => {
                let (message, outcome_for) = split_error(error);
                self.panel = TerminalPanel {
                    hidden: false,
                    error_variant: true,
                    title: messages::ERROR_TITLE.to_owned(),
                    body: message,
                };
                self.phase = SubmitPhase::Failed;
                outcome_for
            }
        };

        // `finally` semantics: the control recovers unconditionally.
        self.control = SubmitControl::default();
        self.phase = SubmitPhase::Idle;
        Some(outcome)
    }
}

fn split_error(error: RegistrationCallError) -> (String, SubmissionOutcome) {
    match error {
        RegistrationCallError::Rejected { status: 409, message } => {
            (message.clone(), SubmissionOutcome::Conflict(message))
        }
        RegistrationCallError::Rejected { message, .. } => (
            message.clone(),
            SubmissionOutcome::TransportOrServerError(message),
        ),
        RegistrationCallError::Transport { .. } => (
            messages::TRANSPORT_FALLBACK.to_owned(),
            SubmissionOutcome::TransportOrServerError(messages::TRANSPORT_FALLBACK.to_owned()),
        ),
    }
}
