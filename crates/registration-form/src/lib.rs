//! Headless registration form for the registration backend.
//!
//! This crate models the browser side of the registration flow without a DOM:
//! per-field validation with the fixed Spanish message set, the submit state
//! machine with its terminal success/error panel, and an HTTP transport for
//! `POST /api/register`. A UI renders from the [`FieldState`] snapshots and
//! the submitter's control/panel state; the library never touches a screen.
//!
//! # Example
//!
//! ```
//! use registration_form::{FieldKey, RegistrationForm, Validity};
//!
//! let mut form = RegistrationForm::new();
//! form.set_value(FieldKey::Name, "Ana López");
//! assert_eq!(form.field(FieldKey::Name).validity, Validity::Valid);
//! assert_eq!(form.field(FieldKey::Name).message, "¡Perfecto!");
//! ```

mod field;
mod form;
pub mod messages;
mod rules;
mod submit;
mod transport;

pub use field::{FieldKey, FieldState, Validity};
pub use form::RegistrationForm;
pub use submit::{SubmissionOutcome, SubmitControl, SubmitPhase, Submitter, TerminalPanel};
pub use transport::{
    HttpRegistrationApi, RegisteredUser, RegistrationApi, RegistrationCallError,
    RegistrationPayload,
};
