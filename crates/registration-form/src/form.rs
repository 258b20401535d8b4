//! The registration form context: field states and revalidation wiring.

use crate::field::{FieldKey, FieldState, Validity};
use crate::rules;
use crate::transport::RegistrationPayload;

/// Literal stored in the terms field when the checkbox is ticked.
const CHECKED: &str = "true";

/// Validator context owning the [`FieldKey`] → [`FieldState`] mapping.
///
/// All field state lives here; rendering and submission logic receive the
/// form explicitly instead of reaching for ambient lookups. Editing a value
/// revalidates its own field, and editing the password additionally
/// revalidates the confirmation, whose validity is relative to the live
/// password value rather than a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    name: FieldState,
    email: FieldState,
    password: FieldState,
    confirm_password: FieldState,
    terms: FieldState,
}

impl RegistrationForm {
    /// Create a form with every field empty and unvalidated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of one field.
    #[must_use]
    pub fn field(&self, key: FieldKey) -> &FieldState {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Email => &self.email,
            FieldKey::Password => &self.password,
            FieldKey::ConfirmPassword => &self.confirm_password,
            FieldKey::Terms => &self.terms,
        }
    }

    fn field_mut(&mut self, key: FieldKey) -> &mut FieldState {
        match key {
            FieldKey::Name => &mut self.name,
            FieldKey::Email => &mut self.email,
            FieldKey::Password => &mut self.password,
            FieldKey::ConfirmPassword => &mut self.confirm_password,
            FieldKey::Terms => &mut self.terms,
        }
    }

    /// Record an input event: store the value and revalidate the field.
    ///
    /// Mirrors the per-keystroke trigger policy: the edited field is
    /// revalidated immediately, and a password edit also revalidates the
    /// confirmation as an explicit secondary notification.
    pub fn set_value(&mut self, key: FieldKey, value: &str) {
        self.field_mut(key).value = value.to_owned();
        self.validate(key);
        if key == FieldKey::Password {
            self.validate(FieldKey::ConfirmPassword);
        }
    }

    /// Record a checkbox toggle and revalidate the terms field.
    pub fn set_terms(&mut self, checked: bool) {
        self.set_value(FieldKey::Terms, if checked { CHECKED } else { "" });
    }

    /// Run one field's validator, overwriting its message and validity.
    ///
    /// Returns whether the field is now valid.
    pub fn validate(&mut self, key: FieldKey) -> bool {
        let verdict = match key {
            FieldKey::Name => rules::name(&self.name.value),
            FieldKey::Email => rules::email(&self.email.value),
            FieldKey::Password => rules::password(&self.password.value),
            FieldKey::ConfirmPassword => {
                rules::confirm_password(&self.confirm_password.value, &self.password.value)
            }
            FieldKey::Terms => rules::terms(self.terms.value == CHECKED),
        };

        let state = self.field_mut(key);
        state.validity = verdict.validity;
        state.message = verdict.message.to_owned();
        verdict.validity == Validity::Valid
    }

    /// Run every validator unconditionally and report whether all passed.
    ///
    /// All five run even after the first failure so each field shows its
    /// current message.
    pub fn validate_all(&mut self) -> bool {
        FieldKey::ALL
            .into_iter()
            .fold(true, |all_valid, key| self.validate(key) && all_valid)
    }

    /// Build the submission payload: trimmed name and email, raw password.
    ///
    /// Returns `None` unless every field is currently `Valid`; a payload is
    /// only ever constructed from a fully valid form.
    #[must_use]
    pub fn payload(&self) -> Option<RegistrationPayload> {
        let all_valid = FieldKey::ALL
            .into_iter()
            .all(|key| self.field(key).is_valid());
        if !all_valid {
            return None;
        }
        Some(RegistrationPayload {
            name: self.name.value.trim().to_owned(),
            email: self.email.value.trim().to_owned(),
            password: self.password.value.clone(),
        })
    }

    /// Clear every field back to empty and unvalidated, wiping messages.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    //! Form wiring coverage: trigger policy, cross-field dependency, payload
    //! construction, and reset.
    use rstest::rstest;

    use super::*;
    use crate::messages;

    fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.set_value(FieldKey::Name, " Ana López ");
        form.set_value(FieldKey::Email, " ana@example.com ");
        form.set_value(FieldKey::Password, "Abcdef1#");
        form.set_value(FieldKey::ConfirmPassword, "Abcdef1#");
        form.set_terms(true);
        form
    }

    #[test]
    fn editing_a_field_revalidates_it() {
        let mut form = RegistrationForm::new();
        form.set_value(FieldKey::Email, "nope");
        assert_eq!(form.field(FieldKey::Email).validity, Validity::Invalid);
        assert_eq!(form.field(FieldKey::Email).message, messages::EMAIL_INVALID);

        form.set_value(FieldKey::Email, "ana@example.com");
        assert_eq!(form.field(FieldKey::Email).validity, Validity::Valid);
        // Messages are overwritten, never accumulated.
        assert_eq!(form.field(FieldKey::Email).message, messages::EMAIL_VALID);
    }

    #[test]
    fn editing_the_password_revalidates_the_confirmation() {
        let mut form = RegistrationForm::new();
        form.set_value(FieldKey::Password, "Abcdef1#");
        form.set_value(FieldKey::ConfirmPassword, "Abcdef1#");
        assert!(form.field(FieldKey::ConfirmPassword).is_valid());

        // The confirmation goes stale the moment the password changes.
        form.set_value(FieldKey::Password, "Abcdef2#");
        assert_eq!(
            form.field(FieldKey::ConfirmPassword).validity,
            Validity::Invalid
        );
        assert_eq!(
            form.field(FieldKey::ConfirmPassword).message,
            messages::CONFIRM_MISMATCH
        );
    }

    #[test]
    fn other_fields_do_not_touch_the_confirmation() {
        let mut form = RegistrationForm::new();
        form.set_value(FieldKey::Name, "Ana");
        assert_eq!(
            form.field(FieldKey::ConfirmPassword).validity,
            Validity::Unvalidated
        );
    }

    #[test]
    fn validate_all_runs_every_field_even_after_a_failure() {
        let mut form = RegistrationForm::new();
        assert!(!form.validate_all());
        for key in FieldKey::ALL {
            assert_eq!(form.field(key).validity, Validity::Invalid, "{key}");
            assert!(!form.field(key).message.is_empty(), "{key}");
        }
    }

    #[test]
    fn payload_trims_name_and_email_but_not_the_password() {
        let form = filled_form();
        let payload = form.payload().expect("fully valid form");
        assert_eq!(payload.name, "Ana López");
        assert_eq!(payload.email, "ana@example.com");
        assert_eq!(payload.password, "Abcdef1#");
    }

    #[rstest]
    #[case(FieldKey::Name, "")]
    #[case(FieldKey::Password, "weak")]
    fn payload_is_withheld_while_any_field_is_invalid(#[case] key: FieldKey, #[case] value: &str) {
        let mut form = filled_form();
        form.set_value(key, value);
        assert!(form.payload().is_none());
    }

    #[test]
    fn reset_restores_the_pristine_form() {
        let mut form = filled_form();
        form.reset();
        assert_eq!(form, RegistrationForm::new());
        for key in FieldKey::ALL {
            assert_eq!(form.field(key).validity, Validity::Unvalidated);
            assert!(form.field(key).message.is_empty());
        }
    }

    #[test]
    fn validation_is_idempotent_per_field() {
        let mut form = RegistrationForm::new();
        form.set_value(FieldKey::Name, "Ana42");
        let first = form.field(FieldKey::Name).clone();
        form.validate(FieldKey::Name);
        assert_eq!(form.field(FieldKey::Name), &first);
    }
}
