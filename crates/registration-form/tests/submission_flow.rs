//! End-to-end submit flows over a scripted registration API.

use std::sync::Mutex;

use chrono::Utc;
use registration_form::{
    messages, FieldKey, RegisteredUser, RegistrationApi, RegistrationCallError,
    RegistrationForm, RegistrationPayload, SubmissionOutcome, SubmitPhase, Submitter,
};
use rstest::rstest;
use uuid::Uuid;

/// How the scripted API answers the next call.
enum Script {
    Accept,
    Reject { status: u16, message: &'static str },
    Drop,
}

/// Records every payload it receives and answers per its script.
struct ScriptedApi {
    script: Script,
    calls: Mutex<Vec<RegistrationPayload>>,
}

impl ScriptedApi {
    fn new(script: Script) -> Self {
        Self {
            script,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<RegistrationPayload> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl RegistrationApi for ScriptedApi {
    async fn register(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<RegisteredUser, RegistrationCallError> {
        self.calls.lock().unwrap().push(payload.clone());
        match self.script {
            Script::Accept => Ok(RegisteredUser {
                id: Uuid::new_v4(),
                full_name: payload.name.clone(),
                email: payload.email.clone(),
                created_at: Utc::now(),
            }),
            Script::Reject { status, message } => Err(RegistrationCallError::Rejected {
                status,
                message: message.to_owned(),
            }),
            Script::Drop => Err(RegistrationCallError::Transport {
                message: "connection refused".to_owned(),
            }),
        }
    }
}

fn filled_form() -> RegistrationForm {
    let mut form = RegistrationForm::new();
    form.set_value(FieldKey::Name, "  Ana López ");
    form.set_value(FieldKey::Email, " ana@example.com ");
    form.set_value(FieldKey::Password, "Abcdef1#");
    form.set_value(FieldKey::ConfirmPassword, "Abcdef1#");
    form.set_terms(true);
    form
}

#[tokio::test]
async fn a_successful_attempt_resets_the_form_and_shows_the_success_panel() {
    let api = ScriptedApi::new(Script::Accept);
    let mut form = filled_form();
    let mut submitter = Submitter::new();

    let outcome = submitter.submit(&mut form, &api).await;

    assert!(matches!(outcome, Some(SubmissionOutcome::Success(_))));
    let calls = api.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].name, "Ana López");
    assert_eq!(calls[0].email, "ana@example.com");
    assert_eq!(calls[0].password, "Abcdef1#");

    assert!(form.field(FieldKey::Name).value.is_empty());
    assert!(form.payload().is_none());

    let panel = submitter.panel();
    assert!(!panel.hidden);
    assert!(!panel.error_variant);
    assert_eq!(panel.title, messages::SUCCESS_TITLE);
    assert_eq!(panel.body, messages::SUCCESS_BODY);
    assert_eq!(submitter.phase(), SubmitPhase::Idle);
}

#[tokio::test]
async fn custom_success_copy_replaces_the_default_panel_texts() {
    let api = ScriptedApi::new(Script::Accept);
    let mut form = filled_form();
    let mut submitter = Submitter::with_success_copy("Listo", "Revisa tu correo.");

    submitter.submit(&mut form, &api).await;

    assert_eq!(submitter.panel().title, "Listo");
    assert_eq!(submitter.panel().body, "Revisa tu correo.");
}

#[tokio::test]
async fn a_duplicate_email_shows_the_server_message_and_keeps_the_form() {
    let api = ScriptedApi::new(Script::Reject {
        status: 409,
        message: "El correo ya se encuentra registrado.",
    });
    let mut form = filled_form();
    let mut submitter = Submitter::new();

    let outcome = submitter.submit(&mut form, &api).await;

    assert_eq!(
        outcome,
        Some(SubmissionOutcome::Conflict(
            "El correo ya se encuentra registrado.".to_owned()
        ))
    );
    // The form keeps its values so the user can change the email and retry.
    assert_eq!(form.field(FieldKey::Email).value, "ana@example.com");

    let panel = submitter.panel();
    assert!(!panel.hidden);
    assert!(panel.error_variant);
    assert_eq!(panel.title, messages::ERROR_TITLE);
    assert_eq!(panel.body, "El correo ya se encuentra registrado.");
}

#[tokio::test]
async fn unchecked_terms_block_the_network_call() {
    let api = ScriptedApi::new(Script::Accept);
    let mut form = filled_form();
    form.set_terms(false);
    let mut submitter = Submitter::new();

    let outcome = submitter.submit(&mut form, &api).await;

    assert_eq!(outcome, Some(SubmissionOutcome::ValidationFailure));
    assert!(api.calls().is_empty());
    assert_eq!(
        form.field(FieldKey::Terms).message,
        messages::TERMS_UNCHECKED
    );
    // The control was never disabled and the panel stays hidden.
    let control = submitter.control();
    assert!(control.enabled);
    assert_eq!(control.label, messages::SUBMIT_LABEL);
    assert!(submitter.panel().hidden);
}

#[rstest]
#[case::transport(Script::Drop, messages::TRANSPORT_FALLBACK)]
#[case::server_error(
    Script::Reject {
        status: 500,
        message: "Ocurrió un error inesperado. Inténtalo más tarde.",
    },
    "Ocurrió un error inesperado. Inténtalo más tarde."
)]
#[tokio::test]
async fn failures_restore_the_control_and_show_the_error_panel(
    #[case] script: Script,
    #[case] expected_body: &str,
) {
    let api = ScriptedApi::new(script);
    let mut form = filled_form();
    let mut submitter = Submitter::new();

    let outcome = submitter.submit(&mut form, &api).await;

    assert!(matches!(
        outcome,
        Some(SubmissionOutcome::TransportOrServerError(_))
    ));
    let control = submitter.control();
    assert!(control.enabled);
    assert_eq!(control.label, messages::SUBMIT_LABEL);

    let panel = submitter.panel();
    assert!(panel.error_variant);
    assert_eq!(panel.title, messages::ERROR_TITLE);
    assert_eq!(panel.body, expected_body);
    assert_eq!(submitter.phase(), SubmitPhase::Idle);
}
