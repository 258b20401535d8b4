//! Fixed Spanish message set for field feedback and the terminal panel.
//!
//! Texts are displayed verbatim; the clients of this crate do not translate
//! or rewrite them.

/// Name field: empty input.
pub const NAME_EMPTY: &str = "El nombre completo es obligatorio.";
/// Name field: pattern failure.
pub const NAME_INVALID: &str =
    "Introduce un nombre válido (solo letras y espacios, mínimo 3 caracteres).";
/// Name field: affirmative feedback.
pub const NAME_VALID: &str = "¡Perfecto!";

/// Email field: empty input.
pub const EMAIL_EMPTY: &str = "El correo electrónico es obligatorio.";
/// Email field: pattern failure.
pub const EMAIL_INVALID: &str =
    "Introduce un correo electrónico válido (ej. nombre@dominio.com).";
/// Email field: affirmative feedback.
pub const EMAIL_VALID: &str = "Correo válido.";

/// Password field: empty input.
pub const PASSWORD_EMPTY: &str = "La contraseña es obligatoria.";
/// Password field: policy failure.
pub const PASSWORD_INVALID: &str =
    "Debe tener al menos 8 caracteres, incluir minúsculas, mayúsculas, un número y un símbolo.";
/// Password field: affirmative feedback.
pub const PASSWORD_VALID: &str = "Contraseña segura.";

/// Confirmation field: empty input.
pub const CONFIRM_EMPTY: &str = "Confirma tu contraseña.";
/// Confirmation field: differs from the password.
pub const CONFIRM_MISMATCH: &str = "Las contraseñas no coinciden.";
/// Confirmation field: affirmative feedback.
pub const CONFIRM_VALID: &str = "Coincide.";

/// Terms checkbox: not accepted.
pub const TERMS_UNCHECKED: &str = "Debes aceptar los términos y condiciones.";
/// Terms checkbox: affirmative feedback.
pub const TERMS_VALID: &str = "Gracias por aceptar.";

/// Submit control label at rest.
pub const SUBMIT_LABEL: &str = "Crear cuenta";
/// Submit control label while a request is in flight.
pub const SUBMIT_BUSY_LABEL: &str = "Enviando...";

/// Terminal panel title for the error variant.
pub const ERROR_TITLE: &str = "Ups...";
/// Terminal panel body when the server supplied no message.
pub const TRANSPORT_FALLBACK: &str = "No se pudo guardar el registro.";
/// Default terminal panel title after a successful registration.
pub const SUCCESS_TITLE: &str = "¡Registro completado!";
/// Default terminal panel body after a successful registration.
pub const SUCCESS_BODY: &str = "Tu cuenta ha sido creada correctamente.";
