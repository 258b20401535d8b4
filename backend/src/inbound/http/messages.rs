//! Fixed user-facing messages for the registration API.
//!
//! The message set is part of the wire contract; clients display these texts
//! verbatim, so they must not change casually.

/// 400 body when any of name, email, or password is missing or empty.
pub const REQUIRED_FIELDS: &str = "Nombre, correo y contraseña son obligatorios.";

/// 409 body when the email is already registered.
pub const EMAIL_TAKEN: &str = "El correo ya se encuentra registrado.";

/// 500 body for any other persistence or runtime failure.
pub const UNEXPECTED: &str = "Ocurrió un error inesperado. Inténtalo más tarde.";
