//! Pure validation rules for each field.
//!
//! Each rule maps current input to a [`Verdict`] without touching any state;
//! the form applies verdicts to its field map. The password policy is written
//! as explicit character-class checks because the `regex` crate supports no
//! lookahead.

use std::sync::OnceLock;

use regex::Regex;

use crate::field::Validity;
use crate::messages;

/// Outcome of one validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Verdict {
    pub(crate) validity: Validity,
    pub(crate) message: &'static str,
}

impl Verdict {
    const fn valid(message: &'static str) -> Self {
        Self {
            validity: Validity::Valid,
            message,
        }
    }

    const fn invalid(message: &'static str) -> Self {
        Self {
            validity: Validity::Invalid,
            message,
        }
    }
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-zÀ-ÿ\s]{3,60}$").unwrap_or_else(|err| {
            panic!("name pattern must compile: {err}");
        })
    })
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        )
        .unwrap_or_else(|err| {
            panic!("email pattern must compile: {err}");
        })
    })
}

/// Symbols the password policy accepts and requires one of.
const PASSWORD_SYMBOLS: &str = "#$@!%&*?";

/// Minimum password length in characters.
const PASSWORD_MIN_LEN: usize = 8;

/// Validate the full name. The value is trimmed before matching.
pub(crate) fn name(value: &str) -> Verdict {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Verdict::invalid(messages::NAME_EMPTY);
    }
    if !name_pattern().is_match(trimmed) {
        return Verdict::invalid(messages::NAME_INVALID);
    }
    Verdict::valid(messages::NAME_VALID)
}

/// Validate the email address. The value is trimmed before matching.
pub(crate) fn email(value: &str) -> Verdict {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Verdict::invalid(messages::EMAIL_EMPTY);
    }
    if !email_pattern().is_match(trimmed) {
        return Verdict::invalid(messages::EMAIL_INVALID);
    }
    Verdict::valid(messages::EMAIL_VALID)
}

fn password_meets_policy(value: &str) -> bool {
    let mut has_lower = false;
    let mut has_upper = false;
    let mut has_digit = false;
    let mut has_symbol = false;

    for c in value.chars() {
        if c.is_ascii_lowercase() {
            has_lower = true;
        } else if c.is_ascii_uppercase() {
            has_upper = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else if PASSWORD_SYMBOLS.contains(c) {
            has_symbol = true;
        } else {
            // Anything outside the allowed character set fails outright.
            return false;
        }
    }

    value.chars().count() >= PASSWORD_MIN_LEN && has_lower && has_upper && has_digit && has_symbol
}

/// Validate the password against the policy. No trimming.
pub(crate) fn password(value: &str) -> Verdict {
    if value.is_empty() {
        return Verdict::invalid(messages::PASSWORD_EMPTY);
    }
    if !password_meets_policy(value) {
        return Verdict::invalid(messages::PASSWORD_INVALID);
    }
    Verdict::valid(messages::PASSWORD_VALID)
}

/// Validate the confirmation against the live password value. Byte-for-byte
/// equality, no trimming.
pub(crate) fn confirm_password(value: &str, password_value: &str) -> Verdict {
    if value.is_empty() {
        return Verdict::invalid(messages::CONFIRM_EMPTY);
    }
    if value != password_value {
        return Verdict::invalid(messages::CONFIRM_MISMATCH);
    }
    Verdict::valid(messages::CONFIRM_VALID)
}

/// Validate the terms checkbox.
pub(crate) fn terms(checked: bool) -> Verdict {
    if !checked {
        return Verdict::invalid(messages::TERMS_UNCHECKED);
    }
    Verdict::valid(messages::TERMS_VALID)
}
