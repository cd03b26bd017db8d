use validator::ValidateEmail;
use waitlist_types::{FieldErrors, JoinWaitlistRequest};

use crate::app_error::{AppError, AppResult};

pub const NAME_MIN_CHARS: usize = 2;
pub const RESEARCH_INTERESTS_MIN_CHARS: usize = 10;
pub const RESEARCH_INTERESTS_MAX_CHARS: usize = 500;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill out all required fields.";
pub const INVALID_FORM_MESSAGE: &str = "Invalid form data. Please check your entries.";

const FIELD_NAME: &str = "name";
const FIELD_EMAIL: &str = "email";
const FIELD_RESEARCH_INTERESTS: &str = "researchInterests";

/// Form fields that passed validation, trimmed but not yet normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSignup {
    pub name: String,
    pub email: String,
    pub research_interests: String,
}

/// Validates that the input looks like a valid email address
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.validate_email()
}

/// Dedupe key for an email: trimmed and lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Checks a raw signup form.
///
/// Blank fields are reported first, on their own, with
/// `MISSING_FIELDS_MESSAGE`. Otherwise every failing field gets its
/// message under `INVALID_FORM_MESSAGE`.
pub fn validate_signup(req: &JoinWaitlistRequest) -> AppResult<ValidSignup> {
    let name = req.name.trim();
    let email = req.email.trim();
    let research_interests = req.research_interests.trim();

    let mut errors = FieldErrors::new();

    for (field, value) in [
        (FIELD_NAME, name),
        (FIELD_EMAIL, email),
        (FIELD_RESEARCH_INTERESTS, research_interests),
    ] {
        if value.is_empty() {
            push_error(&mut errors, field, "This field is required.");
        }
    }
    if !errors.is_empty() {
        return Err(AppError::Validation {
            message: MISSING_FIELDS_MESSAGE.into(),
            errors,
        });
    }

    if name.chars().count() < NAME_MIN_CHARS {
        push_error(
            &mut errors,
            FIELD_NAME,
            &format!("Name must be at least {NAME_MIN_CHARS} characters."),
        );
    }

    if !is_valid_email(email) {
        push_error(&mut errors, FIELD_EMAIL, "Please enter a valid email address.");
    }

    let interests_len = research_interests.chars().count();
    if interests_len < RESEARCH_INTERESTS_MIN_CHARS {
        push_error(
            &mut errors,
            FIELD_RESEARCH_INTERESTS,
            &format!(
                "Please tell us a bit more about your research interests (at least {RESEARCH_INTERESTS_MIN_CHARS} characters)."
            ),
        );
    } else if interests_len > RESEARCH_INTERESTS_MAX_CHARS {
        push_error(
            &mut errors,
            FIELD_RESEARCH_INTERESTS,
            &format!(
                "Research interests must be at most {RESEARCH_INTERESTS_MAX_CHARS} characters."
            ),
        );
    }

    if !errors.is_empty() {
        return Err(AppError::Validation {
            message: INVALID_FORM_MESSAGE.into(),
            errors,
        });
    }

    Ok(ValidSignup {
        name: name.to_string(),
        email: email.to_string(),
        research_interests: research_interests.to_string(),
    })
}

fn push_error(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}
