use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::auth::dto::{Credentials, NewUser, SigninRequest, SignupRequest};

/// One field-level violation, shaped for direct client display.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Validate and normalize a sign-up payload: name trimmed, email trimmed
/// and lowercased, role defaulted to `user`. Collects every violation
/// rather than stopping at the first.
pub fn validate_signup(req: SignupRequest) -> Result<NewUser, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = req.name.map(|n| n.trim().to_string()).unwrap_or_default();
    if name.is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    } else if name.chars().count() < 2 || name.chars().count() > 255 {
        errors.push(FieldError::new(
            "name",
            "Name must be between 2 and 255 characters",
        ));
    }

    let email = req.email.map(|e| e.trim().to_lowercase()).unwrap_or_default();
    if email.is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if email.len() > 255 || !is_valid_email(&email) {
        errors.push(FieldError::new("email", "Invalid email address"));
    }

    let password = req.password.unwrap_or_default();
    if password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    } else if password.chars().count() < 6 || password.chars().count() > 128 {
        errors.push(FieldError::new(
            "password",
            "Password must be between 6 and 128 characters",
        ));
    }

    let role = req.role.unwrap_or_else(|| "user".to_string());
    if role != "user" && role != "admin" {
        errors.push(FieldError::new("role", "Role must be either user or admin"));
    }

    if errors.is_empty() {
        Ok(NewUser {
            name,
            email,
            password,
            role,
        })
    } else {
        Err(errors)
    }
}

/// Validate and normalize a sign-in payload.
pub fn validate_signin(req: SigninRequest) -> Result<Credentials, Vec<FieldError>> {
    let mut errors = Vec::new();

    let email = req.email.map(|e| e.trim().to_lowercase()).unwrap_or_default();
    if email.is_empty() || !is_valid_email(&email) {
        errors.push(FieldError::new("email", "Invalid email address"));
    }

    let password = req.password.unwrap_or_default();
    if password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    }

    if errors.is_empty() {
        Ok(Credentials { email, password })
    } else {
        Err(errors)
    }
}
