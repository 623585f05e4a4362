//! Login and registration form state and validation.
//!
//! Validation is ordered and short-circuiting: each submission surfaces
//! exactly one actionable error (the toast can only show one message at a
//! time anyway). The checks are purely local field rules; passing them
//! only drives UI state and is not authentication of any kind.

use std::time::Instant;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::toast::{Severity, ToastNotifier};

/// Basic `local@domain.tld` shape: non-whitespace, non-`@` local and
/// domain parts with at least one dot after the `@`.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// A single field-rule failure, carrying its user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Username must be at least 3 characters.")]
    UsernameTooShort,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("You must agree to the Terms of Service.")]
    TermsNotAccepted,
}

/// Which login field currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

/// Login dialog field state.
#[derive(Debug, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    /// When true the password renders in clear text (visibility toggle).
    pub show_password: bool,
}

impl LoginForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }
}

/// Which register field currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterField {
    #[default]
    Username,
    Email,
    Password,
    Confirm,
    Terms,
}

/// Registration dialog field state.
#[derive(Debug, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub agree_terms: bool,
    pub focus: RegisterField,
    pub show_password: bool,
}

impl RegisterForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            RegisterField::Username => RegisterField::Email,
            RegisterField::Email => RegisterField::Password,
            RegisterField::Password => RegisterField::Confirm,
            RegisterField::Confirm => RegisterField::Terms,
            RegisterField::Terms => RegisterField::Username,
        };
    }

    /// The text buffer behind the focused field, if it is a text field.
    pub fn focused_value_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            RegisterField::Username => Some(&mut self.username),
            RegisterField::Email => Some(&mut self.email),
            RegisterField::Password => Some(&mut self.password),
            RegisterField::Confirm => Some(&mut self.confirm),
            RegisterField::Terms => None,
        }
    }
}

/// Check the login rule set in order, failing on the first violation.
pub fn validate_login(username: &str, password: &str) -> Result<(), FieldError> {
    if username.chars().count() < 3 {
        return Err(FieldError::UsernameTooShort);
    }
    if password.chars().count() < 6 {
        return Err(FieldError::PasswordTooShort);
    }
    Ok(())
}

/// Check the registration rule set in order, failing on the first
/// violation.
pub fn validate_register(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
    agree_terms: bool,
) -> Result<(), FieldError> {
    if username.chars().count() < 3 {
        return Err(FieldError::UsernameTooShort);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(FieldError::InvalidEmail);
    }
    if password.chars().count() < 6 {
        return Err(FieldError::PasswordTooShort);
    }
    if password != confirm {
        return Err(FieldError::PasswordMismatch);
    }
    if !agree_terms {
        return Err(FieldError::TermsNotAccepted);
    }
    Ok(())
}

/// Validate the login form, reporting the first failure as an error
/// toast. Returns whether the caller should proceed.
pub fn check_login(form: &LoginForm, toast: &mut ToastNotifier, now: Instant) -> bool {
    report(validate_login(&form.username, &form.password), toast, now)
}

/// Validate the register form, reporting the first failure as an error
/// toast. Returns whether the caller should proceed.
pub fn check_register(form: &RegisterForm, toast: &mut ToastNotifier, now: Instant) -> bool {
    report(
        validate_register(
            &form.username,
            &form.email,
            &form.password,
            &form.confirm,
            form.agree_terms,
        ),
        toast,
        now,
    )
}

fn report(result: Result<(), FieldError>, toast: &mut ToastNotifier, now: Instant) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            toast.show(err.to_string(), Severity::Error, now);
            false
        }
    }
}

/// Strip control characters from a user-provided name before it is bound
/// into the signed-in badge. The badge renders text spans only, so this
/// is the entire sanitization surface.
pub fn sanitize_display_name(name: &str) -> String {
    name.chars().filter(|c| !c.is_control()).collect()
}
