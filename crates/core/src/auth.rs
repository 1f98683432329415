//! Login gate.
//!
//! The app ships a single internal account; the check is a static comparison and provides no
//! security on its own. Structural checks on the form run first so the user gets a field
//! message before any comparison happens.

use crate::constants::{DEFAULT_LOGIN_EMAIL, DEFAULT_LOGIN_PASSWORD, MIN_PASSWORD_LEN};

/// What the user typed on the login screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Email é obrigatório")]
    Required,
    #[error("Email inválido")]
    Invalid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PasswordError {
    #[error("Senha é obrigatória")]
    Required,
    #[error("Senha deve ter pelo menos {} caracteres", MIN_PASSWORD_LEN)]
    TooShort,
}

/// Per-field problems of a login form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<EmailError>,
    pub password: Option<PasswordError>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

impl std::fmt::Display for LoginErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self
            .email
            .map(|e| e.to_string())
            .into_iter()
            .chain(self.password.map(|e| e.to_string()))
            .collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for LoginErrors {}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("{0}")]
    Form(LoginErrors),
    #[error("Email ou senha incorretos")]
    InvalidCredentials,
}

/// Shape check equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Checks the login form fields.
///
/// # Errors
///
/// Returns every field problem found, at most one per field.
pub fn validate_login(form: &LoginForm) -> Result<(), LoginErrors> {
    let email = form.email.trim();
    let errors = LoginErrors {
        email: if email.is_empty() {
            Some(EmailError::Required)
        } else if !is_valid_email(email) {
            Some(EmailError::Invalid)
        } else {
            None
        },
        password: if form.password.trim().is_empty() {
            Some(PasswordError::Required)
        } else if form.password.chars().count() < MIN_PASSWORD_LEN {
            Some(PasswordError::TooShort)
        } else {
            None
        },
    };

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// The account accepted by the login gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Validates `form` and compares it with these credentials.
    ///
    /// # Errors
    ///
    /// - [`LoginError::Form`] when a field fails its structural check.
    /// - [`LoginError::InvalidCredentials`] when the values do not match.
    pub fn check(&self, form: &LoginForm) -> Result<(), LoginError> {
        validate_login(form).map_err(LoginError::Form)?;
        if form.email.trim() == self.email && form.password == self.password {
            Ok(())
        } else {
            Err(LoginError::InvalidCredentials)
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_LOGIN_EMAIL, DEFAULT_LOGIN_PASSWORD)
    }
}
