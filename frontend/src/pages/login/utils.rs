use crate::api::Credentials;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const INCORRECT_CREDENTIALS: &str = "Email or password is incorrect";

/// Messages shown on the login form. Every failure path builds a fresh value, so at
/// most one field is set at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<String>,
    pub password: Option<String>,
    pub common: Option<String>,
}

impl LoginErrors {
    pub fn missing_email() -> Self {
        Self {
            email: Some(EMAIL_REQUIRED.into()),
            ..Self::default()
        }
    }

    pub fn missing_password() -> Self {
        Self {
            password: Some(PASSWORD_REQUIRED.into()),
            ..Self::default()
        }
    }

    pub fn incorrect_credentials() -> Self {
        Self {
            common: Some(INCORRECT_CREDENTIALS.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.common.is_none()
    }
}

/// Presence check only: values are passed through untrimmed.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, LoginErrors> {
    if email.is_empty() {
        return Err(LoginErrors::missing_email());
    }
    if password.is_empty() {
        return Err(LoginErrors::missing_password());
    }
    Ok(Credentials::new(email, password))
}
