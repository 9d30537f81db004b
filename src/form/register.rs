use serde::{Deserialize, Serialize};

use crate::auth::{AuthService, RegistrationRequest};
use crate::validation;

/// State of the sign up screen.
///
/// Email and username are required by the markup only; the submit guard looks
/// at the two password fields alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterForm {
    email: String,
    username: String,
    password: String,
    confirm_password: String,
    show_password: bool,
    password_error: Option<String>,
}

impl RegisterForm {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    /// Set once the password field has been edited to something too short.
    pub fn password_error(&self) -> Option<&str> {
        self.password_error.as_deref()
    }

    pub fn is_password_valid(&self) -> bool {
        validation::is_password_long_enough(&self.password)
    }

    pub fn passwords_match(&self) -> bool {
        validation::passwords_match(&self.password, &self.confirm_password)
    }

    pub fn passwords_match_and_valid(&self) -> bool {
        self.passwords_match() && self.is_password_valid()
    }

    pub fn confirm_password_has_error(&self) -> bool {
        validation::confirm_password_shows_error(&self.confirm_password, &self.password)
    }

    pub fn submit_enabled(&self) -> bool {
        self.passwords_match_and_valid()
    }

    pub fn on_email_change(&mut self, value: impl Into<String>) {
        self.email = value.into();
        log::debug!("register email changed");
    }

    pub fn on_username_change(&mut self, value: impl Into<String>) {
        self.username = value.into();
        log::debug!("register username changed");
    }

    pub fn on_password_change(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.password_error = validation::password_error(&self.password).map(str::to_string);
        log::debug!(
            "register password changed, valid: {}, match: {}",
            self.is_password_valid(),
            self.passwords_match()
        );
    }

    pub fn on_confirm_password_change(&mut self, value: impl Into<String>) {
        self.confirm_password = value.into();
        log::debug!("register confirmation changed, match: {}", self.passwords_match());
    }

    pub fn on_toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
        log::debug!("register password shown: {}", self.show_password);
    }

    pub fn on_submit(&self, auth: &dyn AuthService) -> bool {
        if !self.submit_enabled() {
            log::debug!("registration submit ignored, passwords invalid or mismatched");
            return false;
        }

        auth.register(&RegistrationRequest {
            email: self.email.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        });

        true
    }
}
