use serde::{Deserialize, Serialize};

use crate::auth::{AuthService, LoginRequest};
use crate::validation;

/// State of the login screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
    show_password: bool,
    submit_enabled: bool,
}

impl LoginForm {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn on_username_change(&mut self, value: impl Into<String>) {
        self.username = value.into();
        self.derive();
        log::debug!("login username changed, submit enabled: {}", self.submit_enabled);
    }

    pub fn on_password_change(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.derive();
        log::debug!("login password changed, submit enabled: {}", self.submit_enabled);
    }

    pub fn on_toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
        log::debug!("login password shown: {}", self.show_password);
    }

    /// Hands the credentials to `auth` if the form is submittable. Returns
    /// whether the call was made.
    pub fn on_submit(&self, auth: &dyn AuthService) -> bool {
        if !self.submit_enabled {
            log::debug!("login submit ignored, form incomplete");
            return false;
        }

        auth.login(&LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        });

        true
    }

    // Always computed from the committed values, never from the previous ones.
    fn derive(&mut self) {
        self.submit_enabled = validation::is_username_present(&self.username)
            && validation::is_password_long_enough(&self.password);
    }
}
