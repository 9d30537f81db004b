pub mod login;
pub mod register;

use serde::Deserialize;

use crate::validation;

pub use login::LoginForm;
pub use register::RegisterForm;

/// What the button that posted a form asks for, after the field values have
/// been applied.
#[derive(Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FormAction {
    #[default]
    Update,
    TogglePassword,
    Submit,
}

#[derive(Deserialize, Default, Debug)]
pub struct LoginFormData {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub action: FormAction,
}

impl LoginFormData {
    /// Whether every value is short enough to be kept.
    pub fn fits(&self) -> bool {
        [&self.username, &self.password]
            .iter()
            .all(|value| validation::fits_field_limit(value))
    }

    /// Replays every field that differs from `form` as a change event.
    pub fn apply_to(self, form: &mut LoginForm) -> FormAction {
        if self.username != form.username() {
            form.on_username_change(self.username);
        }
        if self.password != form.password() {
            form.on_password_change(self.password);
        }

        self.action
    }
}

#[derive(Deserialize, Default, Debug)]
pub struct RegisterFormData {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    #[serde(default)]
    pub action: FormAction,
}

impl RegisterFormData {
    pub fn fits(&self) -> bool {
        [
            &self.email,
            &self.username,
            &self.password,
            &self.confirm_password,
        ]
        .iter()
        .all(|value| validation::fits_field_limit(value))
    }

    pub fn apply_to(self, form: &mut RegisterForm) -> FormAction {
        if self.email != form.email() {
            form.on_email_change(self.email);
        }
        if self.username != form.username() {
            form.on_username_change(self.username);
        }
        if self.password != form.password() {
            form.on_password_change(self.password);
        }
        if self.confirm_password != form.confirm_password() {
            form.on_confirm_password_change(self.confirm_password);
        }

        self.action
    }
}
