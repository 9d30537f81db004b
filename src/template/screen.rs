use askama::Template;

use crate::form::{LoginForm, RegisterForm};
use crate::validation::{MAX_FIELD_LENGTH, PASSWORDS_DONT_MATCH, PASSWORDS_MATCH};

fn password_input_type(shown: bool) -> &'static str {
    if shown {
        "text"
    } else {
        "password"
    }
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate<'a> {
    pub form: &'a LoginForm,
    pub notice: &'a str,
    pub password_input_type: &'static str,
    pub max_length: usize,
}

impl<'a> LoginTemplate<'a> {
    /// `notice` is shown above the form unless empty.
    pub fn new(form: &'a LoginForm, notice: &'a str) -> Self {
        Self {
            form,
            notice,
            password_input_type: password_input_type(form.show_password()),
            max_length: MAX_FIELD_LENGTH,
        }
    }
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate<'a> {
    pub form: &'a RegisterForm,
    pub notice: &'a str,
    pub password_input_type: &'static str,
    pub max_length: usize,
    pub password_error: &'a str,
    pub match_message: &'static str,
    pub mismatch_message: &'static str,
}

impl<'a> RegisterTemplate<'a> {
    pub fn new(form: &'a RegisterForm, notice: &'a str) -> Self {
        Self {
            form,
            notice,
            password_input_type: password_input_type(form.show_password()),
            max_length: MAX_FIELD_LENGTH,
            password_error: form.password_error().unwrap_or_default(),
            match_message: PASSWORDS_MATCH,
            mismatch_message: PASSWORDS_DONT_MATCH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_renders_values_and_disabled_button() {
        let mut form = LoginForm::default();
        form.on_username_change("<bob>");

        let html = LoginTemplate::new(&form, "").render().unwrap();
        assert!(html.contains("&lt;bob&gt;"));
        assert!(html.contains(r#"type="password""#));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn login_shows_password_as_text_when_toggled() {
        let mut form = LoginForm::default();
        form.on_username_change("bob");
        form.on_password_change("abcdefgh");
        form.on_toggle_show_password();

        let html = LoginTemplate::new(&form, "").render().unwrap();
        assert!(html.contains(r#"type="text" name="password""#));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn register_renders_errors() {
        let mut form = RegisterForm::default();
        form.on_password_change("short");
        form.on_confirm_password_change("different!");

        let html = RegisterTemplate::new(&form, "").render().unwrap();
        assert!(html.contains("Password must be at least 8 characters long"));
        assert!(html.contains(r#"class="caption mismatch""#));
        assert!(!html.contains(PASSWORDS_MATCH));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn inline_actions_skip_browser_validation() {
        let html = RegisterTemplate::new(&RegisterForm::default(), "")
            .render()
            .unwrap();
        assert!(html.contains(r#"value="update" class="default-action" tabindex="-1" formnovalidate"#));
        assert!(html.contains(r#"value="toggle_password" class="link" formnovalidate"#));
        assert!(!html.contains(r#"value="submit" class="primary" formnovalidate"#));

        let html = LoginTemplate::new(&LoginForm::default(), "").render().unwrap();
        assert!(html.contains(r#"value="update" class="default-action" tabindex="-1" formnovalidate"#));
        assert!(html.contains(r#"value="toggle_password" class="link" formnovalidate"#));
    }

    #[test]
    fn inputs_carry_length_limit() {
        let html = RegisterTemplate::new(&RegisterForm::default(), "")
            .render()
            .unwrap();
        assert_eq!(html.matches(r#"maxlength="128""#).count(), 4);

        let html = LoginTemplate::new(&LoginForm::default(), "").render().unwrap();
        assert_eq!(html.matches(r#"maxlength="128""#).count(), 2);
    }

    #[test]
    fn notice_is_rendered_only_when_set() {
        let form = LoginForm::default();
        let html = LoginTemplate::new(&form, "").render().unwrap();
        assert!(!html.contains(r#"<p class="caption helper">"#));

        let html = LoginTemplate::new(&form, "Too long").render().unwrap();
        assert!(html.contains(r#"<p class="caption helper">Too long</p>"#));
    }

    #[test]
    fn register_confirms_matching_passwords() {
        let mut form = RegisterForm::default();
        form.on_password_change("abcdefgh");
        form.on_confirm_password_change("abcdefgh");

        let html = RegisterTemplate::new(&form, "").render().unwrap();
        assert!(html.contains(PASSWORDS_MATCH));
        assert!(!html.contains("Password must be"));
        assert!(!html.contains("disabled"));
    }
}
