/// Minimum number of characters a password must have.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Longest value, in characters, any single field may hold. Keeps the whole
/// screen state inside one session cookie.
pub const MAX_FIELD_LENGTH: usize = 128;

pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long";
pub const PASSWORDS_MATCH: &str = "Passwords match";
pub const PASSWORDS_DONT_MATCH: &str = "Passwords don't match!";
pub const FIELD_TOO_LONG: &str = "Fields can be at most 128 characters long";

/// Lengths are counted in characters, not bytes.
fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn is_username_present(username: &str) -> bool {
    !username.trim().is_empty()
}

pub fn is_password_long_enough(password: &str) -> bool {
    char_len(password) >= MIN_PASSWORD_LENGTH
}

/// Exact, case-sensitive comparison.
pub fn passwords_match(password: &str, confirm: &str) -> bool {
    password == confirm
}

/// The confirmation field only reports a mismatch once it is long enough to be
/// a plausible password.
pub fn confirm_password_shows_error(confirm: &str, password: &str) -> bool {
    char_len(confirm) >= MIN_PASSWORD_LENGTH && !passwords_match(password, confirm)
}

pub fn fits_field_limit(value: &str) -> bool {
    char_len(value) <= MAX_FIELD_LENGTH
}

pub fn password_error(password: &str) -> Option<&'static str> {
    if is_password_long_enough(password) {
        None
    } else {
        Some(PASSWORD_TOO_SHORT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_presence_ignores_surrounding_whitespace() {
        assert!(is_username_present("bob"));
        assert!(is_username_present("  bob "));
        assert!(!is_username_present(""));
        assert!(!is_username_present(" \t\n"));
    }

    #[test]
    fn password_length_boundary() {
        assert!(!is_password_long_enough(""));
        assert!(!is_password_long_enough("abcdefg"));
        assert!(is_password_long_enough("abcdefgh"));
        assert!(is_password_long_enough("abcdefghijklmnop"));
    }

    #[test]
    fn password_length_counts_characters() {
        // 7 characters, 14 bytes
        assert!(!is_password_long_enough("ééééééé"));
        assert!(is_password_long_enough("éééééééé"));
    }

    #[test]
    fn passwords_match_is_case_sensitive() {
        assert!(passwords_match("Secret123", "Secret123"));
        assert!(!passwords_match("Secret123", "secret123"));
        assert!(!passwords_match("Secret123", "Secret123 "));
        assert!(passwords_match("", ""));
    }

    #[test]
    fn confirm_error_requires_length_and_mismatch() {
        let cases = [
            ("", "abcdefgh", false),
            ("abcdefg", "zzzzzzzz", false),
            ("abcdefgh", "abcdefgh", false),
            ("abcdefgh", "abcdefgX", true),
            ("abcdefgh", "short", true),
            ("abcdefghi", "", true),
        ];

        for (confirm, password, expected) in cases {
            assert_eq!(
                confirm_password_shows_error(confirm, password),
                char_len(confirm) > 7 && password != confirm,
                "confirm={confirm:?} password={password:?}"
            );
            assert_eq!(confirm_password_shows_error(confirm, password), expected);
        }
    }

    #[test]
    fn field_limit_boundary() {
        assert!(fits_field_limit(""));
        assert!(fits_field_limit(&"a".repeat(MAX_FIELD_LENGTH)));
        assert!(fits_field_limit(&"é".repeat(MAX_FIELD_LENGTH)));
        assert!(!fits_field_limit(&"a".repeat(MAX_FIELD_LENGTH + 1)));
        assert!(FIELD_TOO_LONG.contains(&MAX_FIELD_LENGTH.to_string()));
    }

    #[test]
    fn password_error_message() {
        assert_eq!(password_error("abcdefg"), Some(PASSWORD_TOO_SHORT));
        assert_eq!(password_error(""), Some(PASSWORD_TOO_SHORT));
        assert_eq!(password_error("abcdefgh"), None);
    }
}
