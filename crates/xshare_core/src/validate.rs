use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile")
});

static PASSWORD_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9@$!%*#?&]{8,}$").expect("password regex should compile")
});

static HAS_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]").expect("letter regex should compile"));

static HAS_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]").expect("digit regex should compile"));

pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// At least 8 characters from letters, digits and `@$!%*#?&`, with at least
/// one letter and one digit.
pub fn validate_password(password: &str) -> bool {
    PASSWORD_CHARSET.is_match(password)
        && HAS_LETTER.is_match(password)
        && HAS_DIGIT.is_match(password)
}
