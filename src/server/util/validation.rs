//! Input rules applied before anything reaches the database.

use std::sync::LazyLock;

use regex::Regex;

use crate::server::error::AppError;

pub const MAX_USERNAME_LEN: usize = 255;
pub const MAX_TITLE_LEN: usize = 255;
pub const MAX_TAG_LEN: usize = 50;
pub const MAX_CHARACTER_NAME_LEN: usize = 50;
const MIN_PASSWORD_LEN: usize = 8;
const PASSWORD_SYMBOLS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

/// Trims and checks an email address.
pub fn validate_email(email: &str) -> Result<String, AppError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AppError::BadRequest("Email is required".to_string()));
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(AppError::BadRequest(
            "Please enter a valid email address".to_string(),
        ));
    }

    Ok(email.to_string())
}

/// Checks password strength, naming every rule the password misses.
pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.is_empty() {
        return Err(AppError::BadRequest("Password is required".to_string()));
    }

    let mut missing = Vec::new();
    if password.chars().count() < MIN_PASSWORD_LEN {
        missing.push(format!("at least {} characters", MIN_PASSWORD_LEN));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        missing.push("one uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        missing.push("one lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        missing.push("one number".to_string());
    }
    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        missing.push("one symbol (!@#$%^&*()_+-=[]{}|;:,.<>?)".to_string());
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Password must contain {}",
            missing.join(", ")
        )))
    }
}

pub fn validate_username(username: &str) -> Result<String, AppError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AppError::BadRequest("Username is required".to_string()));
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(AppError::BadRequest(format!(
            "Username must be at most {} characters",
            MAX_USERNAME_LEN
        )));
    }

    Ok(username.to_string())
}

pub fn validate_title(title: &str) -> Result<String, AppError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::BadRequest("Title and content are required.".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(AppError::BadRequest(format!(
            "Title must be at most {} characters",
            MAX_TITLE_LEN
        )));
    }

    Ok(title.to_string())
}

pub fn validate_content(content: &str) -> Result<(), AppError> {
    if content.trim().is_empty() {
        return Err(AppError::BadRequest("Title and content are required.".to_string()));
    }

    Ok(())
}

/// Trims tags, drops empty ones and collapses duplicates keeping first-seen order.
pub fn normalize_tags(tags: Vec<String>) -> Result<Vec<String>, AppError> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());

    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() || normalized.iter().any(|existing| existing == tag) {
            continue;
        }
        if tag.chars().count() > MAX_TAG_LEN {
            return Err(AppError::BadRequest(format!(
                "Tag '{}' must be at most {} characters",
                tag, MAX_TAG_LEN
            )));
        }
        normalized.push(tag.to_string());
    }

    Ok(normalized)
}

/// Character names are letters and spaces only.
pub fn validate_character_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Character name is required".to_string()));
    }
    if name.chars().count() > MAX_CHARACTER_NAME_LEN
        || !name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
    {
        return Err(AppError::BadRequest(format!(
            "Character name must be at most {} letters and spaces",
            MAX_CHARACTER_NAME_LEN
        )));
    }

    Ok(name.to_string())
}

/// Requires a non-blank value, naming the field in the error.
pub fn require(value: &str, field: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }

    Ok(value.to_string())
}
