//! Input validation applied before the domain logic runs.
//!
//! The stores assume non-blank text and a plausible email; these checks
//! establish that, trimming surrounding whitespace on the way.

use crate::{Error, Result};

/// Trim `value`, refusing it if nothing is left
pub(crate) fn non_blank(field: &'static str, value: &str, message: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_input(field, message));
    }
    Ok(trimmed.to_string())
}

/// Loose email shape check: `local@domain`, one `@`, no whitespace
pub(crate) fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

/// Validated student fields: (name, email)
pub(crate) fn student(name: &str, email: &str) -> Result<(String, String)> {
    let name = non_blank("name", name, "Student name cannot be blank")?;
    let email = non_blank("email", email, "Student email cannot be blank")?;
    if !is_valid_email(&email) {
        return Err(Error::invalid_input("email", "Invalid email format"));
    }
    Ok((name, email))
}

/// Validated course fields: (code, title, instructor)
pub(crate) fn course(code: &str, title: &str, instructor: &str) -> Result<(String, String, String)> {
    Ok((
        non_blank("code", code, "Please provide a course code")?,
        non_blank("title", title, "Please provide a course title")?,
        non_blank("instructor", instructor, "Please provide an instructor name")?,
    ))
}
