//! Client-side form checks run before a request is sent.
//!
//! Messages are shown verbatim in error toasts.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Number of digits in a password-reset code.
pub const OTP_LENGTH: usize = 4;
pub const MIN_PASSWORD_LEN: usize = 8;

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match";
pub const INCOMPLETE_OTP: &str = "Please enter the complete 4-digit code";

/// Trim and check an email address.
///
/// # Errors
///
/// Returns [`INVALID_EMAIL`] unless the input looks like `local@domain.tld`.
pub fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return Err(INVALID_EMAIL);
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(INVALID_EMAIL);
    };
    let labels_ok = domain.contains('.') && domain.split('.').all(|label| !label.is_empty() && !label.starts_with('-'));
    if local.is_empty() || local.starts_with('.') || local.ends_with('.') || domain.contains('@') || !labels_ok {
        return Err(INVALID_EMAIL);
    }
    Ok(email.to_owned())
}

/// Check sign-in input: both fields are required.
///
/// # Errors
///
/// Returns a message naming the missing field.
pub fn validate_sign_in(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required");
    }
    if password.is_empty() {
        return Err("Password is required");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Check a new password against its confirmation and the strength rules.
/// The confirmation is checked first.
///
/// # Errors
///
/// Returns the first failing rule's message.
pub fn validate_new_password(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password != confirm {
        return Err(PASSWORDS_DIFFER);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("Must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Must contain at least one number");
    }
    Ok(())
}

/// Whether `value` may be placed in a single OTP box (one digit or empty).
pub fn is_otp_digit_input(value: &str) -> bool {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (None, _) => true,
        (Some(c), None) => c.is_ascii_digit(),
        _ => false,
    }
}

/// Split pasted text into OTP digits when it is exactly [`OTP_LENGTH`] digits.
pub fn parse_pasted_otp(raw: &str) -> Option<[String; OTP_LENGTH]> {
    let trimmed = raw.trim();
    if trimmed.len() != OTP_LENGTH || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let mut digits: [String; OTP_LENGTH] = Default::default();
    for (slot, c) in digits.iter_mut().zip(trimmed.chars()) {
        *slot = c.to_string();
    }
    Some(digits)
}

/// Join OTP boxes into the code to submit.
///
/// # Errors
///
/// Returns [`INCOMPLETE_OTP`] unless every box holds a digit.
pub fn join_otp(digits: &[String]) -> Result<String, &'static str> {
    let code: String = digits.concat();
    if code.len() == OTP_LENGTH && code.chars().all(|c| c.is_ascii_digit()) {
        Ok(code)
    } else {
        Err(INCOMPLETE_OTP)
    }
}
