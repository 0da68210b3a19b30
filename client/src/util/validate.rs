//! Client-side form and argument validation.
//!
//! These mirror the backend's own checks so obviously bad input is rejected
//! before a request goes out, with the same messages the forms display.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::net::types::Price;

const PASSWORD_SYMBOLS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Shown next to password fields.
pub const PASSWORD_RULES: [&str; 5] = [
    "at least 8 characters",
    "has one lower case letter",
    "has one upper case letter",
    "has one digit",
    "has one special character",
];

/// Loose `something@something.something` check.
///
/// Matches anywhere in the input, like an unanchored `\S+@\S+\.\S+`.
pub fn is_valid_email(email: &str) -> bool {
    email.split_whitespace().any(|word| {
        let chars: Vec<char> = word.chars().collect();
        chars.iter().enumerate().any(|(at, &c)| {
            c == '@'
                && at > 0
                && chars
                    .iter()
                    .enumerate()
                    .any(|(dot, &d)| d == '.' && dot > at + 1 && dot + 1 < chars.len())
        })
    })
}

pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

/// Backend primary keys are never negative.
pub fn is_valid_id(id: i64) -> bool {
    id >= 0
}

pub fn is_valid_preparation_time(minutes: i64) -> bool {
    minutes > 0
}

/// Parse a price field: digits with up to two decimals, greater than zero.
///
/// # Errors
///
/// Returns the message shown under the price input.
pub fn parse_price(raw: &str) -> Result<Price, &'static str> {
    match Price::parse(raw) {
        Some(price) if price.cents() > 0 => Ok(price),
        _ => Err("Expecting a two decimal place positive number for price."),
    }
}

/// Parse a preparation time field in whole minutes.
///
/// # Errors
///
/// Returns the message shown under the preparation time input.
pub fn parse_preparation_time(raw: &str) -> Result<i64, &'static str> {
    match raw.trim().parse::<i64>() {
        Ok(minutes) if is_valid_preparation_time(minutes) => Ok(minutes),
        _ => Err("Expecting a whole positive number for preparation time."),
    }
}

/// Validate an account form (manager sign-up or staff creation).
///
/// `extra` holds any other required fields such as restaurant name and
/// location.
///
/// # Errors
///
/// Returns the first failing rule's message.
pub fn check_account_form(email: &str, password: &str, confirm: &str, extra: &[&str]) -> Result<(), &'static str> {
    let blank = [email, password, confirm]
        .iter()
        .chain(extra)
        .any(|field| field.trim().is_empty());
    if blank {
        return Err("Please fill in all the fields.");
    }
    if password != confirm {
        return Err("Passwords are not the same!");
    }
    if !is_valid_email(email) {
        return Err("Invalid email!");
    }
    if !is_strong_password(password) {
        return Err("Password doesn't fit the security requirements.");
    }
    Ok(())
}

/// Validate the sign-in form.
///
/// # Errors
///
/// Returns the message shown above the form.
pub fn check_sign_in(email: &str, password: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Please fill in all the fields.");
    }
    if !is_valid_email(email) {
        return Err("Invalid email!");
    }
    Ok(())
}
