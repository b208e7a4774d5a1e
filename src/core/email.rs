//! Email shape check for waitlist sign-ups
//!
//! A permissive, RFC-5322-like pattern: it rejects obvious typos without trying
//! to be a full address parser. The same check runs in the browser before a
//! submission and on the server when the registration arrives.

use std::sync::LazyLock;

use regex::Regex;

use super::waitlist::WaitlistError;

/// Local part: dot-separated atoms without specials, or a quoted string.
/// Domain: a bracketed IPv4 literal, or hostname labels ending in a TLD of
/// at least two letters.
///
/// Matched case-sensitively against lowercased input. `\x{FEFF}` counts as
/// whitespace and a quoted local part may not span a line break.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(?:[^<>()\[\]\\.,;:\s\x{FEFF}@"]+(?:\.[^<>()\[\]\\.,;:\s\x{FEFF}@"]+)*|"[^\n\r\x{2028}\x{2029}]+")@(?:\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\]|(?:[a-z0-9-]+\.)+[a-z]{2,})$"#,
    )
    .expect("email pattern is a valid regex")
});

/// Check whether `input` has the shape of an email address.
///
/// No trimming is done here; see [`normalize_email`].
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_PATTERN.is_match(&input.to_lowercase())
}

/// Trim raw form input and validate it.
///
/// Returns the trimmed address, or the error kind the form should display:
/// [`WaitlistError::MissingEmail`] for empty (or whitespace-only) input and
/// [`WaitlistError::InvalidFormat`] when the shape check fails.
pub fn normalize_email(raw: &str) -> Result<&str, WaitlistError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(WaitlistError::MissingEmail);
    }

    if !is_valid_email(trimmed) {
        return Err(WaitlistError::InvalidFormat);
    }

    Ok(trimmed)
}

/// Domain part of an address, used when logging registrations without the
/// full address.
pub fn email_domain(email: &str) -> Option<&str> {
    email.rsplit_once('@').map(|(_, domain)| domain)
}
