//! Field validation mirroring backend constraints.
//!
//! Generated users are written straight into storage at startup, so they must
//! pass the same checks the HTTP layer applies to client payloads:
//!
//! - Names: between 1 and [`NAME_MAX`] characters, ASCII letters plus `'` and
//!   `-`, starting with a letter
//! - Email: `local@domain.tld` with no whitespace and exactly one `@`

/// Maximum allowed length for a generated first or last name.
pub const NAME_MAX: usize = 32;

/// Validates a generated first or last name.
///
/// # Examples
///
/// ```
/// use example_data::is_valid_name;
///
/// assert!(is_valid_name("Ada"));
/// assert!(is_valid_name("O'Brien"));
/// assert!(!is_valid_name(""));
/// assert!(!is_valid_name("  "));
/// assert!(!is_valid_name("Zoë"));
/// ```
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    let length = name.chars().count();
    if !(1..=NAME_MAX).contains(&length) {
        return false;
    }
    if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return false;
    }
    name.chars().all(is_valid_name_char)
}

const fn is_valid_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '\'' || c == '-'
}

/// Validates an email address with the same shape the backend accepts.
///
/// # Examples
///
/// ```
/// use example_data::is_valid_email;
///
/// assert!(is_valid_email("a@b.com"));
/// assert!(!is_valid_email("email"));
/// assert!(!is_valid_email("a@b"));
/// assert!(!is_valid_email("a b@c.com"));
/// ```
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .rsplit_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Lower-case slug of a name for use in email local parts and avatar URLs.
///
/// Keeps ASCII letters only, so `O'Brien` becomes `obrien`.
#[must_use]
pub(crate) fn slug(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
