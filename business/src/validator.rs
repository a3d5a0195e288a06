//! URL validation for the generate action.
//!
//! Acceptance follows WHATWG URL parsing through `url::Url::parse`: any input
//! that parses as an absolute URL is accepted, whatever its scheme. There is no
//! reachability check.

use std::fmt;

use url::Url;

use crate::QrateError;

/// A string that passed [`validate`].
///
/// Holds the input exactly as typed. The parsed form is only used for the
/// check, so the symbol encodes what the user entered rather than a
/// normalized serialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedTarget(String);

impl ValidatedTarget {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidatedTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Checks that `input` is an absolute URL.
pub fn validate(input: &str) -> Result<ValidatedTarget, QrateError> {
    match Url::parse(input) {
        Ok(_) => Ok(ValidatedTarget(input.to_owned())),
        Err(err) => {
            log::debug!("Rejected URL input ({err})");
            Err(QrateError::InvalidUrl)
        }
    }
}

/// Predicate form of [`validate`].
pub fn is_valid_url(input: &str) -> bool {
    validate(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://example.com/path?q=1#frag"));
        assert!(is_valid_url("https://user:pw@example.com:8443/"));
    }

    #[test]
    fn test_accepts_any_scheme() {
        assert!(is_valid_url("ftp://files.example.com/a.txt"));
        assert!(is_valid_url("mailto:someone@example.com"));
        assert!(is_valid_url("otpauth://totp/QRate:alice?secret=JBSWY3DPEHPK3PXP"));
    }

    #[test]
    fn test_rejects_relative_and_plain_text() {
        for input in ["not a url", "", "example.com", "/just/a/path", "://missing-scheme"] {
            assert!(
                matches!(validate(input), Err(QrateError::InvalidUrl)),
                "`{input}` should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_invalid_authority() {
        assert!(!is_valid_url("http://"));
        assert!(!is_valid_url("https://exa mple.com"));
        assert!(!is_valid_url("http://[::1"));
    }

    #[test]
    fn test_target_keeps_input_verbatim() {
        let target = validate("HTTPS://Example.COM").expect("uppercase scheme is valid");
        assert_eq!(target.as_str(), "HTTPS://Example.COM");
        assert_eq!(target.to_string(), "HTTPS://Example.COM");
    }
}
