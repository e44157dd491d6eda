use std::fmt;

use crate::{Tainted, Verified};

/// Literal prefix every report link must start with.
pub const REPORT_LINK_PREFIX: &str = "https://";

/// Error returned when a tainted value fails validation.
///
/// The message never echoes the rejected input.
///
/// # Examples
///
/// ```
/// use audit_registry::{SanitizationError, SanitizationErrorKind};
///
/// let error = SanitizationError::new(SanitizationErrorKind::MissingPrefix, "not https");
/// assert_eq!(error.kind(), SanitizationErrorKind::MissingPrefix);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizationError {
    kind: SanitizationErrorKind,
    message: String,
}

impl SanitizationError {
    /// Creates a new sanitization error.
    pub fn new(kind: SanitizationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> SanitizationErrorKind {
        self.kind
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SanitizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sanitization failed ({}): {}", self.kind, self.message)
    }
}

impl std::error::Error for SanitizationError {}

/// Kind of sanitization error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizationErrorKind {
    /// Input does not begin with the required prefix.
    MissingPrefix,
}

impl fmt::Display for SanitizationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPrefix => write!(f, "missing required prefix"),
        }
    }
}

/// Promotes tainted values to verified values.
///
/// Implementations validate the input and call `Verified::new_unchecked`
/// only once every check has passed.
pub trait Sanitizer<T> {
    /// Validates `input`, returning the verified value on success.
    ///
    /// # Errors
    ///
    /// Returns `SanitizationError` if the input fails validation.
    fn sanitize(&self, input: Tainted<T>) -> Result<Verified<T>, SanitizationError>;
}

/// Validates report links.
///
/// The check is purely syntactic: the link must start with the literal
/// [`REPORT_LINK_PREFIX`]. The value is neither trimmed nor normalized, so
/// `" https://x"` and `"HTTPS://x"` are rejected. The report itself is never
/// fetched.
///
/// # Examples
///
/// ```
/// use audit_registry::{ReportLinkSanitizer, Sanitizer, Tainted};
///
/// let sanitizer = ReportLinkSanitizer::new();
///
/// let ok = sanitizer.sanitize(Tainted::new("https://audits.example/report.pdf".to_string()));
/// assert!(ok.is_ok());
///
/// let bad = sanitizer.sanitize(Tainted::new("invalid://foo".to_string()));
/// assert!(bad.is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportLinkSanitizer {
    _private: (),
}

impl ReportLinkSanitizer {
    /// Creates a new report link sanitizer.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Sanitizer<String> for ReportLinkSanitizer {
    fn sanitize(&self, input: Tainted<String>) -> Result<Verified<String>, SanitizationError> {
        let raw = input.into_inner();

        if !raw.starts_with(REPORT_LINK_PREFIX) {
            return Err(SanitizationError::new(
                SanitizationErrorKind::MissingPrefix,
                format!("report link must start with '{}'", REPORT_LINK_PREFIX),
            ));
        }

        Ok(Verified::new_unchecked(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(link: &str) -> Result<Verified<String>, SanitizationError> {
        ReportLinkSanitizer::new().sanitize(Tainted::new(link.to_string()))
    }

    #[test]
    fn accepts_https_links() {
        let verified = check("https://audits.example/reports/42").expect("valid link");
        assert_eq!(verified.as_ref(), "https://audits.example/reports/42");
    }

    #[test]
    fn accepts_bare_prefix() {
        assert!(check("https://").is_ok());
    }

    #[test]
    fn rejects_other_schemes() {
        for link in ["invalid://foo", "http://audits.example", "ipfs://Qm", "ftp://x"] {
            let error = check(link).unwrap_err();
            assert_eq!(error.kind(), SanitizationErrorKind::MissingPrefix);
        }
    }

    #[test]
    fn rejects_malformed_and_empty() {
        assert!(check("").is_err());
        assert!(check("https:/").is_err());
        assert!(check("audits.example").is_err());
    }

    #[test]
    fn does_not_trim_or_fold_case() {
        assert!(check(" https://audits.example").is_err());
        assert!(check("HTTPS://audits.example").is_err());
    }

    #[test]
    fn error_does_not_echo_input() {
        let error = check("invalid://secret-report-path").unwrap_err();
        assert!(!error.to_string().contains("secret-report-path"));
    }

    #[test]
    fn error_kind_display() {
        assert_eq!(
            SanitizationErrorKind::MissingPrefix.to_string(),
            "missing required prefix"
        );
    }

    mod proptests {
        use super::*;
        use crate::test_utils::{arb_https_link, arb_non_https_link};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn proptest_https_links_always_pass(link in arb_https_link()) {
                prop_assert!(check(&link).is_ok());
            }

            #[test]
            fn proptest_other_links_always_fail(link in arb_non_https_link()) {
                let error = check(&link).unwrap_err();
                prop_assert_eq!(error.kind(), SanitizationErrorKind::MissingPrefix);
            }
        }
    }
}
