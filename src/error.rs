use std::fmt;

use crate::sanitizer::SanitizationError;

/// Result alias used by every registry operation.
pub type Result<T> = std::result::Result<T, Error>;

/// A rejected registry operation.
///
/// Every failure is all-or-nothing: when an operation returns `Err`, no state
/// was changed, no fee was collected and no notification was emitted.
///
/// # Examples
///
/// ```
/// use audit_registry::{Error, ErrorKind};
///
/// let error = Error::new(ErrorKind::NoCodeAtTarget, "subject has no code");
/// assert_eq!(error.kind(), ErrorKind::NoCodeAtTarget);
/// assert_eq!(error.message(), "subject has no code");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    /// Creates a new error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Error {}

impl From<SanitizationError> for Error {
    fn from(err: SanitizationError) -> Self {
        Error::new(ErrorKind::InvalidReportLinkPrefix, err.message())
    }
}

/// The kind of rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The attached amount was not exactly the submission fee
    InvalidSubmissionFee,
    /// The subject has no code to pin
    NoCodeAtTarget,
    /// The report link does not start with `https://`
    InvalidReportLinkPrefix,
    /// The index is past the end of the subject's artifacts
    InvalidArtifactIndex,
    /// The caller does not own the artifact
    UnauthorizedAction,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidSubmissionFee => write!(f, "invalid submission fee"),
            ErrorKind::NoCodeAtTarget => write!(f, "no code at target"),
            ErrorKind::InvalidReportLinkPrefix => write!(f, "invalid report link prefix"),
            ErrorKind::InvalidArtifactIndex => write!(f, "invalid artifact index"),
            ErrorKind::UnauthorizedAction => write!(f, "unauthorized action"),
        }
    }
}
