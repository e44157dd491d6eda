/// A value that passed validation and may enter registry state.
///
/// `Verified<T>` has no public constructor. Inside this crate it is produced
/// only by [`Sanitizer`](crate::Sanitizer) implementations after their checks
/// succeed, so holding one is proof that the value was validated.
///
/// # Examples
///
/// ```
/// use audit_registry::{ReportLinkSanitizer, Sanitizer, Tainted};
///
/// let sanitizer = ReportLinkSanitizer::new();
/// let link = sanitizer
///     .sanitize(Tainted::new("https://audits.example/r/1".to_string()))
///     .expect("https link");
///
/// assert_eq!(link.as_ref(), "https://audits.example/r/1");
/// let owned: String = link.into_inner();
/// assert!(owned.starts_with("https://"));
/// ```
///
/// ```compile_fail
/// use audit_registry::Verified;
///
/// // No public constructor:
/// let verified = Verified::new("https://x".to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verified<T> {
    inner: T,
}

impl<T> Verified<T> {
    /// Wraps a value without validating it.
    ///
    /// Callers must have validated `value` already.
    pub(crate) fn new_unchecked(value: T) -> Self {
        Self { inner: value }
    }

    /// Consumes the wrapper and returns the validated value.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> AsRef<T> for Verified<T> {
    fn as_ref(&self) -> &T {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verified_as_ref_does_not_consume() {
        let verified = Verified::new_unchecked("https://a.example".to_string());

        let first = verified.as_ref().clone();
        let second = verified.as_ref().clone();
        assert_eq!(first, second);

        assert_eq!(verified.into_inner(), "https://a.example");
    }

    #[test]
    fn verified_debug_shows_value() {
        let verified = Verified::new_unchecked(3u32);
        let debug_output = format!("{:?}", verified);

        assert!(debug_output.contains("Verified"));
        assert!(debug_output.contains('3'));
    }

    mod proptests {
        use super::*;
        use crate::{sanitizer::ReportLinkSanitizer, test_utils::arb_https_link, Sanitizer, Tainted};
        use proptest::prelude::*;

        proptest! {
            /// Accepted links pass through sanitization byte-for-byte
            #[test]
            fn proptest_tainted_to_verified_preserves_link(link in arb_https_link()) {
                let sanitizer = ReportLinkSanitizer::new();
                let verified = sanitizer
                    .sanitize(Tainted::new(link.clone()))
                    .expect("https link should pass");

                prop_assert_eq!(verified.as_ref(), &link);
                prop_assert_eq!(verified.into_inner(), link);
            }
        }
    }
}
