use std::fmt;

/// A caller-supplied value that has not been validated yet.
///
/// Registry operations wrap untrusted inputs such as report links in
/// `Tainted<T>` as soon as they cross the API boundary. The only way back to
/// the raw value is through a [`Sanitizer`](crate::Sanitizer), which yields a
/// [`Verified<T>`](crate::Verified) on success.
///
/// # Examples
///
/// ```
/// use audit_registry::Tainted;
///
/// let link = Tainted::new("invalid://foo".to_string());
///
/// // Debug output marks the value as tainted
/// assert!(format!("{:?}", link).starts_with("Tainted"));
///
/// // The raw string cannot be borrowed or dereferenced:
/// // let s: &String = link.as_ref(); // Won't compile!
/// ```
#[derive(Clone)]
pub struct Tainted<T> {
    // Must stay private; callers go through a Sanitizer.
    inner: T,
}

impl<T> Tainted<T> {
    /// Wraps an untrusted value.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Extracts the inner value for validation.
    ///
    /// Only sanitizer implementations inside this crate call this, and only
    /// to validate the value before wrapping it in `Verified<T>`.
    pub(crate) fn into_inner(self) -> T {
        self.inner
    }
}

// No Deref, AsRef, Borrow or From impls: they would let unvalidated links
// reach the registry state.

impl<T: fmt::Debug> fmt::Debug for Tainted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tainted")
            .field("inner", &self.inner)
            .finish()
    }
}
