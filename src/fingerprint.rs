use std::collections::HashMap;

use parking_lot::RwLock;

use crate::types::{CodeHash, SubjectId};

/// Source of code fingerprints for subjects.
///
/// The execution environment supplies this. Implementations must be pure with
/// respect to the registry: looking up a fingerprint never changes state.
pub trait CodeFingerprintProvider {
    /// Returns the current fingerprint of `subject`'s code, or
    /// [`CodeHash::EMPTY`] if the subject has no code.
    fn code_hash_of(&self, subject: &SubjectId) -> CodeHash;
}

impl<P: CodeFingerprintProvider + ?Sized> CodeFingerprintProvider for &P {
    fn code_hash_of(&self, subject: &SubjectId) -> CodeHash {
        (**self).code_hash_of(subject)
    }
}

impl<P: CodeFingerprintProvider + ?Sized> CodeFingerprintProvider for std::sync::Arc<P> {
    fn code_hash_of(&self, subject: &SubjectId) -> CodeHash {
        (**self).code_hash_of(subject)
    }
}

/// In-memory fingerprint table.
///
/// Subjects that were never given code report the empty fingerprint. Code can
/// be replaced or cleared at any time, which lets callers model redeployments.
///
/// # Examples
///
/// ```
/// use audit_registry::{CodeFingerprintProvider, CodeHash, StaticFingerprints, SubjectId};
///
/// let fingerprints = StaticFingerprints::new();
/// let subject = SubjectId::new("0x01");
/// assert!(fingerprints.code_hash_of(&subject).is_empty());
///
/// fingerprints.set_code(subject.clone(), CodeHash::new([7u8; 32]));
/// assert_eq!(fingerprints.code_hash_of(&subject), CodeHash::new([7u8; 32]));
/// ```
#[derive(Debug, Default)]
pub struct StaticFingerprints {
    hashes: RwLock<HashMap<SubjectId, CodeHash>>,
}

impl StaticFingerprints {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fingerprint reported for `subject`.
    pub fn set_code(&self, subject: SubjectId, hash: CodeHash) {
        self.hashes.write().insert(subject, hash);
    }

    /// Removes the subject's code so it reports the empty fingerprint.
    pub fn clear_code(&self, subject: &SubjectId) {
        self.hashes.write().remove(subject);
    }
}

impl CodeFingerprintProvider for StaticFingerprints {
    fn code_hash_of(&self, subject: &SubjectId) -> CodeHash {
        self.hashes
            .read()
            .get(subject)
            .copied()
            .unwrap_or(CodeHash::EMPTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_subject_has_no_code() {
        let fingerprints = StaticFingerprints::new();
        assert_eq!(
            fingerprints.code_hash_of(&SubjectId::new("0xdead")),
            CodeHash::EMPTY
        );
    }

    #[test]
    fn code_can_be_replaced_and_cleared() {
        let fingerprints = StaticFingerprints::new();
        let subject = SubjectId::new("0x01");

        fingerprints.set_code(subject.clone(), CodeHash::new([1u8; 32]));
        fingerprints.set_code(subject.clone(), CodeHash::new([2u8; 32]));
        assert_eq!(fingerprints.code_hash_of(&subject), CodeHash::new([2u8; 32]));

        fingerprints.clear_code(&subject);
        assert!(fingerprints.code_hash_of(&subject).is_empty());
    }

    #[test]
    fn references_delegate() {
        let fingerprints = StaticFingerprints::new();
        let subject = SubjectId::new("0x02");
        fingerprints.set_code(subject.clone(), CodeHash::new([9u8; 32]));

        let by_ref = &fingerprints;
        assert_eq!(by_ref.code_hash_of(&subject), CodeHash::new([9u8; 32]));
    }
}
