//! Audit artifacts attached to subjects.

use std::fmt;

use crate::types::{ArtifactId, CodeHash, NetworkId, Principal};

/// One audit report reference attached to a subject.
///
/// Every field is fixed at creation. Artifacts are only created by a
/// successful `add` and only destroyed by a successful `remove`; there is no
/// update path.
///
/// `code_hash` is the subject's fingerprint as observed when the artifact was
/// added. It is never recomputed, so it keeps pointing at the audited code
/// even after the subject is redeployed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    id: ArtifactId,
    owner: Principal,
    code_hash: CodeHash,
    network_id: NetworkId,
    link: String,
    company: String,
    related: Vec<ArtifactId>,
}

impl Artifact {
    pub(crate) fn new(
        id: ArtifactId,
        owner: Principal,
        code_hash: CodeHash,
        network_id: NetworkId,
        link: String,
        company: String,
        related: Vec<ArtifactId>,
    ) -> Self {
        Self {
            id,
            owner,
            code_hash,
            network_id,
            link,
            company,
            related,
        }
    }

    /// Returns the stable identifier.
    pub fn id(&self) -> ArtifactId {
        self.id
    }

    /// Returns the principal that submitted the artifact.
    pub fn owner(&self) -> &Principal {
        &self.owner
    }

    /// Returns the subject fingerprint pinned at submission.
    pub fn code_hash(&self) -> CodeHash {
        self.code_hash
    }

    /// Returns the network the submission happened on.
    pub fn network_id(&self) -> NetworkId {
        self.network_id
    }

    /// Returns the report link.
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Returns the auditing company as attested by the submitter.
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Returns cross-references to other artifacts of the same subject.
    ///
    /// References are stored as given and not checked; a referenced artifact
    /// may have been removed since.
    pub fn related(&self) -> &[ArtifactId] {
        &self.related
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Artifact[id={}, owner={}, network={}, code_hash={}, company={}, link={}",
            self.id, self.owner, self.network_id, self.code_hash, self.company, self.link
        )?;
        if !self.related.is_empty() {
            let related: Vec<String> = self.related.iter().map(ToString::to_string).collect();
            write!(f, ", related=[{}]", related.join(", "))?;
        }
        write!(f, "]")
    }
}
