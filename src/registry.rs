//! The audit-artifact registry.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::artifact::Artifact;
use crate::config::RegistryConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::events::{Notifier, RegistryEvent, RegistryListener};
use crate::fee::FeeSink;
use crate::fingerprint::CodeFingerprintProvider;
use crate::logging::CallLog;
use crate::request::CallMeta;
use crate::sanitizer::{ReportLinkSanitizer, Sanitizer};
use crate::tainted::Tainted;
use crate::types::{ArtifactId, CodeHash, SubjectId};

type SubjectCell = Arc<SubjectEntry>;

#[derive(Debug, Default)]
struct SubjectEntry {
    artifacts: Mutex<Vec<Artifact>>,
    // Mirrors `artifacts.len()`. Written only while `artifacts` is locked.
    len: AtomicUsize,
}

/// Outcome of a successful [`Registry::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddReceipt {
    /// Position of the new artifact in the subject's sequence
    pub index: usize,
    /// Stable identifier of the new artifact
    pub id: ArtifactId,
    /// Fingerprint pinned on the artifact
    pub code_hash: CodeHash,
}

/// Registry of audit report references, keyed by subject.
///
/// Each subject owns an ordered sequence of [`Artifact`]s in submission order.
/// Mutations of one subject are serialized by that subject's own lock, so
/// calls on different subjects never wait on each other.
///
/// Removal shifts later artifacts one position to the left: relative order is
/// preserved and positional indices at or after the removed slot decrease by
/// one. Use [`ArtifactId`]s for references that must survive removals.
///
/// A subject emptied by `remove` gives up its lock cell unless another call
/// is holding that cell at the same moment, so the map tracks subjects that
/// currently have artifacts plus at most a few emptied ones.
///
/// # Examples
///
/// ```
/// use audit_registry::{
///     CallMeta, CodeHash, FeeVault, NetworkId, Principal, Registry, RegistryConfig,
///     StaticFingerprints, SubjectId,
/// };
///
/// let fingerprints = StaticFingerprints::new();
/// let subject = SubjectId::new("0x5fbdb2315678afecb367f032d93f642f64180aa3");
/// fingerprints.set_code(subject.clone(), CodeHash::new([0xaa; 32]));
///
/// let config = RegistryConfig::new(NetworkId(1)).with_submission_fee(100);
/// let registry = Registry::new(config, fingerprints, FeeVault::new());
///
/// let alice = CallMeta::new("req-1", Principal::new("alice")).with_value(100);
/// let receipt = registry
///     .add(&alice, &subject, "https://audits.example/1", "Example Audits", Vec::new())
///     .expect("valid submission");
/// assert_eq!(receipt.index, 0);
///
/// let removed = registry.remove(&alice, &subject, 0).expect("owner may remove");
/// assert_eq!(removed.id(), receipt.id);
/// assert!(registry.artifacts(&subject).is_empty());
/// ```
#[derive(Debug)]
pub struct Registry<P, S> {
    config: RegistryConfig,
    fingerprints: P,
    fees: S,
    sanitizer: ReportLinkSanitizer,
    // Never held while waiting on a cell lock.
    subjects: RwLock<HashMap<SubjectId, SubjectCell>>,
    next_id: AtomicU64,
    notifier: Notifier,
}

impl<P, S> Registry<P, S>
where
    P: CodeFingerprintProvider,
    S: FeeSink,
{
    /// Creates an empty registry.
    pub fn new(config: RegistryConfig, fingerprints: P, fees: S) -> Self {
        Self {
            config,
            fingerprints,
            fees,
            sanitizer: ReportLinkSanitizer::new(),
            subjects: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            notifier: Notifier::new(),
        }
    }

    /// Returns the deployment configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Returns the fingerprint provider.
    pub fn fingerprints(&self) -> &P {
        &self.fingerprints
    }

    /// Returns the fee sink.
    pub fn fees(&self) -> &S {
        &self.fees
    }

    /// Subscribes a listener to `Added` and `Removed` notifications.
    pub fn subscribe(&self, listener: Arc<dyn RegistryListener>) {
        self.notifier.subscribe(listener);
    }

    /// Returns the subject's current code fingerprint as reported by the
    /// provider. May differ from the fingerprints pinned on its artifacts.
    pub fn code_hash(&self, subject: &SubjectId) -> CodeHash {
        self.fingerprints.code_hash_of(subject)
    }

    /// Returns the subject's artifacts in submission order, or an empty
    /// vector if it has none.
    pub fn artifacts(&self, subject: &SubjectId) -> Vec<Artifact> {
        self.cell(subject)
            .map(|cell| cell.artifacts.lock().clone())
            .unwrap_or_default()
    }

    /// Returns the number of artifacts attached to the subject.
    pub fn artifact_count(&self, subject: &SubjectId) -> usize {
        self.cell(subject)
            .map_or(0, |cell| cell.len.load(Ordering::Acquire))
    }

    /// Resolves a stable artifact id to its current position.
    pub fn position_of(&self, subject: &SubjectId, id: ArtifactId) -> Option<usize> {
        let cell = self.cell(subject)?;
        let artifacts = cell.artifacts.lock();
        artifacts.iter().position(|artifact| artifact.id() == id)
    }

    /// Returns every subject that currently has at least one artifact, sorted.
    pub fn subjects(&self) -> Vec<SubjectId> {
        let mut subjects: Vec<SubjectId> = self
            .subjects
            .read()
            .iter()
            .filter(|(_, cell)| cell.len.load(Ordering::Acquire) > 0)
            .map(|(subject, _)| subject.clone())
            .collect();
        subjects.sort();
        subjects
    }

    /// Attaches an audit report reference to `subject`.
    ///
    /// Checks run in this order and the first failure aborts the call:
    /// 1. `call.value` must equal the submission fee exactly
    ///    ([`ErrorKind::InvalidSubmissionFee`], also for overpayment)
    /// 2. the subject must have code ([`ErrorKind::NoCodeAtTarget`])
    /// 3. `link` must start with `https://`
    ///    ([`ErrorKind::InvalidReportLinkPrefix`])
    ///
    /// On success the artifact is appended with the subject's current
    /// fingerprint and the configured network id, the fee goes to the fee
    /// sink, and one `Added` event is emitted. `related` is stored as given.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] describing the first failed check. Nothing is
    /// stored, collected or emitted in that case.
    pub fn add(
        &self,
        call: &CallMeta,
        subject: &SubjectId,
        link: impl Into<String>,
        company: impl Into<String>,
        related: Vec<ArtifactId>,
    ) -> Result<AddReceipt> {
        let log = CallLog::new(call);

        let fee = self.config.submission_fee();
        if call.value != fee {
            log.warn(format_args!(
                "add rejected for {}: fee mismatch (expected {}, got {})",
                subject, fee, call.value
            ));
            return Err(Error::new(
                ErrorKind::InvalidSubmissionFee,
                format!("expected exactly {}, got {}", fee, call.value),
            ));
        }

        let code_hash = self.fingerprints.code_hash_of(subject);
        log.debug(format_args!("fingerprint of {} is {}", subject, code_hash));
        if code_hash.is_empty() {
            log.warn(format_args!("add rejected for {}: no code", subject));
            return Err(Error::new(
                ErrorKind::NoCodeAtTarget,
                format!("subject {} has no code", subject),
            ));
        }

        let link = self
            .sanitizer
            .sanitize(Tainted::new(link.into()))
            .map_err(|err| {
                log.warn(format_args!("add rejected for {}: {}", subject, err));
                Error::from(err)
            })?
            .into_inner();

        let cell = self.cell_or_insert(subject);
        let mut artifacts = cell.artifacts.lock();

        let id = ArtifactId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let owner = call.principal.clone();
        artifacts.push(Artifact::new(
            id,
            owner.clone(),
            code_hash,
            self.config.network_id(),
            link,
            company.into(),
            related,
        ));
        let index = artifacts.len() - 1;
        cell.len.store(artifacts.len(), Ordering::Release);

        self.fees.deposit(&call.principal, call.value);
        self.notifier.emit(&RegistryEvent::Added {
            subject: subject.clone(),
            index,
            id,
            owner,
        });
        drop(artifacts);

        log.info(format_args!(
            "added artifact {} to {} at index {}",
            id, subject, index
        ));
        Ok(AddReceipt {
            index,
            id,
            code_hash,
        })
    }

    /// Removes the artifact at `index` from `subject`'s sequence.
    ///
    /// Only the artifact's owner may remove it. Later artifacts shift one
    /// position to the left. Emits one `Removed` event and returns the
    /// removed artifact.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::InvalidArtifactIndex`] if `index` is out of bounds
    /// - [`ErrorKind::UnauthorizedAction`] if the caller is not the owner
    ///
    /// The sequence is unchanged on error.
    pub fn remove(&self, call: &CallMeta, subject: &SubjectId, index: usize) -> Result<Artifact> {
        let log = CallLog::new(call);

        let Some(cell) = self.cell(subject) else {
            log.warn(format_args!(
                "remove rejected for {}: index {} on empty subject",
                subject, index
            ));
            return Err(out_of_bounds(index, 0));
        };
        let mut artifacts = cell.artifacts.lock();

        let Some(target) = artifacts.get(index) else {
            log.warn(format_args!(
                "remove rejected for {}: index {} out of bounds",
                subject, index
            ));
            return Err(out_of_bounds(index, artifacts.len()));
        };

        if target.owner() != &call.principal {
            log.warn(format_args!(
                "remove rejected for {}: caller does not own artifact {}",
                subject,
                target.id()
            ));
            return Err(Error::new(
                ErrorKind::UnauthorizedAction,
                format!(
                    "{} does not own artifact {} at index {}",
                    call.principal,
                    target.id(),
                    index
                ),
            ));
        }

        let removed = artifacts.remove(index);
        cell.len.store(artifacts.len(), Ordering::Release);
        self.notifier.emit(&RegistryEvent::Removed {
            subject: subject.clone(),
            index,
            id: removed.id(),
            owner: removed.owner().clone(),
        });
        drop(artifacts);

        log.info(format_args!(
            "removed artifact {} from {} at index {}",
            removed.id(),
            subject,
            index
        ));
        if cell.len.load(Ordering::Acquire) == 0 {
            self.release_if_unused(subject, cell);
        }
        Ok(removed)
    }

    fn cell(&self, subject: &SubjectId) -> Option<SubjectCell> {
        self.subjects.read().get(subject).cloned()
    }

    fn cell_or_insert(&self, subject: &SubjectId) -> SubjectCell {
        if let Some(cell) = self.cell(subject) {
            return cell;
        }
        self.subjects
            .write()
            .entry(subject.clone())
            .or_default()
            .clone()
    }

    // Drops an emptied cell from the map. New handles can only be taken
    // through the map, so under the write lock a count of two (the map and
    // `cell`) means no other call can still push into it.
    fn release_if_unused(&self, subject: &SubjectId, cell: SubjectCell) {
        let mut subjects = self.subjects.write();
        let unused = subjects.get(subject).is_some_and(|current| {
            Arc::ptr_eq(current, &cell)
                && Arc::strong_count(&cell) == 2
                && cell.len.load(Ordering::Acquire) == 0
        });
        if unused {
            subjects.remove(subject);
            tracing::debug!(subject = %subject, "released empty subject cell");
        }
    }
}

fn out_of_bounds(index: usize, len: usize) -> Error {
    Error::new(
        ErrorKind::InvalidArtifactIndex,
        format!("index {} out of bounds for {} artifacts", index, len),
    )
}
