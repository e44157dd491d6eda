//! Registry of third-party audit report references.
//!
//! Anyone may attach a reference to an audit report to a *subject* (an
//! address-like identifier of deployed code). Each reference is pinned to the
//! fingerprint of the subject's code at submission time, so readers can tell
//! which code was audited even after a redeploy.
//!
//! - **Fixed fee**: `add` must carry exactly the configured fee; over- and
//!   underpayment are both rejected
//! - **Pinned code**: the subject's fingerprint is captured once and never
//!   recomputed
//! - **Link validation**: report links must start with `https://`
//! - **Owner-only removal**: only the submitter may remove an artifact
//!
//! # Core Types
//!
//! - [`Registry`]: owns all state and implements `add` / `remove` and queries
//! - [`Artifact`]: one audit report reference
//! - [`CodeFingerprintProvider`]: injected source of code fingerprints
//! - [`FeeSink`]: destination for accepted fees
//! - [`RegistryListener`]: observer of `Added` / `Removed` notifications
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use audit_registry::{
//!     CallMeta, CodeHash, ErrorKind, EventLog, FeeVault, NetworkId, Principal, Registry,
//!     RegistryConfig, StaticFingerprints, SubjectId,
//! };
//!
//! let fingerprints = StaticFingerprints::new();
//! let subject = SubjectId::new("0x01");
//! fingerprints.set_code(subject.clone(), CodeHash::new([1u8; 32]));
//!
//! let registry = Registry::new(
//!     RegistryConfig::new(NetworkId(1)).with_submission_fee(10),
//!     fingerprints,
//!     FeeVault::new(),
//! );
//! let events = Arc::new(EventLog::new());
//! registry.subscribe(events.clone());
//!
//! let alice = CallMeta::new("req-1", Principal::new("alice")).with_value(10);
//! registry
//!     .add(&alice, &subject, "https://audits.example/1", "Example Audits", Vec::new())
//!     .expect("valid submission");
//!
//! let bob = CallMeta::new("req-2", Principal::new("bob"));
//! let err = registry.remove(&bob, &subject, 0).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnauthorizedAction);
//!
//! assert_eq!(registry.artifacts(&subject).len(), 1);
//! assert_eq!(events.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod artifact;
mod config;
mod error;
pub mod events;
mod fee;
mod fingerprint;
mod logging;
mod registry;
mod request;
mod sanitizer;
mod tainted;
mod types;
mod verified;

#[cfg(test)]
mod test_utils;

pub use artifact::Artifact;
pub use config::{RegistryConfig, DEFAULT_SUBMISSION_FEE};
pub use error::{Error, ErrorKind, Result};
pub use events::{EventKind, EventLog, Notifier, RegistryEvent, RegistryListener};
pub use fee::{FeeSink, FeeVault};
pub use fingerprint::{CodeFingerprintProvider, StaticFingerprints};
pub use registry::{AddReceipt, Registry};
pub use request::CallMeta;
pub use sanitizer::{
    ReportLinkSanitizer, SanitizationError, SanitizationErrorKind, Sanitizer, REPORT_LINK_PREFIX,
};
pub use tainted::Tainted;
pub use types::{Amount, ArtifactId, CodeHash, NetworkId, Principal, SubjectId};
pub use verified::Verified;
