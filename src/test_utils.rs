//! Shared fixtures and proptest strategies for unit tests.

use std::sync::Arc;

use proptest::prelude::*;

use crate::events::EventLog;
use crate::fee::FeeVault;
use crate::fingerprint::StaticFingerprints;
use crate::request::CallMeta;
use crate::types::{Amount, CodeHash, NetworkId, Principal, SubjectId};
use crate::{Registry, RegistryConfig};

pub(crate) const FEE: Amount = 1_000;
pub(crate) const NETWORK: NetworkId = NetworkId(31337);

pub(crate) struct Fixture {
    pub(crate) registry: Registry<Arc<StaticFingerprints>, Arc<FeeVault>>,
    pub(crate) fingerprints: Arc<StaticFingerprints>,
    pub(crate) vault: Arc<FeeVault>,
    pub(crate) events: Arc<EventLog>,
    pub(crate) subject: SubjectId,
    pub(crate) code: CodeHash,
}

/// A registry with one subject that has code and an event log subscribed.
pub(crate) fn fixture() -> Fixture {
    let fingerprints = Arc::new(StaticFingerprints::new());
    let vault = Arc::new(FeeVault::new());
    let events = Arc::new(EventLog::new());
    let subject = SubjectId::new("0x000000000000000000000000000000000000a11c");
    let code = CodeHash::new([0xc0; 32]);
    fingerprints.set_code(subject.clone(), code);

    let registry = Registry::new(
        RegistryConfig::new(NETWORK).with_submission_fee(FEE),
        fingerprints.clone(),
        vault.clone(),
    );
    registry.subscribe(events.clone());

    Fixture {
        registry,
        fingerprints,
        vault,
        events,
        subject,
        code,
    }
}

pub(crate) fn call(who: &str, value: Amount) -> CallMeta {
    CallMeta::new(format!("req-{}", who), Principal::new(who)).with_value(value)
}

/// Links that start with `https://`.
pub(crate) fn arb_https_link() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9.-]{1,20}(/[A-Za-z0-9._~%-]{0,16}){0,4}")
        .unwrap()
        .prop_map(|rest| format!("https://{}", rest))
}

/// Links that do not start with `https://`.
pub(crate) fn arb_non_https_link() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ A-Za-z]{0,8}(:/{0,3})?[a-z0-9./]{0,20}")
        .unwrap()
        .prop_filter("must not carry the https prefix", |link| {
            !link.starts_with("https://")
        })
}
