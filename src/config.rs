use crate::types::{Amount, NetworkId};

/// Submission fee used when none is configured: 10^15 base units.
pub const DEFAULT_SUBMISSION_FEE: Amount = 1_000_000_000_000_000;

/// Deployment-time settings of a [`Registry`](crate::Registry).
///
/// The values are fixed once the registry is constructed; no operation can
/// change them.
///
/// # Examples
///
/// ```
/// use audit_registry::{NetworkId, RegistryConfig, DEFAULT_SUBMISSION_FEE};
///
/// let config = RegistryConfig::new(NetworkId(1));
/// assert_eq!(config.submission_fee(), DEFAULT_SUBMISSION_FEE);
///
/// let config = config.with_submission_fee(500);
/// assert_eq!(config.submission_fee(), 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    network_id: NetworkId,
    submission_fee: Amount,
}

impl RegistryConfig {
    /// Creates a configuration for the given network with the default fee.
    pub fn new(network_id: NetworkId) -> Self {
        Self {
            network_id,
            submission_fee: DEFAULT_SUBMISSION_FEE,
        }
    }

    /// Sets the exact amount every `add` call must carry.
    pub fn with_submission_fee(mut self, fee: Amount) -> Self {
        self.submission_fee = fee;
        self
    }

    /// Returns the network identifier stamped on new artifacts.
    pub fn network_id(&self) -> NetworkId {
        self.network_id
    }

    /// Returns the submission fee.
    pub fn submission_fee(&self) -> Amount {
        self.submission_fee
    }
}
