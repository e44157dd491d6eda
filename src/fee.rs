use std::collections::HashMap;

use parking_lot::Mutex;

use crate::types::{Amount, Principal};

/// Destination for accepted submission fees.
///
/// The registry calls `deposit` exactly once per successful `add`, after all
/// validation has passed. Rejected calls never reach the sink. Custody and
/// withdrawal are the sink's business.
pub trait FeeSink {
    /// Records `amount` paid by `from`.
    fn deposit(&self, from: &Principal, amount: Amount);
}

impl<S: FeeSink + ?Sized> FeeSink for &S {
    fn deposit(&self, from: &Principal, amount: Amount) {
        (**self).deposit(from, amount)
    }
}

impl<S: FeeSink + ?Sized> FeeSink for std::sync::Arc<S> {
    fn deposit(&self, from: &Principal, amount: Amount) {
        (**self).deposit(from, amount)
    }
}

/// In-memory fee sink that tallies collected fees.
///
/// # Examples
///
/// ```
/// use audit_registry::{FeeSink, FeeVault, Principal};
///
/// let vault = FeeVault::new();
/// let alice = Principal::new("alice");
///
/// vault.deposit(&alice, 10);
/// vault.deposit(&alice, 10);
///
/// assert_eq!(vault.total(), 20);
/// assert_eq!(vault.paid_by(&alice), 20);
/// assert_eq!(vault.deposits(), 2);
/// ```
#[derive(Debug, Default)]
pub struct FeeVault {
    inner: Mutex<VaultState>,
}

#[derive(Debug, Default)]
struct VaultState {
    total: Amount,
    deposits: usize,
    by_payer: HashMap<Principal, Amount>,
}

impl FeeVault {
    /// Creates an empty vault.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sum of all deposits.
    pub fn total(&self) -> Amount {
        self.inner.lock().total
    }

    /// Returns the number of deposits received.
    pub fn deposits(&self) -> usize {
        self.inner.lock().deposits
    }

    /// Returns the sum deposited by `payer`.
    pub fn paid_by(&self, payer: &Principal) -> Amount {
        self.inner
            .lock()
            .by_payer
            .get(payer)
            .copied()
            .unwrap_or(0)
    }
}

impl FeeSink for FeeVault {
    fn deposit(&self, from: &Principal, amount: Amount) {
        let mut state = self.inner.lock();
        state.total = state.total.saturating_add(amount);
        state.deposits += 1;
        let paid = state.by_payer.entry(from.clone()).or_insert(0);
        *paid = paid.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vault_starts_empty() {
        let vault = FeeVault::new();
        assert_eq!(vault.total(), 0);
        assert_eq!(vault.deposits(), 0);
        assert_eq!(vault.paid_by(&Principal::new("nobody")), 0);
    }

    #[test]
    fn vault_tracks_payers_separately() {
        let vault = FeeVault::new();
        let alice = Principal::new("alice");
        let bob = Principal::new("bob");

        vault.deposit(&alice, 5);
        vault.deposit(&bob, 7);
        vault.deposit(&alice, 5);

        assert_eq!(vault.total(), 17);
        assert_eq!(vault.deposits(), 3);
        assert_eq!(vault.paid_by(&alice), 10);
        assert_eq!(vault.paid_by(&bob), 7);
    }

    fn collect<S: FeeSink>(sink: S, from: &Principal) {
        sink.deposit(from, 3);
    }

    #[test]
    fn sink_works_through_references_and_arcs() {
        let vault = std::sync::Arc::new(FeeVault::new());
        let alice = Principal::new("alice");

        collect(&*vault, &alice);
        collect(vault.clone(), &alice);

        assert_eq!(vault.total(), 6);
        assert_eq!(vault.deposits(), 2);
    }

    #[test]
    fn vault_total_saturates() {
        let vault = FeeVault::new();
        let whale = Principal::new("whale");

        vault.deposit(&whale, Amount::MAX);
        vault.deposit(&whale, 1);

        assert_eq!(vault.total(), Amount::MAX);
        assert_eq!(vault.paid_by(&whale), Amount::MAX);
    }
}
