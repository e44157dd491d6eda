use crate::types::{Amount, Principal};

/// Metadata about one registry call.
///
/// Carries the request identifier used for log correlation, the
/// authenticated caller, and the amount the ledger attached to the call.
///
/// # Examples
///
/// ```
/// use audit_registry::{CallMeta, Principal};
///
/// let call = CallMeta::new("req-1", Principal::new("alice")).with_value(1_000);
/// assert_eq!(call.value, 1_000);
/// assert_eq!(call.principal.id(), "alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallMeta {
    /// Unique identifier for this call
    pub request_id: String,
    /// Caller executing the operation
    pub principal: Principal,
    /// Amount attached to the call
    pub value: Amount,
}

impl CallMeta {
    /// Creates call metadata with no attached value.
    pub fn new(request_id: impl Into<String>, principal: Principal) -> Self {
        Self {
            request_id: request_id.into(),
            principal,
            value: 0,
        }
    }

    /// Sets the attached amount.
    pub fn with_value(mut self, value: Amount) -> Self {
        self.value = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_call_has_no_value() {
        let call = CallMeta::new("req-9", Principal::new("bob"));
        assert_eq!(call.request_id, "req-9");
        assert_eq!(call.value, 0);
    }
}
