use std::fmt;

use crate::request::CallMeta;

/// Request-scoped logger for registry calls.
///
/// Every message carries the call's `request_id` and `caller` as structured
/// fields. The logger borrows the call metadata, so it cannot outlive the
/// call it describes.
#[derive(Debug)]
pub(crate) struct CallLog<'a> {
    request_id: &'a str,
    caller: &'a str,
}

impl<'a> CallLog<'a> {
    pub(crate) fn new(call: &'a CallMeta) -> Self {
        Self {
            request_id: &call.request_id,
            caller: call.principal.id(),
        }
    }

    pub(crate) fn info(&self, args: fmt::Arguments<'_>) {
        tracing::info!(request_id = %self.request_id, caller = %self.caller, "{}", args);
    }

    pub(crate) fn warn(&self, args: fmt::Arguments<'_>) {
        tracing::warn!(request_id = %self.request_id, caller = %self.caller, "{}", args);
    }

    pub(crate) fn debug(&self, args: fmt::Arguments<'_>) {
        tracing::debug!(request_id = %self.request_id, caller = %self.caller, "{}", args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Principal;

    #[test]
    fn call_log_borrows_call_fields() {
        let call = CallMeta::new("req-7", Principal::new("dave"));
        let log = CallLog::new(&call);

        assert_eq!(log.request_id, "req-7");
        assert_eq!(log.caller, "dave");

        log.info(format_args!("accepted"));
        log.warn(format_args!("rejected"));
        log.debug(format_args!("lookup"));
    }
}
