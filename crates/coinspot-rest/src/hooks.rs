//! Call hooks for recording API traffic
//!
//! Hooks let an application observe every request the client makes (the
//! operation, its parameters and its result) without the client reaching
//! into process-wide logging state. Pass them at construction time.
//!
//! # Example
//!
//! ```
//! use coinspot_rest::hooks::Hooks;
//!
//! let hooks = Hooks::new().on_call(|record| {
//!     println!("{} {} -> ok={}", record.scope, record.operation, record.outcome.is_success());
//! });
//! ```

use coinspot_types::AccessLevel;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::info;

use crate::error::RestError;

/// Which API namespace served a call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallScope {
    /// Unauthenticated `/pubapi/v2` call
    Public,
    /// Signed `/api/v2` or `/api/v2/ro` call
    Authenticated(AccessLevel),
}

impl fmt::Display for CallScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Authenticated(access) => write!(f, "{}", access),
        }
    }
}

/// Result of a call as seen by a hook
#[derive(Debug, Clone, Copy)]
pub enum CallOutcome<'a> {
    /// JSON body that decoded into the typed result
    Success(&'a Value),
    /// Transport, HTTP or decode failure
    Failure(&'a RestError),
}

impl CallOutcome<'_> {
    /// Check if the caller got a typed result
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// One recorded call
#[derive(Debug, Clone, Copy)]
pub struct CallRecord<'a> {
    /// Endpoint path, e.g. "/my/balances"
    pub operation: &'a str,
    /// Namespace the call went to
    pub scope: CallScope,
    /// Payload as sent, including the nonce (`Null` for public calls)
    pub params: &'a Value,
    /// What came back
    pub outcome: CallOutcome<'a>,
}

/// Type alias for hook callbacks
pub type CallHook = Arc<dyn Fn(&CallRecord<'_>) + Send + Sync>;

/// Hooks container
///
/// Hooks run synchronously on the calling task once the response has been
/// decoded into the typed result. Keep them fast.
#[derive(Clone, Default)]
pub struct Hooks {
    /// Called once per request
    pub(crate) on_call: Option<CallHook>,
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("on_call", &self.on_call.as_ref().map(|_| "..."))
            .finish()
    }
}

impl Hooks {
    /// Create a new empty hooks container
    pub fn new() -> Self {
        Self::default()
    }

    /// Hooks that record every call through `tracing` at info level
    ///
    /// Events use the `coinspot::calls` target, so a subscriber can route
    /// them to their own file.
    pub fn tracing() -> Self {
        Self::new().on_call(log_call)
    }

    /// Register a callback for every request
    pub fn on_call<F>(mut self, f: F) -> Self
    where
        F: Fn(&CallRecord<'_>) + Send + Sync + 'static,
    {
        self.on_call = Some(Arc::new(f));
        self
    }

    /// Check if any hook is registered
    pub fn is_empty(&self) -> bool {
        self.on_call.is_none()
    }

    pub(crate) fn invoke_call(&self, record: &CallRecord<'_>) {
        if let Some(ref hook) = self.on_call {
            hook(record);
        }
    }
}

fn log_call(record: &CallRecord<'_>) {
    match record.outcome {
        CallOutcome::Success(result) => info!(
            target: "coinspot::calls",
            operation = record.operation,
            scope = %record.scope,
            params = %record.params,
            result = %result,
            "API call"
        ),
        CallOutcome::Failure(err) => info!(
            target: "coinspot::calls",
            operation = record.operation,
            scope = %record.scope,
            params = %record.params,
            error = %err,
            "API call failed"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    fn record<'a>(params: &'a Value, outcome: CallOutcome<'a>) -> CallRecord<'a> {
        CallRecord {
            operation: "/my/balances",
            scope: CallScope::Authenticated(AccessLevel::ReadOnly),
            params,
            outcome,
        }
    }

    #[test]
    fn test_hooks_builder() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let hooks = Hooks::new().on_call(move |_| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        let params = Value::Null;
        let body = serde_json::json!({"status": "ok"});
        hooks.invoke_call(&record(&params, CallOutcome::Success(&body)));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_hook_sees_operation_and_params() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();

        let hooks = Hooks::new().on_call(move |r| {
            seen_clone
                .lock()
                .unwrap()
                .push((r.operation.to_string(), r.scope.to_string(), r.params["cointype"].clone()));
        });

        let params = serde_json::json!({"cointype": "BTC", "nonce": 1});
        let err = RestError::AuthRequired;
        hooks.invoke_call(&record(&params, CallOutcome::Failure(&err)));

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].0, "/my/balances");
        assert_eq!(seen[0].1, "read_only");
        assert_eq!(seen[0].2, "BTC");
    }

    #[test]
    fn test_hooks_clone_and_default() {
        let hooks = Hooks::new().on_call(|_| {});
        assert!(hooks.clone().on_call.is_some());
        assert!(Hooks::default().is_empty());
        assert!(!Hooks::tracing().is_empty());

        // Should not panic when invoking empty hooks
        let params = Value::Null;
        Hooks::default().invoke_call(&record(&params, CallOutcome::Success(&params)));
    }

    #[test]
    fn test_scope_display() {
        assert_eq!(CallScope::Public.to_string(), "public");
        assert_eq!(CallScope::Authenticated(AccessLevel::FullAccess).to_string(), "full_access");
    }
}
