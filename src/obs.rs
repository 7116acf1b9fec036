//! Optional observability helpers for token fetches and API requests.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `paypal_client.call` with the `call` (kind)
//!   and `stage` (call site) fields, plus `debug` events for token-cache hits and misses.
//! - Enable `metrics` to increment `paypal_client_call_total` for every attempt/success/failure,
//!   labeled by `call` + `outcome`, and `paypal_client_token_cache_total` labeled by `result`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outbound call kinds observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
	/// Client-credentials exchange against the token endpoint.
	TokenFetch,
	/// Authenticated API request.
	ApiRequest,
}
impl CallKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallKind::TokenFetch => "token_fetch",
			CallKind::ApiRequest => "api_request",
		}
	}
}
impl Display for CallKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a client operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Result of a session-cache lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CacheLookup {
	/// A fresh token was reused.
	Hit,
	/// No usable token was cached.
	Miss,
	/// A token was cached but too old to reuse.
	Stale,
}
impl CacheLookup {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CacheLookup::Hit => "hit",
			CacheLookup::Miss => "miss",
			CacheLookup::Stale => "stale",
		}
	}
}
