//! Settings for the default HTTP transport.

// std
use std::time::Duration as StdDuration;
// self
use crate::_prelude::*;

/// Per-call timeout applied by the default transport.
pub const DEFAULT_TIMEOUT: StdDuration = StdDuration::from_secs(15);
/// User agent sent by the default transport.
pub const DEFAULT_USER_AGENT: &str = "VPS/PP-API";

/// Settings for the HTTP transport the client builds when none is supplied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
	/// Total timeout for a single call, connection included.
	pub timeout: StdDuration,
	/// `User-Agent` header value.
	pub user_agent: String,
	/// Skips TLS peer verification. Only for local proxies and self-signed test servers.
	pub accept_invalid_certs: bool,
}
impl Default for TransportConfig {
	fn default() -> Self {
		Self {
			timeout: DEFAULT_TIMEOUT,
			user_agent: DEFAULT_USER_AGENT.into(),
			accept_invalid_certs: false,
		}
	}
}
