//! Client configuration: target environment, session-cache settings, and transport tuning.
//!
//! [`ClientConfig`] is validated on construction (see [`ClientConfigBuilder::build`]) and is
//! serde-compatible, so hosts can embed it in their own configuration files. Deserializing goes
//! through the builder, which keeps the same invariants as programmatic construction.

pub mod builder;
pub mod environment;
pub mod transport;

pub use builder::*;
pub use environment::*;
pub use transport::*;

// self
use crate::{_prelude::*, error::ConfigError};

/// Session key the cached token is stored under unless overridden.
pub const DEFAULT_SESSION_KEY: &str = "ppAccessToken";

/// Validated client configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ClientConfigBuilder")]
pub struct ClientConfig {
	/// Target PayPal environment.
	pub environment: Environment,
	/// API root every endpoint is appended to; always ends with `/`.
	pub base_url: Url,
	/// Key the cached token is stored under in the session store.
	pub session_key: String,
	/// Window a cached token is reused before a fresh fetch.
	pub token_lifetime: Duration,
	/// HTTP transport settings used when the client builds its own transport.
	pub transport: TransportConfig,
}
impl ClientConfig {
	/// Returns a builder seeded with sandbox defaults.
	pub fn builder() -> ClientConfigBuilder {
		ClientConfigBuilder::default()
	}

	/// Builds the default configuration for `environment`.
	pub fn for_environment(environment: Environment) -> Result<Self, ConfigError> {
		Self::builder().environment(environment).build()
	}
}
