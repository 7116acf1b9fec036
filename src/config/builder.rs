//! Builder and validation for [`ClientConfig`](crate::config::ClientConfig).

// std
use std::time::Duration as StdDuration;
// self
use crate::{
	_prelude::*,
	auth::TOKEN_LIFETIME,
	config::{ClientConfig, DEFAULT_SESSION_KEY, Environment, TransportConfig},
	error::ConfigError,
};

/// Builder for [`ClientConfig`] values; also the deserialization shape of the config.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ClientConfigBuilder {
	/// Target environment; selects the API root unless `base_url` overrides it.
	pub environment: Environment,
	/// Optional API root override (staging proxies, mock servers).
	pub base_url: Option<Url>,
	/// Session key for the cached token.
	pub session_key: String,
	/// Cached-token reuse window.
	pub token_lifetime: Duration,
	/// Transport settings.
	pub transport: TransportConfig,
}
impl ClientConfigBuilder {
	/// Sets the target environment.
	pub fn environment(mut self, environment: Environment) -> Self {
		self.environment = environment;

		self
	}

	/// Selects the sandbox (`true`) or production (`false`) environment.
	pub fn sandbox(self, sandbox: bool) -> Self {
		self.environment(Environment::from_sandbox_flag(sandbox))
	}

	/// Overrides the API root derived from the environment.
	pub fn base_url(mut self, url: Url) -> Self {
		self.base_url = Some(url);

		self
	}

	/// Overrides the session key the cached token is stored under.
	pub fn session_key(mut self, key: impl Into<String>) -> Self {
		self.session_key = key.into();

		self
	}

	/// Overrides the cached-token reuse window (defaults to eight hours).
	pub fn token_lifetime(mut self, lifetime: Duration) -> Self {
		self.token_lifetime = lifetime;

		self
	}

	/// Replaces the transport settings.
	pub fn transport(mut self, transport: TransportConfig) -> Self {
		self.transport = transport;

		self
	}

	/// Overrides the per-call timeout.
	pub fn timeout(mut self, timeout: StdDuration) -> Self {
		self.transport.timeout = timeout;

		self
	}

	/// Overrides the `User-Agent` header.
	pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.transport.user_agent = user_agent.into();

		self
	}

	/// Toggles TLS peer verification; disabling it defeats transport security.
	pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
		self.transport.accept_invalid_certs = accept;

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ClientConfig, ConfigError> {
		let base_url = match self.base_url {
			Some(url) => normalize_base_url(url)?,
			None => self.environment.base_url()?,
		};

		if self.session_key.trim().is_empty() {
			return Err(ConfigError::EmptySessionKey);
		}
		if !self.token_lifetime.is_positive() {
			return Err(ConfigError::NonPositiveTokenLifetime);
		}

		Ok(ClientConfig {
			environment: self.environment,
			base_url,
			session_key: self.session_key,
			token_lifetime: self.token_lifetime,
			transport: self.transport,
		})
	}
}
impl Default for ClientConfigBuilder {
	fn default() -> Self {
		Self {
			environment: Environment::default(),
			base_url: None,
			session_key: DEFAULT_SESSION_KEY.into(),
			token_lifetime: TOKEN_LIFETIME,
			transport: TransportConfig::default(),
		}
	}
}
impl From<ClientConfig> for ClientConfigBuilder {
	fn from(config: ClientConfig) -> Self {
		let base_url = config
			.environment
			.base_url()
			.ok()
			.filter(|root| root == &config.base_url)
			.map_or(Some(config.base_url), |_| None);

		Self {
			environment: config.environment,
			base_url,
			session_key: config.session_key,
			token_lifetime: config.token_lifetime,
			transport: config.transport,
		}
	}
}
impl TryFrom<ClientConfigBuilder> for ClientConfig {
	type Error = ConfigError;

	fn try_from(builder: ClientConfigBuilder) -> Result<Self, Self::Error> {
		builder.build()
	}
}

fn normalize_base_url(mut url: Url) -> Result<Url, ConfigError> {
	let usable = matches!(url.scheme(), "http" | "https")
		&& !url.cannot_be_a_base()
		&& url.query().is_none()
		&& url.fragment().is_none();

	if !usable {
		return Err(ConfigError::InvalidBaseUrl { url: url.to_string() });
	}
	if !url.path().ends_with('/') {
		let path = format!("{}/", url.path());

		url.set_path(&path);
	}

	Ok(url)
}
