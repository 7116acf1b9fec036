//! Validated client-credential pair used for the token exchange.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
use oauth2::{ClientId, ClientSecret};
// self
use crate::{_prelude::*, error::ConfigError};

/// Immutable `client_id`/`client_secret` pair issued by the PayPal developer dashboard.
///
/// Both halves must be non-empty; the secret is redacted from `Debug` output.
#[derive(Clone, Debug)]
pub struct ClientCredentials {
	client_id: ClientId,
	client_secret: ClientSecret,
}
impl ClientCredentials {
	/// Validates and wraps the provided credential pair.
	pub fn new(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
	) -> Result<Self, ConfigError> {
		let client_id = client_id.into();
		let client_secret = client_secret.into();

		if client_id.is_empty() {
			return Err(ConfigError::MissingCredential { field: "client_id" });
		}
		if client_secret.is_empty() {
			return Err(ConfigError::MissingCredential { field: "client_secret" });
		}

		Ok(Self {
			client_id: ClientId::new(client_id),
			client_secret: ClientSecret::new(client_secret),
		})
	}

	/// Returns the public client identifier.
	pub fn client_id(&self) -> &str {
		self.client_id.as_str()
	}

	/// Returns the client secret. Callers must avoid logging this string.
	pub fn expose_secret(&self) -> &str {
		self.client_secret.secret()
	}

	/// Renders the `Authorization: Basic ...` header value for the token endpoint.
	pub fn basic_authorization(&self) -> String {
		let raw = format!("{}:{}", self.client_id(), self.expose_secret());

		format!("Basic {}", STANDARD.encode(raw))
	}
}
