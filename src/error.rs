//! Client-level error types shared by construction, token resolution, and request dispatch.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem (credentials, URLs, HTTP client setup).
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Session-store failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		crate::store::StoreError,
	),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Upstream payload could not be decoded.
	#[error(transparent)]
	Response(#[from] ResponseError),

	/// Token endpoint rejected the credential exchange.
	#[error("Authentication failed: {reason}.")]
	Authentication {
		/// Provider-supplied `error_description` (or a client-side reason).
		reason: String,
	},
	/// A request was attempted without an access token.
	#[error("An access token is required before making requests.")]
	NotAuthenticated,
	/// Verb name outside `GET`, `POST`, `PUT`, `PATCH`, `DELETE`.
	#[error("Unsupported HTTP verb `{verb}`.")]
	UnsupportedVerb {
		/// Verb name as supplied by the caller.
		verb: String,
	},
	/// No HTTP transport is available in this build.
	#[error("No HTTP transport is available; enable the `reqwest` feature or supply a client.")]
	TransportUnavailable,
}

/// Configuration and validation failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// A credential field is empty.
	#[error("The {field} must be set before making requests.")]
	MissingCredential {
		/// Name of the empty credential field.
		field: &'static str,
	},
	/// Configured base URL cannot serve as an API root.
	#[error("Base URL `{url}` is invalid.")]
	InvalidBaseUrl {
		/// Offending base URL.
		url: String,
	},
	/// Endpoint cannot be joined onto the base URL.
	#[error("Endpoint `{endpoint}` does not form a valid URL.")]
	InvalidEndpoint {
		/// Endpoint as supplied by the caller.
		endpoint: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Session key is empty.
	#[error("Session key must not be empty.")]
	EmptySessionKey,
	/// Token lifetime is zero or negative.
	#[error("Token lifetime must be positive.")]
	NonPositiveTokenLifetime,
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// Request body could not be serialized.
	#[error("Request body could not be serialized to JSON.")]
	BodySerialize(#[source] serde_json::Error),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure or timeout.
	#[error("Network error occurred while calling {url}.")]
	Network {
		/// Request URL.
		url: String,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the API.")]
	Io(#[from] std::io::Error),
	/// Transport reported a failure without a typed error.
	#[error("HTTP transport failed: {message}.")]
	Other {
		/// Transport-supplied message.
		message: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(url: impl Into<String>, src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { url: url.into(), source: Box::new(src) }
	}
}

/// Failures decoding upstream payloads.
#[derive(Debug, ThisError)]
pub enum ResponseError {
	/// Response body is not valid JSON.
	#[error("{url} returned malformed JSON (HTTP {status}).")]
	Malformed {
		/// Request URL.
		url: String,
		/// HTTP status code.
		status: u16,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
