//! Transport primitives shared by the token exchange and generic API requests.
//!
//! [`ApiHttpClient`] is the client's only dependency on an HTTP stack. Requests and responses use
//! the `http` types re-exported by `oauth2` ([`HttpRequest`], [`HttpResponse`]) so custom
//! transports (test fakes, proxies, alternative runtimes) never see reqwest types.

pub mod body;
pub mod verb;

pub use body::*;
pub use verb::*;

pub use oauth2::{HttpClientError, HttpRequest, HttpResponse};

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	config::TransportConfig,
	error::{ConfigError, ResponseError, TransportError},
};

/// Boxed future returned by [`ApiHttpClient::execute`].
pub type HttpFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, HttpClientError<E>>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing PayPal API calls.
///
/// Implementations must be `Send + Sync + 'static` so one transport can back many clients. A
/// transport executes the request as given: it neither retries nor interprets status codes, and
/// it must surface an empty body as an empty byte vector.
pub trait ApiHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Builds a transport from [`TransportConfig`].
	///
	/// The default implementation reports [`Error::TransportUnavailable`]; such transports must be
	/// handed to the client explicitly.
	fn from_transport_config(config: &TransportConfig) -> Result<Self>
	where
		Self: Sized,
	{
		let _ = config;

		Err(Error::TransportUnavailable)
	}

	/// Executes a single request.
	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError>;
}

/// Thin wrapper around [`ReqwestClient`] configured from [`TransportConfig`].
///
/// Redirects are never followed. Build custom clients the same way when passing them through
/// [`ReqwestHttpClient::with_client`].
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a reqwest client with the configured timeout, user agent, and TLS policy.
	pub fn from_config(config: &TransportConfig) -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder()
			.timeout(config.timeout)
			.user_agent(config.user_agent.as_str())
			.redirect(reqwest::redirect::Policy::none())
			.danger_accept_invalid_certs(config.accept_invalid_certs)
			.build()?;

		Ok(Self(client))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ApiHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn from_transport_config(config: &TransportConfig) -> Result<Self> {
		Ok(Self::from_config(config)?)
	}

	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let response =
				client.execute(request.try_into().map_err(Box::new)?).await.map_err(Box::new)?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut converted =
				HttpResponse::new(response.bytes().await.map_err(Box::new)?.to_vec());

			*converted.status_mut() = status;
			*converted.headers_mut() = headers;

			Ok(converted)
		})
	}
}

/// Converts a transport failure for `url` into the client taxonomy.
pub(crate) fn map_transport_error<E>(url: &str, err: HttpClientError<E>) -> Error
where
	E: 'static + Send + Sync + StdError,
{
	match err {
		HttpClientError::Reqwest(inner) => TransportError::network(url, *inner).into(),
		HttpClientError::Http(inner) => ConfigError::from(inner).into(),
		HttpClientError::Io(inner) => TransportError::Io(inner).into(),
		HttpClientError::Other(message) => TransportError::Other { message }.into(),
		other => TransportError::Other { message: other.to_string() }.into(),
	}
}

/// Decodes a JSON body, yielding `None` when the transport returned no content.
pub(crate) fn decode_json<T>(url: &str, response: &HttpResponse) -> Result<Option<T>>
where
	T: DeserializeOwned,
{
	let body = response.body();

	if body.iter().all(u8::is_ascii_whitespace) {
		return Ok(None);
	}

	let mut deserializer = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut deserializer).map(Some).map_err(|source| {
		ResponseError::Malformed { url: url.to_owned(), status: response.status().as_u16(), source }
			.into()
	})
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn response(body: &str) -> HttpResponse {
		HttpResponse::new(body.as_bytes().to_vec())
	}

	#[test]
	fn empty_bodies_decode_to_none() {
		let decoded: Option<serde_json::Value> = decode_json("https://example.com/", &response(""))
			.expect("Empty bodies should not fail.");

		assert!(decoded.is_none());

		let decoded: Option<serde_json::Value> =
			decode_json("https://example.com/", &response(" \n"))
				.expect("Whitespace bodies should not fail.");

		assert!(decoded.is_none());
	}

	#[test]
	fn malformed_bodies_surface_response_errors() {
		let err = decode_json::<serde_json::Value>("https://example.com/v1/x", &response("<html>"))
			.expect_err("Non-JSON bodies should fail.");

		assert!(matches!(err, Error::Response(ResponseError::Malformed { status: 200, .. })));
		assert!(err.to_string().contains("https://example.com/v1/x"));
	}

	#[test]
	fn other_transport_errors_map_to_transport() {
		let err = map_transport_error::<std::io::Error>(
			"https://example.com/",
			HttpClientError::Other("connection reset".into()),
		);

		assert!(matches!(err, Error::Transport(TransportError::Other { .. })));
	}

	#[cfg(feature = "reqwest")]
	#[test]
	fn reqwest_transport_builds_from_config() {
		let config = TransportConfig { accept_invalid_certs: true, ..TransportConfig::default() };

		ReqwestHttpClient::from_transport_config(&config)
			.expect("Reqwest transport should build from the default config.");
	}
}
