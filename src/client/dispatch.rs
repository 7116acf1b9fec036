//! Generic verb dispatch: endpoint normalization, bearer signing, and JSON pass-through.

// crates.io
use oauth2::http::{
	Request,
	header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	client::Client,
	error::ConfigError,
	http::{self, ApiHttpClient, HttpVerb, RequestBody},
	obs::{self, CallKind, CallOutcome, CallSpan},
};

impl<C> Client<C>
where
	C: ApiHttpClient,
{
	/// Joins `endpoint` onto the base URL after stripping a single leading `/`.
	pub fn resolve_url(&self, endpoint: &str) -> Result<Url> {
		let relative = endpoint.strip_prefix('/').unwrap_or(endpoint);

		Url::parse(&format!("{}{relative}", self.config.base_url)).map_err(|source| {
			ConfigError::InvalidEndpoint { endpoint: endpoint.to_owned(), source }.into()
		})
	}

	/// Sends an authenticated request and returns the decoded JSON body.
	///
	/// Returns `Ok(None)` when the API answered with an empty body. Status codes are not
	/// interpreted: PayPal error payloads come back as regular JSON values.
	pub async fn request(
		&self,
		verb: HttpVerb,
		endpoint: &str,
		body: impl Into<RequestBody>,
	) -> Result<Option<Value>> {
		const KIND: CallKind = CallKind::ApiRequest;

		let body = body.into();
		let span = CallSpan::new(KIND, verb.as_str());

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span.instrument(self.dispatch(verb, endpoint, body)).await;

		match &result {
			Ok(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}

	/// Like [`request`](Client::request) for a verb given by name (case-insensitive).
	///
	/// Names outside `GET`, `POST`, `PUT`, `PATCH`, `DELETE` fail with
	/// [`Error::UnsupportedVerb`] before any network activity.
	pub async fn request_named(
		&self,
		verb: &str,
		endpoint: &str,
		body: impl Into<RequestBody>,
	) -> Result<Option<Value>> {
		let verb = verb.parse::<HttpVerb>()?;

		self.request(verb, endpoint, body).await
	}

	/// Shorthand for [`request`](Client::request) with [`HttpVerb::Get`].
	pub async fn get(&self, endpoint: &str, body: impl Into<RequestBody>) -> Result<Option<Value>> {
		self.request(HttpVerb::Get, endpoint, body).await
	}

	/// Shorthand for [`request`](Client::request) with [`HttpVerb::Post`].
	pub async fn post(&self, endpoint: &str, body: impl Into<RequestBody>) -> Result<Option<Value>> {
		self.request(HttpVerb::Post, endpoint, body).await
	}

	/// Shorthand for [`request`](Client::request) with [`HttpVerb::Put`].
	pub async fn put(&self, endpoint: &str, body: impl Into<RequestBody>) -> Result<Option<Value>> {
		self.request(HttpVerb::Put, endpoint, body).await
	}

	/// Shorthand for [`request`](Client::request) with [`HttpVerb::Patch`].
	pub async fn patch(
		&self,
		endpoint: &str,
		body: impl Into<RequestBody>,
	) -> Result<Option<Value>> {
		self.request(HttpVerb::Patch, endpoint, body).await
	}

	/// Shorthand for [`request`](Client::request) with [`HttpVerb::Delete`].
	pub async fn delete(
		&self,
		endpoint: &str,
		body: impl Into<RequestBody>,
	) -> Result<Option<Value>> {
		self.request(HttpVerb::Delete, endpoint, body).await
	}

	async fn dispatch(
		&self,
		verb: HttpVerb,
		endpoint: &str,
		body: RequestBody,
	) -> Result<Option<Value>> {
		let token = self.access_token();

		if token.is_empty() {
			return Err(Error::NotAuthenticated);
		}

		let url = self.resolve_url(endpoint)?;
		let has_body = !body.is_empty();

		obs::trace_dispatch(verb.as_str(), url.as_str(), has_body);

		let request = Request::builder()
			.method(verb.method())
			.uri(url.as_str())
			.header(CONTENT_TYPE, "application/json")
			.header(AUTHORIZATION, token.bearer())
			.body(body.into_bytes()?)
			.map_err(ConfigError::from)?;
		let response = self
			.http_client
			.execute(request)
			.await
			.map_err(|e| http::map_transport_error(url.as_str(), e))?;

		http::decode_json(url.as_str(), &response)
	}
}
