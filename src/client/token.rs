//! Token resolution: session-cache lookup, client-credentials exchange, and cache write-back.

// crates.io
use oauth2::http::{
	Method, Request,
	header::{ACCEPT, ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE},
};
use url::form_urlencoded::Serializer;
// self
use crate::{
	_prelude::*,
	auth::{AccessToken, CachedToken},
	client::Client,
	error::ConfigError,
	http::{self, ApiHttpClient},
	obs::{self, CacheLookup, CallKind, CallOutcome, CallSpan},
};

const TOKEN_ENDPOINT: &str = "v1/oauth2/token?grant_type=client_credentials";

/// Token endpoint payload; success and error shapes share one object.
#[derive(Debug, Deserialize)]
struct TokenEndpointResponse {
	access_token: Option<String>,
	error: Option<String>,
	error_description: Option<String>,
}

impl<C> Client<C>
where
	C: ApiHttpClient,
{
	/// Resolves an access token, reusing the session cache while it is fresh.
	///
	/// A fetched token is written back to the session store and attached to later requests.
	/// Concurrent callers on the same client share a single fetch.
	pub async fn get_access_token(&self) -> Result<AccessToken> {
		let span = CallSpan::new(CallKind::TokenFetch, "get_access_token");

		span.instrument(async move {
			let _singleflight = self.refresh_guard.lock().await;
			let key = self.config.session_key.as_str();
			let now = OffsetDateTime::now_utc();
			let lookup = match self.store.get(key).await? {
				Some(cached) if cached.is_fresh_at(now, self.config.token_lifetime) => {
					self.record_lookup(key, CacheLookup::Hit);
					*self.access_token.write() = cached.token.clone();

					return Ok(cached.token);
				},
				Some(_) => CacheLookup::Stale,
				None => CacheLookup::Miss,
			};

			self.record_lookup(key, lookup);

			let token = self.fetch_access_token().await?;

			self.store.set(key, CachedToken::obtained_now(token.clone())).await?;
			*self.access_token.write() = token.clone();

			Ok::<_, Error>(token)
		})
		.await
	}

	/// Attaches a caller-supplied token and records it in the session cache.
	pub(crate) async fn adopt_access_token(&self, token: AccessToken) -> Result<()> {
		self.store.set(&self.config.session_key, CachedToken::obtained_now(token.clone())).await?;
		*self.access_token.write() = token;

		Ok(())
	}

	fn record_lookup(&self, key: &str, lookup: CacheLookup) {
		obs::trace_cache_lookup(key, lookup);
		obs::record_cache_lookup(lookup);
	}

	async fn fetch_access_token(&self) -> Result<AccessToken> {
		const KIND: CallKind = CallKind::TokenFetch;

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = self.exchange_client_credentials().await;

		match &result {
			Ok(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}

	async fn exchange_client_credentials(&self) -> Result<AccessToken> {
		let url = self.resolve_url(TOKEN_ENDPOINT)?;
		let form =
			Serializer::new(String::new()).append_pair("grant_type", "client_credentials").finish();
		let request = Request::builder()
			.method(Method::POST)
			.uri(url.as_str())
			.header(ACCEPT, "application/json")
			.header(ACCEPT_LANGUAGE, "en_US")
			.header(CONTENT_TYPE, "application/x-www-form-urlencoded")
			.header(AUTHORIZATION, self.credentials.basic_authorization())
			.body(form.into_bytes())
			.map_err(ConfigError::from)?;
		let response = self
			.http_client
			.execute(request)
			.await
			.map_err(|e| http::map_transport_error(url.as_str(), e))?;
		let payload = http::decode_json::<TokenEndpointResponse>(url.as_str(), &response)?
			.ok_or_else(|| Error::Authentication {
				reason: "token endpoint returned an empty response".into(),
			})?;

		if let Some(code) = payload.error {
			return Err(Error::Authentication { reason: payload.error_description.unwrap_or(code) });
		}

		match payload.access_token {
			Some(token) if !token.is_empty() => Ok(AccessToken::new(token)),
			_ => Err(Error::Authentication {
				reason: "token endpoint response is missing access_token".into(),
			}),
		}
	}
}
