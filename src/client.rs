//! The PayPal API client: construction, token resolution, and generic request dispatch.
//!
//! A [`Client`] always holds a non-empty access token once [`ClientBuilder::build`] returns.
//! Tokens are resolved through the injected [`SessionStore`] first and fetched from
//! `v1/oauth2/token` only when the cached one is missing or older than the configured lifetime.

mod builder;
mod dispatch;
mod token;

pub use builder::*;

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, ClientCredentials},
	config::{ClientConfig, Environment},
	http::ApiHttpClient,
	store::SessionStore,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type PayPalClient = Client<ReqwestHttpClient>;

/// Authenticated forwarder for PayPal REST calls.
///
/// Cloning is cheap; clones share the transport, the session store, the held token, and the
/// refresh guard.
pub struct Client<C>
where
	C: ApiHttpClient,
{
	http_client: Arc<C>,
	store: Arc<dyn SessionStore>,
	config: ClientConfig,
	credentials: ClientCredentials,
	access_token: Arc<RwLock<AccessToken>>,
	refresh_guard: Arc<AsyncMutex<()>>,
}
impl<C> Client<C>
where
	C: ApiHttpClient,
{
	/// Starts building a client for the provided credential pair.
	pub fn builder(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
	) -> ClientBuilder<C> {
		ClientBuilder::new(client_id, client_secret)
	}

	/// Builds a client from the conventional positional arguments.
	///
	/// A non-empty `access_token` is used as-is; otherwise a token is resolved from the session
	/// store or fetched.
	pub async fn new(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		sandbox: bool,
		access_token: Option<String>,
	) -> Result<Self> {
		let mut builder = Self::builder(client_id, client_secret).sandbox(sandbox);

		if let Some(token) = access_token {
			builder = builder.access_token(token);
		}

		builder.build().await
	}

	/// Returns the token currently attached to requests.
	pub fn access_token(&self) -> AccessToken {
		self.access_token.read().clone()
	}

	/// Returns the API root every endpoint is appended to.
	pub fn base_url(&self) -> &Url {
		&self.config.base_url
	}

	/// Returns the target environment.
	pub fn environment(&self) -> Environment {
		self.config.environment
	}

	/// Returns the validated configuration.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Returns the credential pair used for token exchanges.
	pub fn credentials(&self) -> &ClientCredentials {
		&self.credentials
	}

	/// Returns the session store backing the token cache.
	pub fn store(&self) -> &Arc<dyn SessionStore> {
		&self.store
	}

	/// Returns the HTTP transport.
	pub fn http_client(&self) -> &Arc<C> {
		&self.http_client
	}
}
impl<C> Clone for Client<C>
where
	C: ApiHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			http_client: self.http_client.clone(),
			store: self.store.clone(),
			config: self.config.clone(),
			credentials: self.credentials.clone(),
			access_token: self.access_token.clone(),
			refresh_guard: self.refresh_guard.clone(),
		}
	}
}
impl<C> Debug for Client<C>
where
	C: ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("environment", &self.config.environment)
			.field("base_url", &self.config.base_url.as_str())
			.field("client_id", &self.credentials.client_id())
			.field("access_token_set", &!self.access_token.read().is_empty())
			.finish()
	}
}
