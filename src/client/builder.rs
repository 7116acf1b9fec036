// self
use crate::{
	_prelude::*,
	auth::{AccessToken, ClientCredentials},
	client::Client,
	config::{ClientConfig, ClientConfigBuilder, Environment},
	http::ApiHttpClient,
	store::{MemoryStore, SessionStore},
};

/// Builder for [`Client`] values.
///
/// [`build`](ClientBuilder::build) validates credentials and configuration before any network
/// activity, then either adopts the supplied access token or resolves one.
pub struct ClientBuilder<C>
where
	C: ApiHttpClient,
{
	client_id: String,
	client_secret: String,
	config: ClientConfigBuilder,
	access_token: Option<String>,
	store: Option<Arc<dyn SessionStore>>,
	http_client: Option<Arc<C>>,
}
impl<C> ClientBuilder<C>
where
	C: ApiHttpClient,
{
	/// Creates a builder for the provided credential pair, targeting the sandbox.
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: client_secret.into(),
			config: ClientConfigBuilder::default(),
			access_token: None,
			store: None,
			http_client: None,
		}
	}

	/// Selects the sandbox (`true`, the default) or production (`false`) environment.
	pub fn sandbox(mut self, sandbox: bool) -> Self {
		self.config = self.config.sandbox(sandbox);

		self
	}

	/// Sets the target environment.
	pub fn environment(mut self, environment: Environment) -> Self {
		self.config = self.config.environment(environment);

		self
	}

	/// Replaces the configuration wholesale.
	pub fn config(mut self, config: impl Into<ClientConfigBuilder>) -> Self {
		self.config = config.into();

		self
	}

	/// Adjusts the configuration in place.
	pub fn configure(mut self, f: impl FnOnce(ClientConfigBuilder) -> ClientConfigBuilder) -> Self {
		self.config = f(self.config);

		self
	}

	/// Supplies a pre-obtained access token; no fetch and no expiry check happen at build time.
	///
	/// An empty string is ignored.
	pub fn access_token(mut self, token: impl Into<String>) -> Self {
		self.access_token = Some(token.into()).filter(|token| !token.is_empty());

		self
	}

	/// Supplies the session store for the token cache (defaults to a fresh [`MemoryStore`]).
	pub fn store(mut self, store: Arc<dyn SessionStore>) -> Self {
		self.store = Some(store);

		self
	}

	/// Supplies the HTTP transport (defaults to one built from the transport config).
	pub fn http_client(mut self, http_client: impl Into<Arc<C>>) -> Self {
		self.http_client = Some(http_client.into());

		self
	}

	/// Validates inputs and returns a client holding a non-empty access token.
	pub async fn build(self) -> Result<Client<C>> {
		let credentials = ClientCredentials::new(self.client_id, self.client_secret)?;
		let config: ClientConfig = self.config.build()?;
		let http_client = match self.http_client {
			Some(http_client) => http_client,
			None => Arc::new(C::from_transport_config(&config.transport)?),
		};
		let store = self.store.unwrap_or_else(|| Arc::new(MemoryStore::default()));
		let client = Client {
			http_client,
			store,
			config,
			credentials,
			access_token: Default::default(),
			refresh_guard: Default::default(),
		};

		match self.access_token {
			Some(token) => client.adopt_access_token(AccessToken::new(token)).await?,
			None => {
				client.get_access_token().await?;
			},
		}

		Ok(client)
	}
}
impl<C> Debug for ClientBuilder<C>
where
	C: ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ClientBuilder")
			.field("client_id", &self.client_id)
			.field("config", &self.config)
			.field("access_token_set", &self.access_token.is_some())
			.field("store_set", &self.store.is_some())
			.field("http_client_set", &self.http_client.is_some())
			.finish()
	}
}
