//! Demonstrates the client-credentials exchange, session-cache reuse, and a signed payment call
//! against a local mock of the PayPal REST API.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
use url::Url;
// self
use paypal_rest_client::{
	client::PayPalClient,
	store::{MemoryStore, SessionStore},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v1/oauth2/token")
				.query_param("grant_type", "client_credentials");
			then.status(200).header("content-type", "application/json").body(
				r#"{"access_token":"demo-access","token_type":"Bearer","expires_in":32400}"#,
			);
		})
		.await;
	let payment_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/payments/payment").header("authorization", "Bearer demo-access");
			then.status(201)
				.header("content-type", "application/json")
				.body(r#"{"id":"PAY-DEMO","intent":"sale","state":"created"}"#);
		})
		.await;
	let store: Arc<dyn SessionStore> = Arc::new(MemoryStore::default());
	let base_url = Url::parse(&server.base_url())?;
	let client = PayPalClient::builder("demo-client", "super-secret")
		.configure(|config| config.base_url(base_url.clone()))
		.store(store.clone())
		.build()
		.await?;
	let payment = client
		.post(
			"/v1/payments/payment",
			json!({
				"intent": "sale",
				"payer": { "payment_method": "paypal" },
				"transactions": [{ "amount": { "total": "7.47", "currency": "USD" } }]
			}),
		)
		.await?;

	println!("Created payment: {payment:?}.");

	// A second client on the same store reuses the cached token.
	let sibling = PayPalClient::builder("demo-client", "super-secret")
		.configure(|config| config.base_url(base_url))
		.store(store)
		.build()
		.await?;

	println!("Reused access token: {}.", sibling.access_token().expose());

	token_mock.assert_calls_async(1).await;
	payment_mock.assert_async().await;

	Ok(())
}
