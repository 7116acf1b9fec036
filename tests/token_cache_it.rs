mod common;

// std
use std::{env, fs, process, sync::Arc};
// crates.io
use time::{Duration, OffsetDateTime};
// self
use common::*;
use paypal_rest_client::{
	auth::{AccessToken, CachedToken},
	client::Client,
	store::{FileStore, MemoryStore, SessionStore},
};

type TestClient = Client<RecordingHttpClient>;

async fn seeded_store(token: &str, age: Duration) -> Arc<MemoryStore> {
	let store = Arc::new(MemoryStore::default());

	store
		.set(
			"ppAccessToken",
			CachedToken::new(AccessToken::new(token), OffsetDateTime::now_utc() - age),
		)
		.await
		.expect("Seeding the memory store should succeed.");

	store
}

#[tokio::test]
async fn fresh_cached_token_is_reused_without_a_fetch() {
	let transport = RecordingHttpClient::new();
	let store = seeded_store("cached", Duration::hours(7)).await;
	let client = TestClient::builder(CLIENT_ID, CLIENT_SECRET)
		.store(store)
		.http_client(transport.clone())
		.build()
		.await
		.expect("Construction should reuse the cached token.");

	assert_eq!(client.access_token().expose(), "cached");
	assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn stale_cached_token_triggers_exactly_one_fetch() {
	let transport = RecordingHttpClient::new();
	let store = seeded_store("stale", Duration::seconds(28_801)).await;

	transport.reply_token("renewed");

	let client = TestClient::builder(CLIENT_ID, CLIENT_SECRET)
		.store(store.clone())
		.http_client(transport.clone())
		.build()
		.await
		.expect("Construction should replace the stale token.");

	assert_eq!(client.access_token().expose(), "renewed");
	assert_eq!(transport.calls(), 1);

	let cached = store
		.get("ppAccessToken")
		.await
		.expect("Memory store read should succeed.")
		.expect("Renewed token should be cached.");

	assert_eq!(cached.token.expose(), "renewed");
	assert!(OffsetDateTime::now_utc() - cached.obtained_at < Duration::minutes(1));
}

#[tokio::test]
async fn custom_session_key_and_lifetime_are_honored() {
	let transport = RecordingHttpClient::new();
	let store = Arc::new(MemoryStore::default());

	store
		.set(
			"merchant-42",
			CachedToken::new(
				AccessToken::new("short-lived"),
				OffsetDateTime::now_utc() - Duration::minutes(10),
			),
		)
		.await
		.expect("Seeding the memory store should succeed.");
	transport.reply_token("refetched");

	let client = TestClient::builder(CLIENT_ID, CLIENT_SECRET)
		.configure(|config| config.session_key("merchant-42").token_lifetime(Duration::minutes(5)))
		.store(store.clone())
		.http_client(transport.clone())
		.build()
		.await
		.expect("Construction should refetch past the shortened lifetime.");

	assert_eq!(client.access_token().expose(), "refetched");
	assert_eq!(transport.calls(), 1);
	assert!(
		store.get("ppAccessToken").await.expect("Memory store read should succeed.").is_none()
	);
}

#[tokio::test]
async fn refreshed_token_replaces_the_held_bearer() {
	let transport = RecordingHttpClient::new();
	let store = Arc::new(MemoryStore::default());

	transport.reply_token("first").reply_token("second").reply_json(serde_json::json!({}));

	let client = TestClient::builder(CLIENT_ID, CLIENT_SECRET)
		.store(store.clone())
		.http_client(transport.clone())
		.build()
		.await
		.expect("Construction should obtain the first token.");

	store
		.set(
			"ppAccessToken",
			CachedToken::new(AccessToken::new("first"), OffsetDateTime::now_utc() - Duration::hours(9)),
		)
		.await
		.expect("Expiring the cached token should succeed.");

	let renewed = client.get_access_token().await.expect("Refresh should succeed.");

	assert_eq!(renewed.expose(), "second");

	client.get("v1/identity/oauth2/userinfo", ()).await.expect("Request should succeed.");

	assert_eq!(transport.last_request().header("authorization"), Some("Bearer second"));
}

#[tokio::test]
async fn concurrent_refreshes_on_one_client_share_a_fetch() {
	let transport = RecordingHttpClient::new();
	let store = Arc::new(MemoryStore::default());

	transport.reply_token("initial").reply_token("shared");

	let client = TestClient::builder(CLIENT_ID, CLIENT_SECRET)
		.store(store.clone())
		.http_client(transport.clone())
		.build()
		.await
		.expect("Construction should obtain a token.");

	store
		.set(
			"ppAccessToken",
			CachedToken::new(
				AccessToken::new("initial"),
				OffsetDateTime::now_utc() - Duration::hours(10),
			),
		)
		.await
		.expect("Expiring the cached token should succeed.");

	let other = client.clone();
	let (first, second) = tokio::join!(client.get_access_token(), other.get_access_token());

	assert_eq!(first.expect("First refresh should succeed.").expose(), "shared");
	assert_eq!(second.expect("Second refresh should succeed.").expose(), "shared");
	assert_eq!(transport.calls(), 2, "Construction plus one shared refresh.");
}

#[tokio::test]
async fn file_store_shares_tokens_between_clients() {
	let path = env::temp_dir().join(format!(
		"paypal_rest_client_shared_{}_{}.json",
		process::id(),
		OffsetDateTime::now_utc().unix_timestamp_nanos(),
	));
	let transport = RecordingHttpClient::new();

	transport.reply_token("persisted");

	let first_store: Arc<dyn SessionStore> =
		Arc::new(FileStore::open(&path).expect("Failed to open file store."));

	TestClient::builder(CLIENT_ID, CLIENT_SECRET)
		.store(first_store)
		.http_client(transport.clone())
		.build()
		.await
		.expect("First client should fetch a token.");

	let second_store: Arc<dyn SessionStore> =
		Arc::new(FileStore::open(&path).expect("Failed to reopen file store."));
	let second = TestClient::builder(CLIENT_ID, CLIENT_SECRET)
		.store(second_store)
		.http_client(transport.clone())
		.build()
		.await
		.expect("Second client should reuse the persisted token.");

	assert_eq!(second.access_token().expose(), "persisted");
	assert_eq!(transport.calls(), 1);

	fs::remove_file(&path).unwrap_or_else(|e| {
		panic!("Failed to remove temporary session file {}: {e}", path.display())
	});
}
