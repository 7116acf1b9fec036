//! Session-store contract and built-in backends for the cached access token.
//!
//! The client consumes only `get(key)` and `set(key, value)`; lifecycle, expiry of the
//! backing storage, and sharing between clients are the host application's concern.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

// self
use crate::{_prelude::*, auth::CachedToken};

/// Boxed future returned by [`SessionStore`] operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + 'a + Send>>;

/// Key-value session storage holding [`CachedToken`] records.
pub trait SessionStore
where
	Self: Send + Sync,
{
	/// Fetches the record stored under `key`, if present.
	fn get<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<CachedToken>>;

	/// Persists or replaces the record stored under `key`.
	fn set<'a>(&'a self, key: &'a str, value: CachedToken) -> StoreFuture<'a, ()>;
}

/// Error type produced by [`SessionStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}
