//! Thread-safe in-memory [`SessionStore`]; the default cache of every client.

// self
use crate::{
	_prelude::*,
	auth::CachedToken,
	store::{SessionStore, StoreFuture},
};

type SessionMap = Arc<RwLock<HashMap<String, CachedToken>>>;

/// Keeps session records in-process. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(SessionMap);
impl MemoryStore {
	/// Returns the number of stored keys.
	pub fn len(&self) -> usize {
		self.0.read().len()
	}

	/// Returns `true` when nothing has been stored yet.
	pub fn is_empty(&self) -> bool {
		self.0.read().is_empty()
	}
}
impl SessionStore for MemoryStore {
	fn get<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<CachedToken>> {
		let found = self.0.read().get(key).cloned();

		Box::pin(async move { Ok(found) })
	}

	fn set<'a>(&'a self, key: &'a str, value: CachedToken) -> StoreFuture<'a, ()> {
		self.0.write().insert(key.to_owned(), value);

		Box::pin(async move { Ok(()) })
	}
}
