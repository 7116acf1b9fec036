//! Access-token secret wrapper and the cached token record kept in session storage.

// self
use crate::_prelude::*;

/// Lifetime PayPal grants to client-credential tokens, and the window a cached token is reused.
pub const TOKEN_LIFETIME: Duration = Duration::seconds(28_800);

/// Redacted bearer token wrapper keeping sensitive material out of logs.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);
impl AccessToken {
	/// Wraps a new token string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Returns `true` when no token material is present.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Renders the `Authorization: Bearer ...` header value.
	pub fn bearer(&self) -> String {
		format!("Bearer {}", self.0)
	}
}
impl AsRef<str> for AccessToken {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("AccessToken").field(&"<redacted>").finish()
	}
}
impl Display for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Token stored under the session key, stamped with the instant it was obtained.
///
/// Serializes as `{ "token": "...", "time": <unix seconds> }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedToken {
	/// Bearer token value.
	pub token: AccessToken,
	/// Instant the token was fetched or injected.
	#[serde(rename = "time", with = "time::serde::timestamp")]
	pub obtained_at: OffsetDateTime,
}
impl CachedToken {
	/// Stamps `token` with the current UTC instant.
	pub fn obtained_now(token: AccessToken) -> Self {
		Self::new(token, OffsetDateTime::now_utc())
	}

	/// Creates a record obtained at `obtained_at`.
	pub fn new(token: AccessToken, obtained_at: OffsetDateTime) -> Self {
		Self { token, obtained_at }
	}

	/// Returns `true` while the absolute age at `now` stays below `lifetime`.
	pub fn is_fresh_at(&self, now: OffsetDateTime, lifetime: Duration) -> bool {
		!self.token.is_empty() && (now - self.obtained_at).abs() < lifetime
	}
}
