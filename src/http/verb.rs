//! HTTP verbs accepted by the dispatcher.

// crates.io
use oauth2::http::Method;
// self
use crate::_prelude::*;

/// HTTP verbs the client forwards to the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
	/// `GET`.
	Get,
	/// `POST`.
	Post,
	/// `PUT`.
	Put,
	/// `PATCH`.
	Patch,
	/// `DELETE`.
	Delete,
}
impl HttpVerb {
	/// Every verb the dispatcher accepts.
	pub const ALL: [Self; 5] = [Self::Get, Self::Post, Self::Put, Self::Patch, Self::Delete];

	/// Returns the upper-case wire name.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Get => "GET",
			Self::Post => "POST",
			Self::Put => "PUT",
			Self::Patch => "PATCH",
			Self::Delete => "DELETE",
		}
	}

	/// Returns the matching `http` method.
	pub fn method(self) -> Method {
		match self {
			Self::Get => Method::GET,
			Self::Post => Method::POST,
			Self::Put => Method::PUT,
			Self::Patch => Method::PATCH,
			Self::Delete => Method::DELETE,
		}
	}
}
impl Display for HttpVerb {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for HttpVerb {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		Self::ALL
			.into_iter()
			.find(|verb| verb.as_str().eq_ignore_ascii_case(s))
			.ok_or_else(|| Error::UnsupportedVerb { verb: s.to_owned() })
	}
}
