//! Request payloads accepted by the dispatcher.

// crates.io
use serde_json::Value;
// self
use crate::{_prelude::*, error::ConfigError};

/// Optional payload attached to an API request.
///
/// Structured values are serialized to JSON before sending; strings (`Raw`, or a JSON string
/// value) go out unmodified. `null`, empty strings, and empty objects or arrays are treated as
/// "no body".
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestBody {
	/// No payload.
	#[default]
	Empty,
	/// Structured payload, serialized on send.
	Json(Value),
	/// Pre-encoded payload, sent as-is.
	Raw(String),
}
impl RequestBody {
	/// Serializes any `Serialize` value into a structured body.
	pub fn json<T>(value: &T) -> Result<Self>
	where
		T: ?Sized + Serialize,
	{
		serde_json::to_value(value).map(Self::Json).map_err(|e| ConfigError::BodySerialize(e).into())
	}

	/// Returns `true` when nothing will be transmitted.
	pub fn is_empty(&self) -> bool {
		match self {
			Self::Empty => true,
			Self::Json(value) => is_blank(value),
			Self::Raw(raw) => raw.is_empty(),
		}
	}

	/// Encodes the payload into the bytes put on the wire.
	pub fn into_bytes(self) -> Result<Vec<u8>> {
		if self.is_empty() {
			return Ok(Vec::new());
		}

		match self {
			Self::Empty => Ok(Vec::new()),
			Self::Json(Value::String(raw)) | Self::Raw(raw) => Ok(raw.into_bytes()),
			Self::Json(value) =>
				serde_json::to_vec(&value).map_err(|e| ConfigError::BodySerialize(e).into()),
		}
	}
}
impl From<()> for RequestBody {
	fn from(_: ()) -> Self {
		Self::Empty
	}
}
impl From<Value> for RequestBody {
	fn from(value: Value) -> Self {
		Self::Json(value)
	}
}
impl From<Option<Value>> for RequestBody {
	fn from(value: Option<Value>) -> Self {
		value.map(Self::Json).unwrap_or_default()
	}
}
impl From<String> for RequestBody {
	fn from(raw: String) -> Self {
		Self::Raw(raw)
	}
}
impl From<&str> for RequestBody {
	fn from(raw: &str) -> Self {
		Self::Raw(raw.to_owned())
	}
}

fn is_blank(value: &Value) -> bool {
	match value {
		Value::Null => true,
		Value::String(raw) => raw.is_empty(),
		Value::Object(map) => map.is_empty(),
		Value::Array(items) => items.is_empty(),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn structured_bodies_are_serialized() {
		let bytes = RequestBody::from(json!({ "intent": "sale" }))
			.into_bytes()
			.expect("JSON bodies should encode.");

		assert_eq!(bytes, br#"{"intent":"sale"}"#);
	}

	#[test]
	fn raw_bodies_pass_through_unmodified() {
		let raw = r#"{ "intent" : "sale" }"#;
		let bytes = RequestBody::from(raw).into_bytes().expect("Raw bodies should encode.");

		assert_eq!(bytes, raw.as_bytes());
	}

	#[test]
	fn json_strings_are_sent_without_quotes() {
		let bytes = RequestBody::from(json!("already-encoded"))
			.into_bytes()
			.expect("JSON strings should encode.");

		assert_eq!(bytes, b"already-encoded");
	}

	#[test]
	fn blank_structures_send_nothing() {
		for body in [
			RequestBody::from(()),
			RequestBody::from(None),
			RequestBody::from(json!(null)),
			RequestBody::from(json!({})),
			RequestBody::from(json!([])),
			RequestBody::from(json!("")),
			RequestBody::from(""),
		] {
			assert!(body.is_empty());
			assert!(body.into_bytes().expect("Blank bodies should encode.").is_empty());
		}

		assert!(!RequestBody::from(json!(0)).is_empty());
	}

	#[test]
	fn json_helper_serializes_structs() {
		#[derive(Serialize)]
		struct Amount<'a> {
			total: &'a str,
			currency: &'a str,
		}

		let body = RequestBody::json(&Amount { total: "7.47", currency: "USD" })
			.expect("Serializable structs should convert.");

		assert_eq!(body, RequestBody::Json(json!({ "total": "7.47", "currency": "USD" })));
	}
}
