//! Shared fixtures for integration tests: a scripted in-process transport that records every
//! request it receives.

#![allow(dead_code)]

// std
use std::{
	collections::VecDeque,
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
	sync::Arc,
};
// crates.io
use parking_lot::Mutex;
// self
use paypal_rest_client::{
	http::{ApiHttpClient, HttpClientError, HttpFuture, HttpRequest, HttpResponse},
	http_types::StatusCode,
};

pub const CLIENT_ID: &str = "a";
pub const CLIENT_SECRET: &str = "b";
/// `base64("a:b")`.
pub const BASIC_AUTH: &str = "Basic YTpi";

#[derive(Debug)]
pub enum FakeTransportError {
	ConnectionRefused,
}
impl Display for FakeTransportError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::ConnectionRefused => write!(f, "Connection refused."),
		}
	}
}
impl StdError for FakeTransportError {}

/// Request snapshot captured by [`RecordingHttpClient`].
#[derive(Clone, Debug)]
pub struct RecordedRequest {
	pub method: String,
	pub url: String,
	pub headers: Vec<(String, String)>,
	pub body: Vec<u8>,
}
impl RecordedRequest {
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}

	pub fn body_text(&self) -> &str {
		std::str::from_utf8(&self.body).expect("Recorded body should be UTF-8.")
	}
}

enum Scripted {
	Reply { status: u16, body: String },
	Fail,
}

#[derive(Default)]
struct Recording {
	script: VecDeque<Scripted>,
	requests: Vec<RecordedRequest>,
}

/// Transport that replays scripted replies in order and records every request.
///
/// Running out of script fails the call with a transport error.
#[derive(Clone, Default)]
pub struct RecordingHttpClient(Arc<Mutex<Recording>>);
impl RecordingHttpClient {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn reply(&self, status: u16, body: impl Into<String>) -> &Self {
		self.0.lock().script.push_back(Scripted::Reply { status, body: body.into() });

		self
	}

	pub fn reply_json(&self, body: serde_json::Value) -> &Self {
		self.reply(200, body.to_string())
	}

	pub fn reply_token(&self, token: &str) -> &Self {
		self.reply_json(serde_json::json!({
			"scope": "https://uri.paypal.com/services/payments/payment",
			"access_token": token,
			"token_type": "Bearer",
			"app_id": "APP-80W284485P519543T",
			"expires_in": 32400
		}))
	}

	pub fn fail(&self) -> &Self {
		self.0.lock().script.push_back(Scripted::Fail);

		self
	}

	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.0.lock().requests.clone()
	}

	pub fn calls(&self) -> usize {
		self.0.lock().requests.len()
	}

	pub fn last_request(&self) -> RecordedRequest {
		self.0.lock().requests.last().cloned().expect("At least one request should be recorded.")
	}
}
impl ApiHttpClient for RecordingHttpClient {
	type TransportError = FakeTransportError;

	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError> {
		let recorded = RecordedRequest {
			method: request.method().as_str().to_owned(),
			url: request.uri().to_string(),
			headers: request
				.headers()
				.iter()
				.map(|(key, value)| {
					(key.as_str().to_owned(), value.to_str().unwrap_or_default().to_owned())
				})
				.collect(),
			body: request.body().clone(),
		};
		let next = {
			let mut recording = self.0.lock();

			recording.requests.push(recorded);
			recording.script.pop_front()
		};

		Box::pin(async move {
			match next {
				Some(Scripted::Reply { status, body }) => {
					let mut response = HttpResponse::new(body.into_bytes());

					*response.status_mut() =
						StatusCode::from_u16(status).expect("Scripted status should be valid.");

					Ok(response)
				},
				Some(Scripted::Fail) | None =>
					Err(HttpClientError::Reqwest(Box::new(FakeTransportError::ConnectionRefused))),
			}
		})
	}
}
