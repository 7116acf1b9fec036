//! Minimal PayPal REST client: client-credentials OAuth 2.0, session-scoped token caching, and a
//! generic authenticated request dispatcher that forwards opaque JSON payloads.
//!
//! ```no_run
//! # async fn demo() -> paypal_rest_client::error::Result<()> {
//! use paypal_rest_client::{client::PayPalClient, serde_json::json};
//!
//! let client = PayPalClient::builder("client-id", "client-secret").sandbox(true).build().await?;
//! let payment =
//! 	client.post("v1/payments/payment", json!({ "intent": "sale" })).await?;
//!
//! println!("{payment:?}");
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod obs;
pub mod store;

mod _prelude {
	pub use std::{
		collections::HashMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use oauth2::http as http_types;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use serde_json;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
