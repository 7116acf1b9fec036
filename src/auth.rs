//! Client credentials, redacted access tokens, and the session-cached token record.

pub mod credentials;
pub mod token;

pub use credentials::*;
pub use token::*;
