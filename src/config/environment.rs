//! PayPal environments and their API roots.

// self
use crate::{_prelude::*, error::ConfigError};

const SANDBOX_API_ROOT: &str = "https://api.sandbox.paypal.com/";
const PRODUCTION_API_ROOT: &str = "https://api.paypal.com/";

/// PayPal deployment the client talks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
	#[default]
	/// Isolated test deployment without real financial effect.
	Sandbox,
	/// Live deployment.
	#[serde(alias = "live")]
	Production,
}
impl Environment {
	/// Maps the conventional `sandbox` flag onto an environment.
	pub const fn from_sandbox_flag(sandbox: bool) -> Self {
		if sandbox { Self::Sandbox } else { Self::Production }
	}

	/// Returns a stable label suitable for logs and config files.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Sandbox => "sandbox",
			Self::Production => "production",
		}
	}

	/// Returns the API root for the environment, including the trailing slash.
	pub const fn api_root(self) -> &'static str {
		match self {
			Self::Sandbox => SANDBOX_API_ROOT,
			Self::Production => PRODUCTION_API_ROOT,
		}
	}

	/// Returns the parsed API root.
	pub fn base_url(self) -> Result<Url, ConfigError> {
		Url::parse(self.api_root())
			.map_err(|_| ConfigError::InvalidBaseUrl { url: self.api_root().into() })
	}

	/// Returns `true` for [`Environment::Sandbox`].
	pub const fn is_sandbox(self) -> bool {
		matches!(self, Self::Sandbox)
	}
}
impl Display for Environment {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Environment {
	type Err = EnvironmentParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"sandbox" => Ok(Self::Sandbox),
			"production" | "live" => Ok(Self::Production),
			_ => Err(EnvironmentParseError { value: s.to_owned() }),
		}
	}
}

/// Raised when an environment label is not recognized.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Unknown PayPal environment `{value}`; expected sandbox, production, or live.")]
pub struct EnvironmentParseError {
	/// Rejected label.
	pub value: String,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn sandbox_flag_selects_api_root() {
		let sandbox = Environment::from_sandbox_flag(true)
			.base_url()
			.expect("Sandbox API root should parse.");
		let production = Environment::from_sandbox_flag(false)
			.base_url()
			.expect("Production API root should parse.");

		assert_eq!(sandbox.as_str(), "https://api.sandbox.paypal.com/");
		assert_eq!(production.as_str(), "https://api.paypal.com/");
	}

	#[test]
	fn labels_parse_case_insensitively() {
		assert_eq!("Sandbox".parse::<Environment>(), Ok(Environment::Sandbox));
		assert_eq!("LIVE".parse::<Environment>(), Ok(Environment::Production));
		assert_eq!(" production ".parse::<Environment>(), Ok(Environment::Production));

		let err = "staging".parse::<Environment>().expect_err("Unknown labels should fail.");

		assert_eq!(err.value, "staging");
	}

	#[test]
	fn serde_accepts_live_alias() {
		let env: Environment =
			serde_json::from_str("\"live\"").expect("The live alias should deserialize.");

		assert_eq!(env, Environment::Production);
		assert_eq!(
			serde_json::to_string(&Environment::Production)
				.expect("Environment should serialize to JSON."),
			"\"production\""
		);
	}
}
