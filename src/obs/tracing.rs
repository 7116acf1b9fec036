// self
use crate::{
	_prelude::*,
	obs::{CacheLookup, CallKind},
};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// A span builder used around outbound calls.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Creates a new span tagged with the provided call kind + stage.
	pub fn new(kind: CallKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("paypal_client.call", call = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Logs a session-cache lookup for `key`.
pub fn trace_cache_lookup(key: &str, lookup: CacheLookup) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(session_key = key, result = lookup.as_str(), "token cache lookup");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (key, lookup);
	}
}

/// Logs the resolved target of an API request.
pub fn trace_dispatch(verb: &str, url: &str, has_body: bool) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(verb, url, has_body, "dispatching API request");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (verb, url, has_body);
	}
}
