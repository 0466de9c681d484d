//! Crate-level error types shared across the resource model and the admin client.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// A vocabulary value fell outside its closed set.
	#[error(transparent)]
	Vocabulary(#[from] crate::resource::VocabularyError),
	/// Scope string failed pattern validation.
	#[error(transparent)]
	Scope(#[from] crate::resource::ScopeError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Temporary upstream failure; retry with backoff.
	#[error(transparent)]
	Transient(#[from] TransientError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Admin API refused the request with a non-retryable status.
	#[error("Admin API rejected the request with status {status}: {reason}.")]
	Rejected {
		/// HTTP status code returned by the admin endpoint.
		status: u16,
		/// Response body or reason phrase summarizing the refusal.
		reason: String,
	},
	/// A client with the same identifier is already registered at the provider.
	#[error("Client is already registered with the admin API.")]
	AlreadyRegistered,
}

/// Configuration and validation failures raised locally.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Admin endpoint URL is invalid or cannot serve as a base.
	#[error("Admin endpoint URL is invalid.")]
	InvalidAdminUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Client payload could not be encoded for transmission.
	#[error("Client payload could not be encoded as JSON.")]
	EncodePayload {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
	/// Update and delete calls require the provider-assigned client identifier.
	#[error("Client payload is missing the provider-assigned client_id.")]
	MissingClientId,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Temporary failure variants (safe to retry).
#[derive(Debug, ThisError)]
pub enum TransientError {
	/// Admin endpoint returned a retryable response (429 or 5xx).
	#[error("Admin endpoint returned a retryable response: {message}.")]
	AdminEndpoint {
		/// Endpoint- or crate-supplied message summarizing the failure.
		message: String,
		/// HTTP status code, when available.
		status: Option<u16>,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
	},
	/// Admin endpoint responded with malformed JSON that could not be parsed.
	#[error("Admin endpoint returned malformed JSON.")]
	ResponseParse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::error::Error>,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
}
/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the admin endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the admin endpoint.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
