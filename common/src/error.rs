use thiserror::Error;

/// Failures of the banner's collaborators. None of these ever reach the
/// user; they are logged and the affected step is skipped.
#[derive(Debug, Error)]
pub enum Error {
	#[error("invalid site configuration: {0}")]
	Config(#[from] serde_json::Error),

	#[error("storage: {0}")]
	Storage(String),

	#[error("analytics: {0}")]
	Analytics(String),

	#[error("invalid timestamp {0:?}: {1}")]
	Timestamp(String, chrono::ParseError),
}

/// Shorthand for most commonly used Result type
pub type Result<T = ()> = std::result::Result<T, Error>;
