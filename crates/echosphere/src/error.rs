use thiserror::Error;

/// Everything that can go wrong during one analysis attempt. None of these
/// are fatal to the process; every failure is scoped to a single round and
/// retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
  #[error("Brand name cannot be empty")]
  EmptyBrand,

  #[error("The analysis service took too long to respond")]
  Timeout,

  #[error("The analysis service reported an internal error (HTTP {status})")]
  Server { status: u16 },

  #[error("Too many requests - the analysis service is rate limiting us")]
  RateLimited,

  #[error("The analysis service endpoint was not found")]
  NotFound,

  #[error("Could not reach the analysis service: {message}")]
  Network { message: String },

  #[error("The analysis service returned an unreadable response: {message}")]
  Malformed { message: String },
}

impl AnalysisError {
  pub fn network(message: impl Into<String>) -> Self {
    Self::Network { message: message.into() }
  }

  pub fn malformed(message: impl Into<String>) -> Self {
    Self::Malformed { message: message.into() }
  }

  /// Map a non-success HTTP status onto the matching error kind
  pub fn from_status(status: u16) -> Self {
    match status {
      404 => Self::NotFound,
      429 => Self::RateLimited,
      500..=599 => Self::Server { status },
      _ => Self::Network { message: format!("unexpected HTTP status {status}") },
    }
  }
}

impl From<reqwest::Error> for AnalysisError {
  fn from(err: reqwest::Error) -> Self {
    if err.is_timeout() {
      return Self::Timeout;
    }
    if let Some(status) = err.status() {
      return Self::from_status(status.as_u16());
    }
    if err.is_decode() {
      return Self::malformed(err.to_string());
    }
    Self::network(err.to_string())
  }
}
