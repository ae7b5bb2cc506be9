/// Errors raised while talking to the media server
#[derive(Debug, thiserror::Error)]
pub enum LmsError {
  #[error("Failed to serialize request envelope: {0}")]
  Serialization(String),

  #[error("Network communication error: {0}")]
  Network(String),

  #[error("Timeout occurred during request: {0}")]
  Timeout(String),

  #[error("Failed to read response body: {0}")]
  Body(String),

  #[error("Failed to build HTTP client: {0}")]
  ClientBuild(String),
}

impl From<reqwest::Error> for LmsError {
  fn from(err: reqwest::Error) -> Self {
    if err.is_timeout() {
      LmsError::Timeout(err.to_string())
    } else {
      LmsError::Network(err.to_string())
    }
  }
}

impl From<serde_json::Error> for LmsError {
  fn from(err: serde_json::Error) -> Self {
    LmsError::Serialization(err.to_string())
  }
}

pub type Result<T> = std::result::Result<T, LmsError>;
