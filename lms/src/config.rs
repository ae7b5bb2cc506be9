use std::time::Duration;

use crate::envelope::DEFAULT_VOLUME_STEP;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 9000;

/// Where the media server lives and how commands are shaped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LmsConfig {
  pub host: String,
  pub port: u16,
  pub volume_step: u32,
  /// `None` waits for the server indefinitely
  pub timeout: Option<Duration>,
}

impl Default for LmsConfig {
  fn default() -> Self {
    Self {
      host: DEFAULT_HOST.to_string(),
      port: DEFAULT_PORT,
      volume_step: DEFAULT_VOLUME_STEP,
      timeout: None,
    }
  }
}

impl LmsConfig {
  pub fn with_host(mut self, host: impl Into<String>) -> Self {
    self.host = host.into();
    self
  }

  pub fn with_port(mut self, port: u16) -> Self {
    self.port = port;
    self
  }

  pub fn with_volume_step(mut self, step: u32) -> Self {
    self.volume_step = step;
    self
  }

  pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
    self.timeout = timeout;
    self
  }

  pub fn endpoint_url(&self) -> String {
    format!("http://{}:{}/jsonrpc.js", self.host, self.port)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    let config = LmsConfig::default();
    assert_eq!(config.port, 9000);
    assert_eq!(config.volume_step, 10);
    assert!(config.timeout.is_none());
    assert_eq!(config.endpoint_url(), "http://localhost:9000/jsonrpc.js");
  }

  #[test]
  fn test_builder_overrides() {
    let config = LmsConfig::default()
      .with_host("leia-l")
      .with_port(9090)
      .with_volume_step(5)
      .with_timeout(Some(Duration::from_secs(3)));

    assert_eq!(config.endpoint_url(), "http://leia-l:9090/jsonrpc.js");
    assert_eq!(config.volume_step, 5);
    assert_eq!(config.timeout, Some(Duration::from_secs(3)));
  }
}
