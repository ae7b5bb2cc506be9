use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;

use crate::config::LmsConfig;
use crate::envelope::Envelope;
use crate::error::{LmsError, Result};
use crate::model::{Operation, PlayerId};

/// Status and body exactly as the media server returned them.
///
/// The body is kept as raw bytes; no charset decoding is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
  pub status: u16,
  pub body: Bytes,
}

impl Reply {
  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }
}

/// Blocking JSON-RPC client for the media server's `jsonrpc.js` endpoint.
///
/// Every call is independent: no session, no retry. Must not be called
/// from inside an async task; run it on a blocking thread instead.
#[derive(Debug, Clone)]
pub struct LmsClient {
  http_client: reqwest::blocking::Client,
  config: LmsConfig,
  url: String,
}

impl LmsClient {
  pub fn new(config: LmsConfig) -> Result<Self> {
    let http_client = reqwest::blocking::Client::builder()
      .timeout(config.timeout)
      .build()
      .map_err(|e| LmsError::ClientBuild(e.to_string()))?;

    Ok(Self {
      http_client,
      url: config.endpoint_url(),
      config,
    })
  }

  pub fn config(&self) -> &LmsConfig {
    &self.config
  }

  pub fn send(&self, target: &PlayerId, operation: Operation) -> Result<Reply> {
    let envelope = Envelope::build(target, operation, self.config.volume_step);
    let payload = envelope.to_json()?;

    log::debug!("POST {} {} for {}", self.url, operation, target);

    let response = self
      .http_client
      .post(&self.url)
      .header(CONTENT_TYPE, "application/json")
      .body(payload)
      .send()?;

    let status = response.status().as_u16();
    let body = response
      .bytes()
      .map_err(|e| LmsError::Body(e.to_string()))?;

    let reply = Reply { status, body };
    if !reply.is_success() {
      log::warn!("Server answered {} with status {}", operation, reply.status);
    }

    Ok(reply)
  }
}
