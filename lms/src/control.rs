use crate::error::Result;
use crate::model::{Operation, PlayerId};
use crate::transport::{LmsClient, Reply};

/// Anything that can deliver a player command and hand back the raw reply
pub trait PlayerControl: Send + Sync {
  fn send(&self, target: &PlayerId, operation: Operation) -> Result<Reply>;
}

impl PlayerControl for LmsClient {
  fn send(&self, target: &PlayerId, operation: Operation) -> Result<Reply> {
    LmsClient::send(self, target, operation)
  }
}
