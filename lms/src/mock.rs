use mockall::mock;

use crate::control::PlayerControl;
use crate::error::Result;
use crate::model::{Operation, PlayerId};
use crate::transport::Reply;

mock! {
  pub PlayerControl {}

  impl PlayerControl for PlayerControl {
    fn send(&self, target: &PlayerId, operation: Operation) -> Result<Reply>;
  }
}
