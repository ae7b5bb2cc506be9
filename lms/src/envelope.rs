use serde::Serialize;

use crate::error::Result;
use crate::model::{Operation, PlayerId};

/// Request id sent with every call; the server echoes it back
pub const ENVELOPE_ID: u32 = 1;

/// JSON-RPC method understood by the server's `jsonrpc.js` endpoint
pub const SLIM_METHOD: &str = "slim.request";

pub const DEFAULT_VOLUME_STEP: u32 = 10;

/// JSON-RPC request body posted to the media server.
///
/// Serializes as
/// `{"id":1,"method":"slim.request","params":["<player>",["<token>",...]]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope {
  pub id: u32,
  pub method: String,
  pub params: Params,
}

/// `[player, [command tokens...]]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Params(pub String, pub Vec<String>);

impl Envelope {
  pub fn build(target: &PlayerId, operation: Operation, volume_step: u32) -> Self {
    Self {
      id: ENVELOPE_ID,
      method: SLIM_METHOD.to_string(),
      params: Params(target.as_str().to_string(), command_tokens(operation, volume_step)),
    }
  }

  pub fn target(&self) -> &str {
    &self.params.0
  }

  pub fn tokens(&self) -> &[String] {
    &self.params.1
  }

  pub fn to_json(&self) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(self)?)
  }
}

pub fn command_tokens(operation: Operation, volume_step: u32) -> Vec<String> {
  match operation {
    Operation::Play => vec!["play".to_string()],
    Operation::Pause => vec!["pause".to_string()],
    Operation::VolumeUp => mixer_volume(volume_step, true),
    Operation::VolumeDown => mixer_volume(volume_step, false),
  }
}

fn mixer_volume(step: u32, up: bool) -> Vec<String> {
  vec![
    "mixer".to_string(),
    "volume".to_string(),
    volume_token(step, up),
  ]
}

/// Relative volume argument, always signed: `+10`, `-10`
pub fn volume_token(step: u32, up: bool) -> String {
  let sign = if up { '+' } else { '-' };
  format!("{}{}", sign, step)
}

#[cfg(test)]
mod tests {
  use super::*;

  const RADIO: &str = "00:04:20:2b:76:f6";

  #[test]
  fn test_pause_envelope_wire_format() {
    let envelope = Envelope::build(&PlayerId::from(RADIO), Operation::Pause, DEFAULT_VOLUME_STEP);
    let json = String::from_utf8(envelope.to_json().unwrap()).unwrap();

    assert_eq!(
      json,
      r#"{"id":1,"method":"slim.request","params":["00:04:20:2b:76:f6",["pause"]]}"#
    );
  }

  #[test]
  fn test_play_and_pause_are_single_tokens() {
    let id = PlayerId::from(RADIO);

    let play = Envelope::build(&id, Operation::Play, DEFAULT_VOLUME_STEP);
    assert_eq!(play.target(), RADIO);
    assert_eq!(play.tokens(), ["play"]);

    let pause = Envelope::build(&id, Operation::Pause, DEFAULT_VOLUME_STEP);
    assert_eq!(pause.tokens(), ["pause"]);
  }

  #[test]
  fn test_volume_envelopes_have_three_tokens() {
    let id = PlayerId::from("00:04:20:23:a1:b5");

    let up = Envelope::build(&id, Operation::VolumeUp, DEFAULT_VOLUME_STEP);
    assert_eq!(up.tokens(), ["mixer", "volume", "+10"]);

    let down = Envelope::build(&id, Operation::VolumeDown, DEFAULT_VOLUME_STEP);
    assert_eq!(down.tokens(), ["mixer", "volume", "-10"]);
  }

  #[test]
  fn test_volume_step_is_configurable() {
    let id = PlayerId::from(RADIO);
    let up = Envelope::build(&id, Operation::VolumeUp, 5);
    assert_eq!(up.tokens()[2], "+5");
    assert_eq!(volume_token(0, false), "-0");
  }

  #[test]
  fn test_target_is_not_validated() {
    for raw in ["", "bedroom", "ZZ:ZZ", "00:04:20:2b:76:f6 "] {
      let envelope = Envelope::build(&PlayerId::from(raw), Operation::Play, DEFAULT_VOLUME_STEP);
      assert_eq!(envelope.target(), raw);
    }
  }

  #[test]
  fn test_envelope_header_fields() {
    let envelope = Envelope::build(&PlayerId::from(RADIO), Operation::VolumeUp, DEFAULT_VOLUME_STEP);
    assert_eq!(envelope.id, 1);
    assert_eq!(envelope.method, "slim.request");

    let value: serde_json::Value = serde_json::from_slice(&envelope.to_json().unwrap()).unwrap();
    assert_eq!(value["params"][1], serde_json::json!(["mixer", "volume", "+10"]));
  }
}
