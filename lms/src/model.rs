use std::fmt;

/// A player command the bridge knows how to translate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
  Play,
  Pause,
  VolumeUp,
  VolumeDown,
}

impl Operation {
  pub const ALL: [Operation; 4] = [
    Operation::Play,
    Operation::Pause,
    Operation::VolumeUp,
    Operation::VolumeDown,
  ];

  /// Short label used in logs and route names
  pub fn name(&self) -> &'static str {
    match self {
      Operation::Play => "play",
      Operation::Pause => "pause",
      Operation::VolumeUp => "volup",
      Operation::VolumeDown => "voldown",
    }
  }
}

impl fmt::Display for Operation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Hardware address of a player, e.g. `00:04:20:2b:76:f6`.
///
/// The value is never validated; whatever the caller hands in is what the
/// server receives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerId(String);

impl PlayerId {
  pub fn new(id: impl Into<String>) -> Self {
    Self(id.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for PlayerId {
  fn from(s: &str) -> Self {
    Self::new(s)
  }
}

impl From<String> for PlayerId {
  fn from(s: String) -> Self {
    Self(s)
  }
}

impl fmt::Display for PlayerId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
