pub mod config;
pub mod control;
pub mod envelope;
pub mod error;
pub mod model;
pub mod transport;

#[cfg(feature = "mock")]
pub mod mock;

pub use config::LmsConfig;
pub use control::PlayerControl;
pub use envelope::{Envelope, Params};
pub use error::{LmsError, Result};
pub use model::{Operation, PlayerId};
pub use transport::{LmsClient, Reply};
