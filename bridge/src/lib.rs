pub mod config;
pub mod routes;
pub mod server;

pub use config::BridgeArgs;
pub use routes::{BridgeContext, Player, Players, Route};
pub use server::BridgeError;
