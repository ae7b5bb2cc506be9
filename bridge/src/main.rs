use bridge::server::{self, BridgeError};
use bridge::BridgeArgs;
use clap::Parser;

fn main() -> Result<(), BridgeError> {
    let args = BridgeArgs::parse();
    server::init_logging(&args)?;
    server::serve(&args)
}
