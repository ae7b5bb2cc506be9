use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use lms::{LmsClient, LmsError};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use crate::config::BridgeArgs;
use crate::routes::{routes, BridgeContext};

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("Failed to create media server client: {0}")]
    Client(#[from] LmsError),

    #[error("Failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: warp::Error },

    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("Failed to initialise logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub fn init_logging(args: &BridgeArgs) -> Result<(), BridgeError> {
    TermLogger::init(
        args.log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;
    Ok(())
}

/// Resolves once `signal` fires. If the signal cannot be listened for, never resolves.
pub async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => log::info!("Shutting down"),
        Err(err) => {
            log::error!("Failed to listen for Ctrl-C, running until killed: {}", err);
            std::future::pending::<()>().await;
        }
    }
}

/// Run the bridge until Ctrl-C
pub fn serve(args: &BridgeArgs) -> Result<(), BridgeError> {
    let config = args.lms_config();
    log::info!("Forwarding commands to {}", config.endpoint_url());

    // Build the blocking client before any runtime exists
    let client = Arc::new(LmsClient::new(config)?);
    let ctx = Arc::new(BridgeContext::new(client.clone(), args.players()));
    log::info!(
        "Touch is {}, Radio is {}",
        ctx.players().touch,
        ctx.players().radio
    );

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let shutdown = wait_for_shutdown(tokio::signal::ctrl_c());

        let (addr, server) = warp::serve(routes(ctx))
            .try_bind_with_graceful_shutdown(args.listen, shutdown)
            .map_err(|source| BridgeError::Bind { addr: args.listen, source })?;

        log::info!("Listening on http://{}", addr);
        server.await;
        Ok::<(), BridgeError>(())
    })
}
