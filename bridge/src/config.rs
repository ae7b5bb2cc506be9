use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use lms::{LmsConfig, PlayerId};
use log::LevelFilter;

use crate::routes::Players;

pub const DEFAULT_TOUCH_MAC: &str = "00:04:20:23:a1:b5";
pub const DEFAULT_RADIO_MAC: &str = "00:04:20:2b:76:f6";

/// HTTP bridge that turns simple GET requests into media server commands
#[derive(Debug, Clone, Parser)]
#[clap(author, version, about)]
pub struct BridgeArgs {
    /// Address the bridge listens on
    #[clap(long, env = "BRIDGE_LISTEN", default_value = "0.0.0.0:8080")]
    pub listen: SocketAddr,
    /// Hostname of the media server
    #[clap(long, env = "LMS_HOST", default_value = lms::config::DEFAULT_HOST)]
    pub lms_host: String,
    #[clap(long, env = "LMS_PORT", default_value_t = lms::config::DEFAULT_PORT)]
    pub lms_port: u16,
    /// Hardware address of the Touch player
    #[clap(long, env = "TOUCH_MAC", default_value = DEFAULT_TOUCH_MAC)]
    pub touch_mac: String,
    /// Hardware address of the Radio player
    #[clap(long, env = "RADIO_MAC", default_value = DEFAULT_RADIO_MAC)]
    pub radio_mac: String,
    /// Volume change applied by volup/voldown
    #[clap(long, env = "VOLUME_STEP", default_value_t = lms::envelope::DEFAULT_VOLUME_STEP)]
    pub volume_step: u32,
    /// Give up on the media server after this many seconds (waits forever when unset)
    #[clap(long, env = "LMS_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
    #[clap(long, env = "LOG_LEVEL", default_value = "info", value_parser = parse_level)]
    pub log_level: LevelFilter,
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse().map_err(|_| format!("invalid log level: {}", s))
}

impl BridgeArgs {
    pub fn lms_config(&self) -> LmsConfig {
        LmsConfig::default()
            .with_host(self.lms_host.clone())
            .with_port(self.lms_port)
            .with_volume_step(self.volume_step)
            .with_timeout(self.timeout_secs.map(Duration::from_secs))
    }

    pub fn players(&self) -> Players {
        Players {
            touch: PlayerId::new(self.touch_mac.clone()),
            radio: PlayerId::new(self.radio_mac.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_arguments() {
        let args = BridgeArgs::try_parse_from([
            "bridge",
            "--listen", "127.0.0.1:9999",
            "--lms-host", "leia-l",
            "--lms-port", "9001",
            "--touch-mac", "aa:bb:cc:dd:ee:ff",
            "--radio-mac", "11:22:33:44:55:66",
            "--volume-step", "5",
            "--timeout-secs", "3",
            "--log-level", "debug",
        ])
        .unwrap();

        assert_eq!(args.listen, "127.0.0.1:9999".parse::<SocketAddr>().unwrap());
        assert_eq!(args.log_level, LevelFilter::Debug);

        let config = args.lms_config();
        assert_eq!(config.endpoint_url(), "http://leia-l:9001/jsonrpc.js");
        assert_eq!(config.volume_step, 5);
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));

        let players = args.players();
        assert_eq!(players.touch.as_str(), "aa:bb:cc:dd:ee:ff");
        assert_eq!(players.radio.as_str(), "11:22:33:44:55:66");
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let result = BridgeArgs::try_parse_from(["bridge", "--log-level", "chatty"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_bad_listen_address() {
        let result = BridgeArgs::try_parse_from(["bridge", "--listen", "not-an-address"]);
        assert!(result.is_err());
    }
}
