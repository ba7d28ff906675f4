//! Server configuration via CLI args and environment variables.

use clap::Parser;

/// Diagnostic HTTP service for the svcerr error model.
#[derive(Parser, Debug, Clone)]
#[command(name = "svcerr-server", version, about)]
pub struct Config {
    /// Bind address.
    #[arg(long, default_value = "0.0.0.0", env = "SVCERR_HOST")]
    pub host: String,

    /// Bind port.
    #[arg(long, default_value_t = 7480, env = "SVCERR_PORT")]
    pub port: u16,

    /// Hide the detail of 5xx errors from clients (handlers still log it).
    #[arg(long, env = "SVCERR_REDACT")]
    pub redact: bool,

    /// Log level.
    #[arg(long, default_value = "info", env = "SVCERR_LOG_LEVEL")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[arg(long, default_value = "text", env = "SVCERR_LOG_FORMAT")]
    pub log_format: String,
}

impl Config {
    /// Parses configuration from CLI args and env vars.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["svcerr-server"]).unwrap();
        assert_eq!(config.port, 7480);
        assert!(!config.redact);
        assert_eq!(config.log_format, "text");
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "svcerr-server",
            "--port",
            "9000",
            "--redact",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert!(config.redact);
        assert_eq!(config.log_format, "json");
    }
}
