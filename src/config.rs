//! Server Configuration
//!
//! Resolves the listen address and log level. Command-line flags win over
//! environment variables, which win over the built-in defaults.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tracing::Level;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const ENV_BIND: &str = "STUDENTS_BIND";
pub const ENV_LOG: &str = "STUDENTS_LOG";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Maximum level passed to the tracing subscriber.
    pub log_level: Level,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            log_level: Level::INFO,
        }
    }
}

impl ServerConfig {
    /// Reads the process arguments and environment.
    pub fn load() -> Result<Self> {
        let args: Vec<String> = std::env::args().collect();
        Self::from_args(
            &args,
            std::env::var(ENV_BIND).ok(),
            std::env::var(ENV_LOG).ok(),
        )
    }

    /// `args[0]` is the program name and is skipped. Unknown flags are ignored.
    pub fn from_args(
        args: &[String],
        env_bind: Option<String>,
        env_log: Option<String>,
    ) -> Result<Self> {
        let mut bind: Option<String> = None;
        let mut log: Option<String> = None;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    bind = Some(flag_value(args, i)?);
                    i += 2;
                }
                "--log-level" => {
                    log = Some(flag_value(args, i)?);
                    i += 2;
                }
                other => {
                    tracing::debug!("Ignoring unknown argument {}", other);
                    i += 1;
                }
            }
        }

        let bind = bind
            .or(env_bind)
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr: SocketAddr = bind
            .parse()
            .with_context(|| format!("invalid bind address: {}", bind))?;

        let log_level = match log.or(env_log) {
            Some(level) => level
                .parse::<Level>()
                .map_err(|e| anyhow::anyhow!("invalid log level {}: {}", level, e))?,
            None => Level::INFO,
        };

        Ok(Self {
            bind_addr,
            log_level,
        })
    }
}

fn flag_value(args: &[String], i: usize) -> Result<String> {
    args.get(i + 1)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("{} requires a value", args[i]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("student_registry")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_defaults_when_nothing_given() {
        let config = ServerConfig::from_args(&args(&[]), None, None).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND);
    }

    #[test]
    fn test_bind_flag_overrides_env() {
        let config = ServerConfig::from_args(
            &args(&["--bind", "0.0.0.0:9000"]),
            Some("127.0.0.1:7000".to_string()),
            None,
        )
        .unwrap();
        assert_eq!(config.bind_addr.port(), 9000);
    }

    #[test]
    fn test_env_bind_used_without_flag() {
        let config =
            ServerConfig::from_args(&args(&[]), Some("127.0.0.1:7000".to_string()), None).unwrap();
        assert_eq!(config.bind_addr.port(), 7000);
    }

    #[test]
    fn test_log_level_from_flag_and_env() {
        let config =
            ServerConfig::from_args(&args(&["--log-level", "debug"]), None, None).unwrap();
        assert_eq!(config.log_level, Level::DEBUG);

        let config = ServerConfig::from_args(&args(&[]), None, Some("warn".to_string())).unwrap();
        assert_eq!(config.log_level, Level::WARN);
    }

    #[test]
    fn test_unknown_arguments_are_skipped() {
        let config =
            ServerConfig::from_args(&args(&["--verbose", "--bind", "127.0.0.1:5001"]), None, None)
                .unwrap();
        assert_eq!(config.bind_addr.port(), 5001);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(ServerConfig::from_args(&args(&["--bind", "not-an-addr"]), None, None).is_err());
        assert!(ServerConfig::from_args(&args(&["--log-level", "loud"]), None, None).is_err());
        assert!(ServerConfig::from_args(&args(&["--bind"]), None, None).is_err());
    }
}
