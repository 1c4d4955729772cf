//! Gateway configuration from environment variables.

use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8050;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid port in {var}: {value}")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub bind_addr: String,
    pub port: u16,
    /// Optional directory of static assets served under `/assets`
    pub ui_dir: Option<PathBuf>,
    pub debug: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
            ui_dir: None,
            debug: false,
        }
    }
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `WORLD_CUP_GATEWAY_PORT` wins over `PORT`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match ["WORLD_CUP_GATEWAY_PORT", "PORT"]
            .into_iter()
            .find_map(|var| lookup(var).map(|value| (var, value)))
        {
            Some((var, value)) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort { var, value })?,
            None => DEFAULT_PORT,
        };

        let bind_addr =
            lookup("WORLD_CUP_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let ui_dir = lookup("WORLD_CUP_UI_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);
        let debug = lookup("WORLD_CUP_DEBUG")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            bind_addr,
            port,
            ui_dir,
            debug,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Used when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "world_cup_gateway=debug,world_cup_stats=debug,tower_http=debug,info"
        } else {
            "info"
        }
    }
}
