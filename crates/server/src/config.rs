use config::{Config as ConfigLoader, Environment, File};
use graph_protocol::ParseOptions;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::error::Error;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_VAR: &str = "BF_CONFIG";

/// Prefix for per-key overrides, e.g. `BF_SERVER__PORT=9000`.
const ENV_PREFIX: &str = "BF";

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Size of each socket read.
    pub read_buffer_size: usize,
    /// Listen queue length passed to `listen(2)`.
    pub backlog: u32,
    /// Requests longer than this are answered as invalid input.
    pub max_request_bytes: usize,
    /// Connections served at once. 1 reproduces strictly sequential handling.
    pub max_connections: usize,
    pub read_timeout_ms: u64,
}

impl ServerConfig {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            read_buffer_size: 1024,
            backlog: 1000,
            max_request_bytes: 1024 * 1024,
            max_connections: 1,
            read_timeout_ms: 30_000,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub protocol: ParseOptions,
}

impl Config {
    /// Rejects settings the server cannot run with.
    pub fn validate(&self) -> Result<(), Error> {
        if self.server.read_buffer_size == 0 {
            return Err(Error::InvalidConfig(
                "server.read_buffer_size must be positive".to_string(),
            ));
        }
        if self.server.max_request_bytes == 0 {
            return Err(Error::InvalidConfig(
                "server.max_request_bytes must be positive".to_string(),
            ));
        }
        if self.server.max_connections == 0 {
            return Err(Error::InvalidConfig(
                "server.max_connections must be positive".to_string(),
            ));
        }
        if self.protocol.max_vertices == 0 {
            return Err(Error::InvalidConfig(
                "protocol.max_vertices must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Loads configuration from defaults, an optional file and environment variables.
///
/// The file is taken from `BF_CONFIG` when set (and must then exist), otherwise
/// `crates/server/Config.toml` under the current directory is used if present.
pub fn load_config() -> Result<Config, Error> {
    match env::var(CONFIG_PATH_VAR) {
        Ok(path) => load_config_from(Some(Path::new(&path)), true),
        Err(_) => {
            let base_path = env::current_dir().map_err(|e| {
                Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
            })?;
            let config_file_path: PathBuf =
                base_path.join("crates").join("server").join("Config.toml");
            load_config_from(Some(config_file_path.as_path()), false)
        }
    }
}

/// Loads configuration from `path` layered over defaults, with environment overrides.
pub fn load_config_from(path: Option<&Path>, required: bool) -> Result<Config, Error> {
    build_config(path, required, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn build_config(
    path: Option<&Path>,
    required: bool,
    environment: Environment,
) -> Result<Config, Error> {
    if let Some(path) = path {
        if required && !path.exists() {
            return Err(Error::ConfigLoadError(format!(
                "Configuration file not found at path: {}",
                path.display()
            )));
        }
    }

    let defaults = Config::default();
    let mut builder = ConfigLoader::builder()
        .set_default("server.host", defaults.server.host)
        .and_then(|b| b.set_default("server.port", i64::from(defaults.server.port)))
        .and_then(|b| {
            b.set_default(
                "server.read_buffer_size",
                defaults.server.read_buffer_size as i64,
            )
        })
        .and_then(|b| b.set_default("server.backlog", i64::from(defaults.server.backlog)))
        .and_then(|b| {
            b.set_default(
                "server.max_request_bytes",
                defaults.server.max_request_bytes as i64,
            )
        })
        .and_then(|b| {
            b.set_default(
                "server.max_connections",
                defaults.server.max_connections as i64,
            )
        })
        .and_then(|b| {
            b.set_default(
                "server.read_timeout_ms",
                defaults.server.read_timeout_ms as i64,
            )
        })
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(required));
    }

    let s = builder
        .add_source(environment)
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    app_config.validate()?;
    Ok(app_config)
}
