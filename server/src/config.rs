//! Configuration layer: typed settings with layered precedence (file → env → CLI).

use std::{
    net::{IpAddr, SocketAddr},
    num::NonZeroUsize,
    path::PathBuf,
    str::FromStr,
};

use clap::{builder::BoolishValueParser, Parser};
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "docket";
const ENV_PREFIX: &str = "DOCKET";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_RENDER_OUTPUT: &str = docket_core::render::DEFAULT_OUTPUT_PATH;
const DEFAULT_UPLOAD_REQUEST_LIMIT_BYTES: usize = crate::DEFAULT_UPLOAD_LIMIT;

/// Command-line arguments for the docket server.
#[derive(Debug, Default, Parser)]
#[command(name = "docket-server", version, about = "In-memory todo API and document renderer")]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "DOCKET_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Override the listener host.
    #[arg(long = "host", value_name = "HOST")]
    pub host: Option<String>,

    /// Override the listener port.
    #[arg(long = "port", value_name = "PORT")]
    pub port: Option<u16>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(long = "log-json", value_name = "BOOL", value_parser = BoolishValueParser::new())]
    pub log_json: Option<bool>,

    /// Override where rendered documents are written.
    #[arg(long = "render-output", value_name = "PATH")]
    pub render_output: Option<PathBuf>,

    /// Override the maximum upload request size in bytes.
    #[arg(long = "uploads-max-request-bytes", value_name = "BYTES")]
    pub uploads_max_request_bytes: Option<usize>,

    /// Start with the demonstration todos.
    #[arg(long = "todos-seed", value_name = "BOOL", value_parser = BoolishValueParser::new())]
    pub todos_seed: Option<bool>,
}

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub render: RenderSettings,
    pub uploads: UploadSettings,
    pub todos: TodoSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub addr: SocketAddr,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub output_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub max_request_bytes: NonZeroUsize,
}

#[derive(Debug, Clone)]
pub struct TodoSettings {
    pub seed: bool,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Parse the process arguments and load settings from them.
pub fn load_with_cli() -> Result<Settings, LoadError> {
    load(&CliArgs::parse())
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_cli_overrides(cli);

    Settings::from_raw(raw)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    server: RawServerSettings,
    logging: RawLoggingSettings,
    render: RawRenderSettings,
    uploads: RawUploadSettings,
    todos: RawTodoSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawServerSettings {
    host: Option<String>,
    port: Option<u16>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawRenderSettings {
    output_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawUploadSettings {
    max_request_bytes: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawTodoSettings {
    seed: Option<bool>,
}

impl RawSettings {
    fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(host) = cli.host.as_ref() {
            self.server.host = Some(host.clone());
        }
        if let Some(port) = cli.port {
            self.server.port = Some(port);
        }
        if let Some(level) = cli.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = cli.log_json {
            self.logging.json = Some(json);
        }
        if let Some(path) = cli.render_output.as_ref() {
            self.render.output_path = Some(path.clone());
        }
        if let Some(bytes) = cli.uploads_max_request_bytes {
            self.uploads.max_request_bytes = Some(bytes);
        }
        if let Some(seed) = cli.todos_seed {
            self.todos.seed = Some(seed);
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            server,
            logging,
            render,
            uploads,
            todos,
        } = raw;

        Ok(Self {
            server: build_server_settings(server)?,
            logging: build_logging_settings(logging)?,
            render: build_render_settings(render)?,
            uploads: build_upload_settings(uploads)?,
            todos: TodoSettings {
                seed: todos.seed.unwrap_or(true),
            },
        })
    }
}

fn build_server_settings(server: RawServerSettings) -> Result<ServerSettings, LoadError> {
    let host = server.host.unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = server.port.unwrap_or(DEFAULT_PORT);
    if port == 0 {
        return Err(LoadError::invalid(
            "server.port",
            "port must be greater than zero",
        ));
    }

    let ip = IpAddr::from_str(host.trim())
        .map_err(|err| LoadError::invalid("server.host", format!("{host:?}: {err}")))?;

    Ok(ServerSettings {
        addr: SocketAddr::new(ip, port),
    })
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn build_render_settings(render: RawRenderSettings) -> Result<RenderSettings, LoadError> {
    let output_path = render
        .output_path
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RENDER_OUTPUT));
    if output_path.as_os_str().is_empty() || output_path.file_name().is_none() {
        return Err(LoadError::invalid(
            "render.output_path",
            "must name a file",
        ));
    }
    Ok(RenderSettings { output_path })
}

fn build_upload_settings(uploads: RawUploadSettings) -> Result<UploadSettings, LoadError> {
    let value = uploads
        .max_request_bytes
        .unwrap_or(DEFAULT_UPLOAD_REQUEST_LIMIT_BYTES);
    let max_request_bytes = NonZeroUsize::new(value).ok_or_else(|| {
        LoadError::invalid("uploads.max_request_bytes", "must be greater than zero")
    })?;
    Ok(UploadSettings { max_request_bytes })
}
