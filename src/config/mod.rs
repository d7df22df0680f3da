mod file_config;

pub use file_config::{FileConfig, SentimentConfig};

use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SentimentEngineKind {
    #[default]
    Lexicon,
    Http,
}

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub responses_file: Option<PathBuf>,
    pub sentiment_engine: SentimentEngineKind,
    pub sentiment_url: Option<String>,
    pub sentiment_timeout_sec: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SentimentSettings {
    Lexicon,
    Http { url: String, timeout: Duration },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub responses_file: Option<PathBuf>,
    pub sentiment: SentimentSettings,
}

pub const DEFAULT_SENTIMENT_TIMEOUT_SEC: u64 = 10;

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let data_dir = file
            .data_dir
            .map(PathBuf::from)
            .or_else(|| cli.data_dir.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("data_dir must be specified as an argument or in the config file")
            })?;

        if !data_dir.exists() {
            bail!("Data directory does not exist: {:?}", data_dir);
        }
        if !data_dir.is_dir() {
            bail!("data_dir is not a directory: {:?}", data_dir);
        }

        let port = file.port.unwrap_or(cli.port);
        let metrics_port = file.metrics_port.unwrap_or(cli.metrics_port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());

        let responses_file = file
            .responses_file
            .map(PathBuf::from)
            .or_else(|| cli.responses_file.clone());
        if let Some(path) = &responses_file {
            if !path.is_file() {
                bail!("Responses file not found: {:?}", path);
            }
        }

        let sentiment = resolve_sentiment(cli, file.sentiment.unwrap_or_default())?;

        Ok(Self {
            data_dir,
            port,
            metrics_port,
            logging_level,
            frontend_dir_path,
            responses_file,
            sentiment,
        })
    }
}

fn resolve_sentiment(cli: &CliConfig, file: SentimentConfig) -> Result<SentimentSettings> {
    let engine = match file.engine {
        Some(name) => match SentimentEngineKind::from_str(&name, true) {
            Ok(kind) => kind,
            Err(_) => bail!("Unknown sentiment engine \"{}\"", name),
        },
        None => cli.sentiment_engine,
    };

    match engine {
        SentimentEngineKind::Lexicon => Ok(SentimentSettings::Lexicon),
        SentimentEngineKind::Http => {
            let url = file
                .url
                .or_else(|| cli.sentiment_url.clone())
                .ok_or_else(|| anyhow::anyhow!("The http sentiment engine requires a url"))?;
            let timeout_sec = file.timeout_sec.unwrap_or(cli.sentiment_timeout_sec);
            if timeout_sec == 0 {
                bail!("Sentiment timeout must be greater than zero");
            }
            Ok(SentimentSettings::Http {
                url,
                timeout: Duration::from_secs(timeout_sec),
            })
        }
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
