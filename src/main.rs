use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::{fmt::Debug, path::PathBuf};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use songbot_server::config::{
    AppConfig, CliConfig, FileConfig, SentimentEngineKind, SentimentSettings,
    DEFAULT_SENTIMENT_TIMEOUT_SEC,
};
use songbot_server::corpus::{load_corpora, PlaylistMood};
use songbot_server::dispatch::Dispatcher;
use songbot_server::recommend::RecommendationSelector;
use songbot_server::responses::{ResponseComposer, ResponseTable};
use songbot_server::server::{self, run_server, RequestsLoggingLevel, ServerConfig};
use songbot_server::signal::{
    HttpSentimentEngine, KeywordEngine, LexiconSentimentEngine, SentimentEngine, SignalExtractor,
    VocabularyKeywordEngine,
};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Directory holding the song CSV files.
    #[clap(value_parser = parse_path)]
    pub data_dir: Option<PathBuf>,

    /// Path to a TOML config file. Values in it override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 5000)]
    pub port: u16,

    /// The port for the metrics server (Prometheus scraping).
    #[clap(long, default_value_t = 9091)]
    pub metrics_port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Path to the frontend directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,

    /// TOML file with the trigger/replies table. The built-in table is used otherwise.
    #[clap(long, value_parser = parse_path)]
    pub responses_file: Option<PathBuf>,

    /// Sentiment engine used for mood detection.
    #[clap(long, value_enum, default_value_t = SentimentEngineKind::Lexicon)]
    pub sentiment_engine: SentimentEngineKind,

    /// URL of the classifier service, required by the http engine.
    #[clap(long)]
    pub sentiment_url: Option<String>,

    /// Timeout in seconds for classifier requests.
    #[clap(long, default_value_t = DEFAULT_SENTIMENT_TIMEOUT_SEC)]
    pub sentiment_timeout_sec: u64,

    /// Load corpora and responses, print a summary and exit.
    #[clap(long)]
    pub check_only: bool,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            data_dir: self.data_dir.clone(),
            port: self.port,
            metrics_port: self.metrics_port,
            logging_level: self.logging_level.clone(),
            frontend_dir_path: self.frontend_dir_path.clone(),
            responses_file: self.responses_file.clone(),
            sentiment_engine: self.sentiment_engine,
            sentiment_url: self.sentiment_url.clone(),
            sentiment_timeout_sec: self.sentiment_timeout_sec,
        }
    }
}

fn make_sentiment_engine(settings: &SentimentSettings) -> Result<Arc<dyn SentimentEngine>> {
    let engine: Arc<dyn SentimentEngine> = match settings {
        SentimentSettings::Lexicon => {
            info!("Using lexicon sentiment engine");
            Arc::new(LexiconSentimentEngine)
        }
        SentimentSettings::Http { url, timeout } => {
            info!("Using sentiment classifier at {} (timeout {:?})", url, timeout);
            Arc::new(HttpSentimentEngine::new(url.clone(), *timeout)?)
        }
    };
    Ok(engine)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Reading config file {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let app_config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    info!("Loading song corpora from {:?}...", app_config.data_dir);
    let corpora = Arc::new(load_corpora(&app_config.data_dir).context("Could not load song corpora")?);

    let response_table = match &app_config.responses_file {
        Some(path) => {
            info!("Loading responses from {:?}", path);
            ResponseTable::load(path)?
        }
        None => ResponseTable::builtin(),
    };
    info!("Response table has {} triggers", response_table.len());

    if cli_args.check_only {
        println!(
            "{} language-tagged songs, {} happy songs, {} sad songs, {} response triggers",
            corpora.songs.len(),
            corpora.playlists.songs(PlaylistMood::Happy).len(),
            corpora.playlists.songs(PlaylistMood::Sad).len(),
            response_table.len()
        );
        return Ok(());
    }

    let sentiment_engine = make_sentiment_engine(&app_config.sentiment)?;
    let keyword_engine: Arc<dyn KeywordEngine> = Arc::new(VocabularyKeywordEngine);

    let dispatcher = Arc::new(Dispatcher::new(
        SignalExtractor::new(sentiment_engine, keyword_engine),
        RecommendationSelector::new(corpora.clone()),
        ResponseComposer::new(Arc::new(response_table)),
    ));

    // Initialize metrics system
    info!("Initializing metrics...");
    server::metrics::init_metrics();
    server::metrics::init_corpus_metrics(&corpora);

    let server_config = ServerConfig {
        requests_logging_level: app_config.logging_level,
        port: app_config.port,
        metrics_port: app_config.metrics_port,
        frontend_dir_path: app_config.frontend_dir_path,
    };

    info!("Ready to serve at port {}!", server_config.port);
    info!("Metrics available at port {}!", server_config.metrics_port);
    run_server(server_config, corpora, dispatcher).await
}
