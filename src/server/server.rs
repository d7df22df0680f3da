use anyhow::{Context, Result};
use std::time::Duration;

use tracing::{error, info};

use crate::corpus::PlaylistMood;
use crate::dispatch::{BotAnswer, Dispatched};
use crate::render::playlist_table;
use tower_http::services::ServeDir;

use axum::{
    extract::{Query, State},
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::metrics::{metrics_handler, record_dispatch, record_recommendation};
use super::{log_requests, state::*, ServerConfig};

const INDEX_PAGE: &str = include_str!("../../assets/index.html");

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub version: String,
    pub tagged_songs: usize,
    pub happy_songs: usize,
    pub sad_songs: usize,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

/// `?msg=` query. A missing message is the same as an empty one.
#[derive(Deserialize, Debug, Default)]
struct MessageQuery {
    pub msg: Option<String>,
}

impl MessageQuery {
    fn text(self) -> String {
        self.msg.unwrap_or_default()
    }
}

fn record_metrics(endpoint: &str, dispatched: &Dispatched) {
    record_dispatch(endpoint, dispatched.outcome);
    if let BotAnswer::Songs { songs } = &dispatched.answer {
        record_recommendation(songs.len());
    }
}

fn answer_response(answer: BotAnswer) -> Response {
    match answer {
        BotAnswer::Reply { text } => text.into_response(),
        BotAnswer::Songs { songs } => Html(playlist_table(&songs)).into_response(),
    }
}

async fn home() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

async fn get_bot_response(
    State(dispatcher): State<SharedDispatcher>,
    Query(query): Query<MessageQuery>,
) -> Response {
    let dispatched = dispatcher.converse(&query.text()).await;
    record_metrics("chat", &dispatched);
    answer_response(dispatched.answer)
}

async fn get_songs(
    State(dispatcher): State<SharedDispatcher>,
    Query(query): Query<MessageQuery>,
) -> Response {
    let dispatched = dispatcher.recommend_by_mood(&query.text()).await;
    record_metrics("mood_songs", &dispatched);
    answer_response(dispatched.answer)
}

async fn get_chat_json(
    State(dispatcher): State<SharedDispatcher>,
    Query(query): Query<MessageQuery>,
) -> Json<BotAnswer> {
    let dispatched = dispatcher.converse(&query.text()).await;
    record_metrics("chat_json", &dispatched);
    Json(dispatched.answer)
}

async fn get_songs_json(
    State(dispatcher): State<SharedDispatcher>,
    Query(query): Query<MessageQuery>,
) -> Json<BotAnswer> {
    let dispatched = dispatcher.recommend_by_mood(&query.text()).await;
    record_metrics("mood_songs_json", &dispatched);
    Json(dispatched.answer)
}

async fn get_stats(State(state): State<ServerState>) -> Json<ServerStats> {
    let playlists = &state.corpora.playlists;
    Json(ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        tagged_songs: state.corpora.songs.len(),
        happy_songs: playlists.songs(PlaylistMood::Happy).len(),
        sad_songs: playlists.songs(PlaylistMood::Sad).len(),
    })
}

pub fn make_app(
    config: ServerConfig,
    corpora: SharedCorpora,
    dispatcher: SharedDispatcher,
) -> Router {
    let state = ServerState::new(config.clone(), corpora, dispatcher);

    let chat_routes: Router = Router::new()
        .route("/get", get(get_bot_response))
        .route("/get-songs", get(get_songs))
        .with_state(state.clone());

    let api_routes: Router = Router::new()
        .route("/chat", get(get_chat_json))
        .route("/songs", get(get_songs_json))
        .route("/stats", get(get_stats))
        .with_state(state);

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new().route("/", get(home)),
    };

    home_router
        .merge(chat_routes)
        .nest("/v1", api_routes)
        .layer(middleware::from_fn_with_state(
            config.requests_logging_level,
            log_requests,
        ))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutting down...");
}

pub async fn run_server(
    config: ServerConfig,
    corpora: SharedCorpora,
    dispatcher: SharedDispatcher,
) -> Result<()> {
    let port = config.port;
    let metrics_port = config.metrics_port;
    let app = make_app(config, corpora, dispatcher);

    let metrics_app = Router::new().route("/metrics", get(metrics_handler));
    let metrics_listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", metrics_port))
        .await
        .with_context(|| format!("Could not bind metrics port {}", metrics_port))?;
    tokio::spawn(async move {
        if let Err(err) = axum::serve(metrics_listener, metrics_app).await {
            error!("Metrics server stopped: {}", err);
        }
    });

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .with_context(|| format!("Could not bind port {}", port))?;

    Ok(axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?)
}
