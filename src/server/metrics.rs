use crate::corpus::{Corpora, Language, MoodKey, PlaylistMood};
use crate::dispatch::DispatchOutcome;
use axum::{http::StatusCode, response::IntoResponse};
use lazy_static::lazy_static;
use prometheus::{
    CounterVec, Encoder, GaugeVec, Histogram, HistogramOpts, HistogramVec, Opts, Registry,
    TextEncoder,
};
use std::time::Duration;

/// Metric name prefix for all songbot metrics
const PREFIX: &str = "songbot";

lazy_static! {
    // Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // HTTP Request Metrics
    pub static ref HTTP_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_http_requests_total"), "Total number of HTTP requests"),
        &["method", "endpoint", "status"]
    ).expect("Failed to create http_requests_total metric");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_http_request_duration_seconds"),
            "HTTP request duration in seconds"
        )
        .buckets(vec![0.001, 0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0]),
        &["method", "endpoint"]
    ).expect("Failed to create http_request_duration_seconds metric");

    // Chat Metrics
    pub static ref DISPATCH_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_dispatch_total"), "Answered chat messages by outcome"),
        &["endpoint", "outcome"]
    ).expect("Failed to create dispatch_total metric");

    pub static ref EXTRACTION_FAILURES_TOTAL: CounterVec = CounterVec::new(
        Opts::new(
            format!("{PREFIX}_extraction_failures_total"),
            "Signal extraction failures by reason"
        ),
        &["reason"]
    ).expect("Failed to create extraction_failures_total metric");

    pub static ref RECOMMENDED_SONGS: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            format!("{PREFIX}_recommended_songs"),
            "Number of songs in each recommendation"
        )
        .buckets(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0])
    ).expect("Failed to create recommended_songs metric");

    // Corpus Metrics
    pub static ref CORPUS_SONGS: GaugeVec = GaugeVec::new(
        Opts::new(format!("{PREFIX}_corpus_songs"), "Songs loaded at startup"),
        &["corpus", "mood", "language"]
    ).expect("Failed to create corpus_songs metric");
}

/// Initialize all metrics and register them with the Prometheus registry
pub fn init_metrics() {
    // Register all metrics - ignore errors if already registered (for tests)
    let _ = REGISTRY.register(Box::new(HTTP_REQUESTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(DISPATCH_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(EXTRACTION_FAILURES_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(RECOMMENDED_SONGS.clone()));
    let _ = REGISTRY.register(Box::new(CORPUS_SONGS.clone()));

    tracing::info!("Metrics system initialized successfully");
}

/// Initialize corpus gauges from the loaded songs
pub fn init_corpus_metrics(corpora: &Corpora) {
    for mood in MoodKey::ALL {
        for language in Language::PRIORITY {
            CORPUS_SONGS
                .with_label_values(&["tagged", mood.as_str(), language.as_str()])
                .set(corpora.songs.count(mood, language) as f64);
        }
    }
    for mood in [PlaylistMood::Happy, PlaylistMood::Sad] {
        CORPUS_SONGS
            .with_label_values(&["playlist", mood.as_str(), ""])
            .set(corpora.playlists.songs(mood).len() as f64);
    }
}

/// Groups request paths so that arbitrary URLs don't create new series.
pub fn endpoint_label(path: &str) -> &'static str {
    match path {
        "/" => "home",
        "/get" => "chat",
        "/get-songs" => "mood_songs",
        "/v1/chat" => "chat_json",
        "/v1/songs" => "mood_songs_json",
        "/v1/stats" => "stats",
        _ => "other",
    }
}

/// Record an HTTP request
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    let endpoint = endpoint_label(path);
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, endpoint, &status.to_string()])
        .inc();

    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, endpoint])
        .observe(duration.as_secs_f64());
}

/// Record how a chat message was answered
pub fn record_dispatch(endpoint: &str, outcome: DispatchOutcome) {
    DISPATCH_TOTAL
        .with_label_values(&[endpoint, outcome.as_str()])
        .inc();

    if let DispatchOutcome::Fallback { reason } = outcome {
        EXTRACTION_FAILURES_TOTAL.with_label_values(&[reason]).inc();
    }
}

pub fn record_recommendation(song_count: usize) {
    RECOMMENDED_SONGS.observe(song_count as f64);
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();

    let mut buffer = vec![];
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(()) => {
            let response = String::from_utf8(buffer).unwrap_or_else(|_| String::from(""));
            (StatusCode::OK, response)
        }
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {}", e),
            )
        }
    }
}
