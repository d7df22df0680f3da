//! Songbot Server Library
//!
//! A chat endpoint that answers messages with canned replies or with short
//! song recommendations picked from CSV corpora.

pub mod config;
pub mod corpus;
pub mod dispatch;
pub mod recommend;
pub mod render;
pub mod responses;
pub mod routing;
pub mod server;
pub mod signal;

// Re-export commonly used types for convenience
pub use corpus::{load_corpora, Corpora, CorpusLoadError};
pub use dispatch::{BotAnswer, Dispatcher};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
