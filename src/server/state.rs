use axum::extract::FromRef;

use crate::corpus::Corpora;
use crate::dispatch::Dispatcher;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type SharedCorpora = Arc<Corpora>;
pub type SharedDispatcher = Arc<Dispatcher>;

/// Everything handlers read. Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub corpora: SharedCorpora,
    pub dispatcher: SharedDispatcher,
}

impl ServerState {
    pub fn new(config: ServerConfig, corpora: SharedCorpora, dispatcher: SharedDispatcher) -> Self {
        ServerState {
            config,
            start_time: Instant::now(),
            corpora,
            dispatcher,
        }
    }
}

impl FromRef<ServerState> for SharedCorpora {
    fn from_ref(input: &ServerState) -> Self {
        input.corpora.clone()
    }
}

impl FromRef<ServerState> for SharedDispatcher {
    fn from_ref(input: &ServerState) -> Self {
        input.dispatcher.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
