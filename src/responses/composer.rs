use super::table::ResponseTable;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::sync::Arc;

pub const DEFAULT_REPLIES: [&str; 3] = [
    "I'm sorry, I didn't understand that.",
    "Could you please rephrase your question?",
    "Let me think about that...",
];

#[derive(Clone)]
pub struct ResponseComposer {
    table: Arc<ResponseTable>,
}

impl ResponseComposer {
    pub fn new(table: Arc<ResponseTable>) -> Self {
        Self { table }
    }

    pub fn compose(&self, text: &str) -> String {
        self.compose_with(text, &mut rand::rng())
    }

    pub fn compose_with<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> String {
        match self.table.lookup(text) {
            Some(entry) => entry
                .replies
                .choose(rng)
                .cloned()
                .unwrap_or_else(|| default_reply_with(rng)),
            None => default_reply_with(rng),
        }
    }
}

pub fn default_reply() -> String {
    default_reply_with(&mut rand::rng())
}

pub fn default_reply_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    DEFAULT_REPLIES
        .choose(rng)
        .copied()
        .unwrap_or(DEFAULT_REPLIES[0])
        .to_string()
}
