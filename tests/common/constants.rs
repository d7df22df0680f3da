//! Shared constants for end-to-end tests
//!
//! When the test corpora change, update only this file.

// ============================================================================
// Test Corpus Songs
// ============================================================================

/// Songs written to English-pop.csv
pub const ENGLISH_POP_SONGS: [&str; 7] = [
    "Blinding Lights",
    "Levitating",
    "Shape of You",
    "Bad Guy",
    "As It Was",
    "Anti-Hero",
    "Flowers",
];

/// Songs written to English-unwind.csv
pub const ENGLISH_UNWIND_SONGS: [&str; 2] = ["Holocene", "Skinny Love"];

/// Songs written to Hindi-pop.csv
pub const HINDI_POP_SONGS: [&str; 3] = ["Kesariya", "Raataan Lambiyan", "Apna Bana Le"];

/// Songs written to Punjabi.csv
pub const PUNJABI_SONGS: [&str; 1] = ["Brown Munde"];

/// Rows written to happy.csv as (name, album, artist)
pub const HAPPY_SONGS: [(&str, &str, &str); 2] = [
    ("Walking on Sunshine", "Walking on Sunshine", "Katrina and the Waves"),
    ("Happy", "G I R L", "Pharrell Williams"),
];

/// Rows written to sad.csv as (name, album, artist)
pub const SAD_SONGS: [(&str, &str, &str); 2] = [
    ("Someone Like You", "21", "Adele"),
    ("Fix You", "X&Y", "Coldplay"),
];

// ============================================================================
// Test Responses
// ============================================================================

pub const GREETING_TRIGGER: &str = "hello";
pub const GREETING_REPLY: &str = "Hello from the test table!";

pub const WEATHER_TRIGGER: &str = "weather";
pub const WEATHER_REPLY: &str = "No idea, I only know music.";

// ============================================================================
// Timeouts and Delays
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Interval between server readiness checks (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;

/// Default timeout for HTTP requests in tests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
