mod composer;
mod table;

pub use composer::{default_reply, default_reply_with, ResponseComposer, DEFAULT_REPLIES};
pub use table::{ResponseEntry, ResponseTable, ResponseTableError};
