//! HAR (HTTP Archive) 1.2 document model and flow formatting.
//!
//! Turns completed flows into HAR entries: timings, request and response
//! summaries, and cookie records.

pub mod cookie;
mod entry;
mod model;
mod name_value;
pub mod time;

pub use entry::{build_entry, timings, EntryOptions};
pub use model::{
    Cache, Content, Cookie, Creator, Entry, Har, Log, NameValue, NameValues, Request, Response,
    Timings, HAR_VERSION,
};
pub use name_value::name_value;

impl Har {
    /// Empty document with the given creator.
    pub fn new(creator: Creator) -> Self {
        Har {
            log: Log {
                version: HAR_VERSION.to_string(),
                creator,
                entries: Vec::new(),
            },
        }
    }
}
