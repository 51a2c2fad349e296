//! The narration stream: what happened at the table, line by line.
//!
//! Every narrated event is a [`Narration`]. The table prints it and keeps
//! it in a [`Chronicle`] that can be replayed or exported afterwards.

pub mod entry;
pub mod log;

pub use entry::{ChronicleEntry, Narration};
pub use log::Chronicle;
