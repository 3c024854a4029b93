//! Utilities shared by the parking crates: timing and warning collection, logging setup, JSON
//! file IO, and a priority queue adapter.

#[macro_use]
extern crate log;

pub mod logger;
mod io;
mod priority_queue;
mod time;

pub use crate::io::{read_json, to_json, write_json};
pub use crate::priority_queue::PriorityQueueItem;
pub use crate::time::{elapsed_seconds, prettyprint_time, prettyprint_usize, Timer};
