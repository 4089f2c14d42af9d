//! Bucketed, English-only humanization of elapsed time and byte counts

pub mod size;
pub mod time;

pub use size::{to_file_size, to_file_size_with, Rounding, ToFileSize};
pub use time::{relative_time, relative_time_to_now, ReadableTime};
