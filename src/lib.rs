//! Extension helpers for primitive and enum-like types
//!
//! - [`flags`]: bit-flag algebra over integer-backed domains
//! - [`hierarchy`]: lazy walks over self-referential chains, error chains
//! - [`humanize`]: "3 minutes ago", "12MB"
//! - [`membership`], [`strings`], [`dates`], [`enums`]: thin conveniences
//!
//! Everything is pure and synchronous. [`config::Settings`] is the only
//! part that touches the filesystem or environment.

pub mod config;
pub mod dates;
pub mod enums;
pub mod errors;
pub mod flags;
pub mod hierarchy;
pub mod humanize;
pub mod membership;
pub mod strings;
pub mod util;

pub use config::Settings;
pub use dates::{age_on, between, DateTimeExt, NextWeekday};
pub use enums::{parse_enum, parse_enum_by_property, to_enum_type, to_enum_type_by_property, ToEnumType};
pub use errors::{ExtError, ExtResult, FillError, FlagConversionError, FlagOp};
pub use flags::{FlagDomain, FlagsExt};
pub use hierarchy::{collect_messages, walk, walk_some, ErrorChainExt, HierarchyExt, Walk};
pub use humanize::{relative_time, relative_time_to_now, to_file_size, ReadableTime, Rounding, ToFileSize};
pub use membership::{option_in, option_not_in, Membership};
pub use strings::{fill, NullOrEmpty, StrExt};
