//! Namespace prefixes for batches of files loaded together.
//!
//! Files living under hive-style partition directories (`year=2021/month=03`)
//! get a prefix built from the partition values; everything else falls back to
//! a remembered choice or the file's base name.

pub mod commands;
pub mod console;
pub mod consts;
pub mod editor;
pub mod exceptions;
pub mod fs;
pub mod history;
pub mod merge;
pub mod models;
pub mod partition;
pub mod resolver;
pub mod utils;

pub use merge::merge;
pub use models::{BatchResolution, MergeOutcome, PrefixAssignment, PrefixHistory};
pub use partition::infer_partition_prefix;
pub use resolver::resolve;
