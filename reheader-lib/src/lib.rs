//! Lookup-and-patch pipeline for restoring iNES headers.
//!
//! Ties the database ([`reheader_db::HeaderDb`]) to the header encoder
//! ([`reheader_core::ines`]): hash a file, find its record, prepend the
//! synthesized header. The CLI crate drives this per path and reports.

pub mod error;
pub mod hasher;
pub mod patch;
pub mod scanner;

pub use error::PatchError;
pub use patch::{OUTPUT_SUFFIX, PatchOptions, PatchOutcome, add_header, output_path};
pub use scanner::collect_files;
