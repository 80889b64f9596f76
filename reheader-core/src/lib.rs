//! Core types for NES ROM header restoration.
//!
//! A [`HeaderRecord`] holds the cartridge metadata for one known ROM dump
//! (keyed by CRC32), parsed from a line of the Mesen game database. The
//! [`ines`] module turns a record into the 16-byte iNES header that emulators
//! expect at the front of a `.nes` file.

pub mod console;
pub mod error;
pub mod ines;
pub mod record;

pub use console::{GameConsole, Mirroring};
pub use error::{HeaderError, RecordError};
pub use ines::{HEADER_LEN, INES_SIGNATURE, generate_header};
pub use record::HeaderRecord;
