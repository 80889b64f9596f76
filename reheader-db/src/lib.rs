//! Mesen game database loader.
//!
//! Reads the `MesenDB.txt` reference file — one 18-field CSV line per known
//! ROM dump, `#` lines as comments — into an immutable CRC32-keyed map.
//! The map is built once at startup and handed to the patcher by reference;
//! nothing mutates it afterwards.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use reheader_core::HeaderRecord;

pub mod error;

pub use error::DbError;

/// An immutable lookup table from ROM CRC32 to its header metadata.
///
/// Keys are the full 8-character hex CRC, normalized to uppercase; lookups
/// accept either case.
#[derive(Debug, Default)]
pub struct HeaderDb {
    records: HashMap<String, HeaderRecord>,
}

impl HeaderDb {
    /// Load the database from a file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DbError> {
        let file = File::open(path.as_ref())?;
        Self::parse(BufReader::new(file))
    }

    /// Parse database text from any buffered reader.
    ///
    /// Comment lines are skipped. Lines that don't split into exactly 18
    /// fields carry no usable record and are dropped silently; a non-numeric
    /// value in a typed field aborts the load with the offending line number.
    pub fn parse(reader: impl BufRead) -> Result<Self, DbError> {
        let mut records = HashMap::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.starts_with('#') {
                continue;
            }

            let record = HeaderRecord::from_line(&line).map_err(|source| DbError::Record {
                line: idx + 1,
                source,
            })?;

            let Some(record) = record else {
                log::debug!("dropping malformed database line {}", idx + 1);
                continue;
            };

            // A record without a CRC can never be looked up
            if record.crc.is_empty() {
                log::debug!("dropping record with empty CRC on line {}", idx + 1);
                continue;
            }

            let key = record.crc.to_uppercase();
            if let Some(previous) = records.insert(key, record) {
                log::warn!(
                    "duplicate database entry for CRC {}, keeping the later one",
                    previous.crc
                );
            }
        }

        log::info!("loaded {} header records", records.len());
        Ok(Self { records })
    }

    /// Look up a record by CRC32 hex string, case-insensitively.
    pub fn get(&self, crc: &str) -> Option<&HeaderRecord> {
        self.records.get(&crc.to_uppercase())
    }

    /// Number of records in the database.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
