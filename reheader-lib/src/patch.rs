//! Per-file lookup and header prepending.

use std::fs;
use std::path::{Path, PathBuf};

use reheader_core::generate_header;
use reheader_db::HeaderDb;

use crate::error::PatchError;
use crate::hasher::crc32_of_file;

/// Suffix appended to the input path to form the output path.
pub const OUTPUT_SUFFIX: &str = "-headered";

/// Options for a patch run.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatchOptions {
    /// Emit NES 2.0 headers instead of iNES 1.0
    pub nes2: bool,
}

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// A record matched; the headered copy was written to this path.
    Patched { crc: String, output: PathBuf },
    /// The file's CRC is not in the database; nothing was written.
    NoRecord { crc: String },
}

/// Output path convention: the input path with [`OUTPUT_SUFFIX`] appended.
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}

/// Hash one file, look it up, and on a hit write `header ++ input bytes`
/// to `outfile`. On a miss nothing is written. The header is synthesized
/// in full before any byte reaches disk.
pub fn add_header(
    db: &HeaderDb,
    infile: &Path,
    outfile: &Path,
    options: PatchOptions,
) -> Result<PatchOutcome, PatchError> {
    let crc = crc32_of_file(infile)?;

    let Some(record) = db.get(&crc) else {
        return Ok(PatchOutcome::NoRecord { crc });
    };

    log::info!(
        "{crc}: {} on {}, mapper {}, {} mirroring",
        record.board,
        record.console,
        record.mapper,
        record.mirroring,
    );

    let header = generate_header(record, options.nes2)?;

    // ROM images are small (KB to low MB), so buffering the whole body is fine
    let body = fs::read(infile)?;
    let mut out = Vec::with_capacity(header.len() + body.len());
    out.extend_from_slice(&header);
    out.extend_from_slice(&body);
    fs::write(outfile, &out)?;

    Ok(PatchOutcome::Patched {
        crc,
        output: outfile.to_path_buf(),
    })
}
