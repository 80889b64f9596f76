//! Cartridge metadata records from the Mesen game database.
//!
//! Each non-comment database line describes one known ROM dump as 18
//! comma-separated fields, keyed by the CRC32 of the headerless image:
//!
//! ```text
//! CRC,Console,Board,PCB,Chip,Mapper,PrgRomKb,ChrRomKb,ChrRamKb,
//! WorkRamKb,SaveRamKb,Battery,Mirroring,Controller,BusConflicts,
//! SubMapper,VsType,PpuModel
//! ```

use crate::console::{GameConsole, Mirroring};
use crate::error::RecordError;

/// Number of comma-separated fields in a well-formed database line.
const FIELD_COUNT: usize = 18;

/// Metadata for one known ROM dump, parsed from a database line.
///
/// Integer fields use `-1` as the "unknown" sentinel, matching the empty
/// columns in the database text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRecord {
    /// CRC32 of the raw (headerless) ROM image, as stored in the database
    pub crc: String,
    pub console: GameConsole,
    pub board: String,
    pub pcb: String,
    pub chip: String,
    /// iNES mapper number, 0-4095
    pub mapper: i32,
    /// PRG-ROM size in KB, a multiple of 16 when known
    pub prg_rom_size_kb: i32,
    /// CHR-ROM size in KB, a multiple of 8 when known
    pub chr_rom_size_kb: i32,
    /// CHR-RAM size in KB; a positive value means CHR is RAM-backed
    pub chr_ram_size_kb: i32,
    pub work_ram_size_kb: i32,
    pub save_ram_size_kb: i32,
    /// Battery-backed save RAM present
    pub battery: bool,
    pub mirroring: Mirroring,
    pub controller_type: String,
    /// `"N"` or empty means no bus conflicts; anything else means conflicts
    pub bus_conflicts: String,
    pub sub_mapper: i32,
    pub vs_system_type: String,
    pub ppu_model: String,
}

/// Parse an integer database field. Empty or whitespace-only text is the
/// "unknown" sentinel `-1`; anything else must be a valid base-10 integer.
fn parse_int_field(field: &'static str, raw: &str) -> Result<i32, RecordError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(-1);
    }
    trimmed
        .parse::<i32>()
        .map_err(|_| RecordError::invalid_integer(field, raw))
}

impl HeaderRecord {
    /// Parse one database line into a record.
    ///
    /// Returns `Ok(None)` if the line does not split into exactly 18 fields
    /// (such lines carry no usable record and are dropped by the loader).
    /// A non-empty, non-numeric value in an integer field is an error: the
    /// database is trusted, so corruption there must surface, not default.
    pub fn from_line(line: &str) -> Result<Option<Self>, RecordError> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != FIELD_COUNT {
            return Ok(None);
        }

        Ok(Some(Self {
            crc: fields[0].to_string(),
            console: GameConsole::from_code(fields[1]),
            board: fields[2].to_string(),
            pcb: fields[3].to_string(),
            chip: fields[4].to_string(),
            mapper: parse_int_field("mapper", fields[5])?,
            prg_rom_size_kb: parse_int_field("prgRomSizeKb", fields[6])?,
            chr_rom_size_kb: parse_int_field("chrRomSizeKb", fields[7])?,
            chr_ram_size_kb: parse_int_field("chrRamSizeKb", fields[8])?,
            work_ram_size_kb: parse_int_field("workRamSizeKb", fields[9])?,
            save_ram_size_kb: parse_int_field("saveRamSizeKb", fields[10])?,
            battery: fields[11] == "1",
            mirroring: Mirroring::from_code(fields[12]),
            controller_type: fields[13].to_string(),
            bus_conflicts: fields[14].to_string(),
            sub_mapper: parse_int_field("subMapper", fields[15])?,
            vs_system_type: fields[16].to_string(),
            ppu_model: fields[17].to_string(),
        }))
    }

    /// True when the cartridge is flagged for bus conflicts.
    pub fn has_bus_conflicts(&self) -> bool {
        !self.bus_conflicts.is_empty() && self.bus_conflicts != "N"
    }
}
