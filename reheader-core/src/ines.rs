//! iNES header synthesis.
//!
//! Builds the 16-byte preamble that emulators read to learn a cartridge's
//! memory layout. Supports the legacy iNES 1.0 layout and the NES 2.0
//! extension (mapper MSB and submapper in byte 8). NES 2.0 bytes 9-15
//! (PRG/CHR size MSBs, RAM shift counts) are not emitted; see
//! <https://wiki.nesdev.com/w/index.php/NES_2.0>.

use crate::console::{GameConsole, Mirroring};
use crate::error::HeaderError;
use crate::record::HeaderRecord;

/// Magic bytes at the start of every iNES file: "NES" + MS-DOS EOF.
pub const INES_SIGNATURE: [u8; 4] = [0x4e, 0x45, 0x53, 0x1a];

/// Header length in bytes (both iNES 1.0 and NES 2.0).
pub const HEADER_LEN: usize = 16;

/// Synthesize an iNES header from a database record.
///
/// `nes2` selects the NES 2.0 variant; iNES 1.0 is the default output
/// format. Unknown sizes carry the `-1` sentinel straight through the unit
/// division, so an unknown PRG size encodes as 0 units.
///
/// Flag bytes are composed by OR-ing independent bit masks onto a zero
/// byte; each field touches only its own bits.
pub fn generate_header(record: &HeaderRecord, nes2: bool) -> Result<[u8; HEADER_LEN], HeaderError> {
    if record.crc.is_empty() {
        return Err(HeaderError::UnresolvedRecord);
    }

    let mut header = [0u8; HEADER_LEN];
    header[..4].copy_from_slice(&INES_SIGNATURE);

    // PRG-ROM in 16 KB units
    header[4] = (record.prg_rom_size_kb / 16) as u8;

    // CHR-ROM in 8 KB units; cartridges with CHR-RAM report zero CHR-ROM
    header[5] = if record.chr_ram_size_kb > 0 {
        0
    } else {
        (record.chr_rom_size_kb / 8) as u8
    };

    // Flags 6: mirroring, battery, mapper low nibble
    let mut flags6 = 0u8;
    match record.mirroring {
        Mirroring::Vertical => flags6 |= 0x01,
        Mirroring::FourScreen => flags6 |= 0x08,
        // Horizontal and unknown both leave bit 0 clear
        _ => {}
    }
    if record.battery {
        flags6 |= 0x02;
    }
    flags6 |= ((record.mapper & 0x0F) as u8) << 4;
    header[6] = flags6;

    // Flags 7: console type, format marker, mapper high nibble
    let mut flags7 = 0u8;
    match record.console {
        GameConsole::VsSystem => flags7 |= 0x01,
        GameConsole::Playchoice => flags7 |= 0x02,
        _ => {}
    }
    if nes2 {
        flags7 |= 0x08;
    }
    flags7 |= (record.mapper & 0xF0) as u8;
    header[7] = flags7;

    if nes2 {
        // Byte 8: mapper bits 8-11 in the low nibble, submapper in the high
        header[8] = ((record.mapper & 0xF00) >> 8) as u8
            | (((record.sub_mapper & 0x0F) as u8) << 4);
    } else {
        // Byte 8: PRG-RAM in 8 KB units
        header[8] = (record.work_ram_size_kb / 8) as u8;

        // Byte 9: TV system, PRG-RAM presence, bus conflicts
        let mut flags9 = 0u8;
        if record.console.is_pal() {
            flags9 |= 0x01;
        }
        if record.work_ram_size_kb > 0 {
            flags9 |= 0x10;
        }
        if record.has_bus_conflicts() {
            flags9 |= 0x20;
        }
        header[9] = flags9;
    }

    // Bytes 10-15 stay zero (padding)
    Ok(header)
}
