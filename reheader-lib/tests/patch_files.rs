//! End-to-end patching against a real temporary database and ROM files.

use std::fs;
use std::path::Path;

use reheader_db::HeaderDb;
use reheader_lib::{PatchOptions, PatchOutcome, add_header, output_path};

/// CRC32 of `data` in the database's uppercase hex convention.
fn crc_of(data: &[u8]) -> String {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(data);
    format!("{:08X}", hasher.finalize())
}

/// Build a single-record database line for a 16K PRG / 8K CHR NROM cart
/// with horizontal mirroring and no battery.
fn nrom_line(crc: &str) -> String {
    format!("{crc},NesNtsc,NES-NROM-128,,,0,16,8,,,,0,h,,N,0,,")
}

fn db_for(data: &[u8]) -> HeaderDb {
    let text = format!("# test database\n{}\n", nrom_line(&crc_of(data)));
    HeaderDb::parse(text.as_bytes()).unwrap()
}

#[test]
fn known_rom_gets_headered_copy() {
    let dir = tempfile::tempdir().unwrap();
    let rom = dir.path().join("game.nes");
    let rom_bytes = vec![0xEAu8; 24 * 1024]; // NOP sled stand-in for PRG+CHR
    fs::write(&rom, &rom_bytes).unwrap();

    let db = db_for(&rom_bytes);
    let out = output_path(&rom);
    let outcome = add_header(&db, &rom, &out, PatchOptions::default()).unwrap();

    match outcome {
        PatchOutcome::Patched { ref output, .. } => assert_eq!(output, &out),
        other => panic!("expected a patch, got {other:?}"),
    }

    let written = fs::read(&out).unwrap();
    assert_eq!(written.len(), 16 + rom_bytes.len());
    // 16K PRG -> 1 unit, 8K CHR -> 1 unit, everything else zero
    assert_eq!(
        &written[..16],
        &[
            0x4e, 0x45, 0x53, 0x1a, 0x01, 0x01, 0x00, 0x00, //
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ]
    );
    // The original bytes follow, untouched
    assert_eq!(&written[16..], &rom_bytes[..]);
    // And the input file itself was not modified
    assert_eq!(fs::read(&rom).unwrap(), rom_bytes);
}

#[test]
fn lookup_is_case_insensitive_on_file_crc() {
    // The db stores uppercase CRCs while the hasher emits lowercase; a hit
    // must still happen.
    let dir = tempfile::tempdir().unwrap();
    let rom = dir.path().join("game.nes");
    let rom_bytes = b"123456789".to_vec();
    fs::write(&rom, &rom_bytes).unwrap();

    let crc = crc_of(&rom_bytes);
    assert_ne!(crc, crc.to_lowercase(), "test needs a CRC with hex letters");

    let db = db_for(&rom_bytes);
    let out = output_path(&rom);
    let outcome = add_header(&db, &rom, &out, PatchOptions::default()).unwrap();
    assert!(matches!(outcome, PatchOutcome::Patched { .. }));
}

#[test]
fn unknown_rom_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let rom = dir.path().join("unknown.nes");
    fs::write(&rom, b"not in the database").unwrap();

    let db = HeaderDb::parse(nrom_line("DEADBEEF").as_bytes()).unwrap();
    let out = output_path(&rom);
    let outcome = add_header(&db, &rom, &out, PatchOptions::default()).unwrap();

    assert!(matches!(outcome, PatchOutcome::NoRecord { .. }));
    assert!(!out.exists());
}

#[test]
fn nes2_option_sets_format_marker() {
    let dir = tempfile::tempdir().unwrap();
    let rom = dir.path().join("game.nes");
    let rom_bytes = vec![0x00u8; 1024];
    fs::write(&rom, &rom_bytes).unwrap();

    let db = db_for(&rom_bytes);
    let out = output_path(&rom);
    add_header(&db, &rom, &out, PatchOptions { nes2: true }).unwrap();

    let written = fs::read(&out).unwrap();
    assert_eq!(written[7] & 0x08, 0x08);
}

#[test]
fn missing_input_file_is_an_error() {
    let db = HeaderDb::parse(&b""[..]).unwrap();
    let missing = Path::new("/nonexistent/game.nes");
    let result = add_header(&db, missing, &output_path(missing), PatchOptions::default());
    assert!(result.is_err());
}
