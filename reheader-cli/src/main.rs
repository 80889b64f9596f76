//! reheader CLI
//!
//! Restores iNES headers on raw NES ROM dumps: each input file is CRC32-
//! hashed, looked up in the Mesen game database, and on a match rewritten
//! as `<input>-headered` with the synthesized 16-byte header in front.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reheader_db::HeaderDb;
use reheader_lib::{PatchOptions, PatchOutcome, add_header, collect_files, output_path};

#[derive(Parser)]
#[command(name = "reheader")]
#[command(about = "Restore iNES headers on raw NES ROM dumps", long_about = None)]
struct Cli {
    /// ROM files or directories to process
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Path to the Mesen game database file
    #[arg(long, default_value = "MesenDB.txt")]
    db: PathBuf,

    /// Write NES 2.0 headers instead of iNES 1.0
    #[arg(long)]
    nes2: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let db = match HeaderDb::load(&cli.db) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Could not load header database {}: {e}", cli.db.display());
            return ExitCode::FAILURE;
        }
    };

    let options = PatchOptions { nes2: cli.nes2 };

    for path in &cli.paths {
        if path.is_file() {
            patch_one(&db, path, options);
        } else if path.is_dir() {
            match collect_files(path) {
                Ok(files) => {
                    for file in &files {
                        patch_one(&db, file, options);
                    }
                }
                Err(e) => {
                    eprintln!("Could not scan {}: {e}", path.display());
                }
            }
        } else {
            println!("{} is not a file or directory", path.display());
        }
    }

    ExitCode::SUCCESS
}

/// Patch a single file and report the outcome. Failures are reported and
/// swallowed so the rest of the batch keeps going.
fn patch_one(db: &HeaderDb, file: &Path, options: PatchOptions) {
    println!("Processing {}", file.display());

    let out = output_path(file);
    match add_header(db, file, &out, options) {
        Ok(PatchOutcome::Patched { crc, output }) => {
            println!(
                "{} Found header for {crc}. Wrote new file to {}.",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                output.display(),
            );
        }
        Ok(PatchOutcome::NoRecord { crc }) => {
            println!(
                "{} Could not find a header for {} ({crc})",
                "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                file.display(),
            );
        }
        Err(e) => {
            eprintln!(
                "{} Skipping {}: {e}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                file.display(),
            );
        }
    }
}
