use std::path::PathBuf;

use clap::Parser;
use g1::{RleVariant, G1};

use crate::modules::extract::extract_range;

use super::{Cli, CliRes};

#[derive(Debug, Parser)]
#[command(name = "extract", about = "Decodes a sprite range to individual .png files")]
struct ExtractArgs {
    /// Path to the g1 container
    path: PathBuf,
    /// Output directory for the decoded .png files
    output: PathBuf,
    /// First sprite index
    #[arg(short, long, default_value_t = 0)]
    start: u32,
    /// One past the last sprite index. Defaults to the whole container
    #[arg(short, long)]
    end: Option<u32>,
    /// Decode with the transparent-run RLE variant instead of the default
    #[arg(long)]
    transparent_bit: bool,
}

pub struct Extract;
impl Cli for Extract {
    fn name(&self) -> &'static str {
        "extract"
    }

    fn cli(&self) -> CliRes {
        let args = ExtractArgs::parse_from(std::env::args().skip(1));

        let end = match args.end {
            Some(end) => end,
            None => match G1::from_file(&args.path) {
                Ok(g1) => g1.entry_count(),
                Err(err) => {
                    println!("{}", err);
                    return CliRes::Err;
                }
            },
        };

        let variant = if args.transparent_bit {
            RleVariant::TransparentBit
        } else {
            RleVariant::EndOfRowBit
        };

        match extract_range(&args.path, &args.output, args.start..end, variant) {
            Ok(summary) => {
                println!(
                    "Saved {} sprites to {} ({} skipped, {} failed)",
                    summary.saved,
                    args.output.display(),
                    summary.skipped,
                    summary.failed
                );
                CliRes::Ok
            }
            Err(err) => {
                println!("{}", err);
                CliRes::Err
            }
        }
    }

    fn cli_help(&self) {
        println!(
            "\
Decodes a sprite range to individual .png files

<path to container> <output dir> [--start <index>] [--end <index>] [--transparent-bit]
"
        )
    }
}
