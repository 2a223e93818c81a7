use std::path::PathBuf;

use clap::Parser;
use g1::RleVariant;

use crate::modules::atlas::create_atlas;

use super::{Cli, CliRes};

#[derive(Debug, Parser)]
#[command(name = "atlas", about = "Composites a sprite range into a grid atlas")]
struct AtlasArgs {
    /// Path to the g1 container
    path: PathBuf,
    /// Output .png path. A .json metadata sidecar lands next to it
    output: PathBuf,
    /// First sprite index. Defaults to the grass slope run of the retail
    /// g1.dat
    #[arg(short, long, default_value_t = 3419)]
    start: u32,
    /// One past the last sprite index
    #[arg(short, long, default_value_t = 3438)]
    end: u32,
    /// Square cell size in pixels
    #[arg(long, default_value_t = 64)]
    cell_size: u32,
    /// Cells per atlas row
    #[arg(long, default_value_t = 10)]
    columns: u32,
    /// Decode with the transparent-run RLE variant instead of the default
    #[arg(long)]
    transparent_bit: bool,
}

pub struct Atlas;
impl Cli for Atlas {
    fn name(&self) -> &'static str {
        "atlas"
    }

    fn cli(&self) -> CliRes {
        let args = AtlasArgs::parse_from(std::env::args().skip(1));

        let variant = if args.transparent_bit {
            RleVariant::TransparentBit
        } else {
            RleVariant::EndOfRowBit
        };

        match create_atlas(
            &args.path,
            &args.output,
            args.start..args.end,
            args.cell_size,
            args.columns,
            variant,
        ) {
            Ok(metadata) => {
                println!(
                    "Atlas with {} sprites written to {}",
                    metadata.cells.len(),
                    args.output.display()
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
Composites a sprite range into a grid atlas with a .json metadata sidecar

<path to container> <output .png> [--start <index>] [--end <index>]
[--cell-size <pixels>] [--columns <n>] [--transparent-bit]
"
        )
    }
}
