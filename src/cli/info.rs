use std::path::PathBuf;

use clap::Parser;
use g1::G1;

use super::{Cli, CliRes};

#[derive(Debug, Parser)]
#[command(name = "info", about = "Prints container header and descriptor info")]
struct InfoArgs {
    /// Path to the g1 container
    path: PathBuf,
    /// Descriptor index to dump
    #[arg(short, long)]
    index: Option<u32>,
}

pub struct Info;
impl Cli for Info {
    fn name(&self) -> &'static str {
        "info"
    }

    fn cli(&self) -> CliRes {
        let args = InfoArgs::parse_from(std::env::args().skip(1));

        let g1 = match G1::from_file(&args.path) {
            Ok(g1) => g1,
            Err(err) => {
                println!("{}", err);
                return CliRes::Err;
            }
        };

        println!("revision: {:?}", g1.header.revision);
        println!("entries: {}", g1.entry_count());
        if let Some(data_size) = g1.header.data_size {
            println!("declared data size: {}", data_size);
        }

        if let Some(index) = args.index {
            match g1.entry(index) {
                Ok(entry) => println!("{:#?}", entry),
                Err(err) => {
                    println!("{}", err);
                    return CliRes::Err;
                }
            }
        }

        CliRes::Ok
    }

    fn cli_help(&self) {
        println!(
            "\
Prints container header and descriptor info

<path to container> [--index <sprite index>]
"
        )
    }
}
