//! # hexdec
//!
//! Prints the decimal value of each hexadecimal numeral given, one per line. Numerals come from
//! the command line, a file, or stdin (in that order of preference). Set `RUST_LOG=trace` to watch
//! every digit operation.
extern crate clap;
extern crate hexdec;
extern crate itertools;
#[macro_use] extern crate log;
extern crate pretty_env_logger;

use std::io;
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use itertools::Itertools;

use hexdec::file::{convert_file, convert_reader};
use hexdec::{hex_to_decimal, Result};

/// Convert hexadecimal numerals of any length to decimal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Hexadecimal numerals to convert (digits 0-9, a-f, A-F, no prefix)
    numerals: Vec<String>,
    /// Read numerals from this file instead, one per line
    #[arg(short, long, conflicts_with = "numerals")]
    file: Option<PathBuf>,
}

fn run(args: Args) -> Result<Vec<String>> {
    if let Some(path) = args.file {
        return convert_file(path);
    }
    if args.numerals.is_empty() {
        info!("no numerals given, reading stdin");
        let stdin = io::stdin();
        return convert_reader(stdin.lock());
    }
    args.numerals.iter().map(|numeral| hex_to_decimal(numeral)).collect()
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();
    debug!("{:?}", args);

    match run(args) {
        Ok(decimals) => {
            if ! decimals.is_empty() {
                println!("{}", decimals.iter().join("\n"));
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            for cause in e.iter().skip(1) {
                eprintln!("caused by: {}", cause);
            }
            exit(1);
        }
    }
}
