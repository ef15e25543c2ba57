use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use lib_nwalign::{io::read_sequence_pair, substring::is_substring};
use log::info;

#[derive(Parser)]
pub struct Cli {
    /// The file containing the two sequences to compare, one per line.
    input: PathBuf,
}

pub fn cli(cli: Cli) -> Result<()> {
    info!("Loading sequence pair {:?}", cli.input);
    let (first, second) = read_sequence_pair(&cli.input)?;

    if is_substring(&first, &second) {
        println!("String 2 is a substring of String 1.");
    } else if is_substring(&second, &first) {
        println!("String 1 is a substring of String 2.");
    } else {
        println!("Neither string is a substring of the other.");
    }
    Ok(())
}
