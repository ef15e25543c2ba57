use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use lib_nwalign::{io::read_sequence_pair, positional_scorer::PositionalScorer};
use log::info;

#[derive(Parser)]
pub struct Cli {
    /// The file containing the two sequences to score, one per line.
    input: PathBuf,

    #[clap(long, default_value = "1")]
    match_score: i64,

    #[clap(long, default_value = "-2")]
    mismatch_score: i64,
}

pub fn cli(cli: Cli) -> Result<()> {
    info!("Loading sequence pair {:?}", cli.input);
    let (reference, query) = read_sequence_pair(&cli.input)?;

    let scorer = PositionalScorer {
        match_score: cli.match_score.into(),
        mismatch_score: cli.mismatch_score.into(),
    };
    println!("Score: {}", scorer.score(&reference, &query).as_i64());
    Ok(())
}
