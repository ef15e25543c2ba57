use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use lib_nwalign::{
    alignment_configuration::AlignmentConfiguration,
    global_aligner::global_align,
    io::{read_sequence_pair, write_alignment_report},
};
use log::{error, info};

#[derive(Parser)]
pub struct Cli {
    /// The file containing the two sequences to align, one per line.
    input: PathBuf,

    /// The file to store the alignment report in.
    #[clap(long, short = 'o', default_value = "alignment.txt")]
    output: PathBuf,

    /// A toml file with the scoring weights.
    ///
    /// It must contain the keys `match_score`, `mismatch_score` and `gap_score`, and overrides the weight options below.
    #[clap(long, short = 's')]
    scoring: Option<PathBuf>,

    #[clap(long, default_value = "1")]
    match_score: i64,

    #[clap(long, default_value = "-1")]
    mismatch_score: i64,

    #[clap(long, default_value = "-2")]
    gap_score: i64,
}

#[derive(serde::Deserialize)]
struct ScoringConfig {
    match_score: i64,
    mismatch_score: i64,
    gap_score: i64,
}

pub fn cli(cli: Cli) -> Result<()> {
    let configuration = load_configuration(&cli)?;

    info!("Loading sequence pair {:?}", cli.input);
    let (reference, query) = read_sequence_pair(&cli.input)?;

    let result = global_align(&reference, &query, configuration);
    info!(
        "Found {} optimal alignments with score {}",
        result.alignments.len(),
        result.score.as_i64()
    );

    // A failure to persist the report does not fail the run.
    if let Err(write_error) = write_alignment_report(&cli.output, &result) {
        error!("{write_error}");
    }

    println!("Completed alignment. Results in {:?}", cli.output);
    Ok(())
}

fn load_configuration(cli: &Cli) -> Result<AlignmentConfiguration> {
    Ok(if let Some(path) = &cli.scoring {
        info!("Loading scoring configuration {path:?}");
        let scoring = fs::read_to_string(path)
            .with_context(|| format!("Unable to read scoring configuration {path:?}"))?;
        let scoring: ScoringConfig = toml::from_str(&scoring)
            .with_context(|| format!("Unable to parse scoring configuration {path:?}"))?;

        AlignmentConfiguration {
            match_score: scoring.match_score.into(),
            mismatch_score: scoring.mismatch_score.into(),
            gap_score: scoring.gap_score.into(),
        }
    } else {
        AlignmentConfiguration {
            match_score: cli.match_score.into(),
            mismatch_score: cli.mismatch_score.into(),
            gap_score: cli.gap_score.into(),
        }
    })
}
