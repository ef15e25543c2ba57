use std::{env, fs, path::PathBuf};

use clap::Parser;
use nwalign::{align, score, substring};

fn test_directory(name: &str) -> PathBuf {
    let directory = env::temp_dir().join(format!("nwalign-{name}-{}", std::process::id()));
    fs::create_dir_all(&directory).unwrap();
    directory
}

#[test]
fn align_writes_the_report() {
    let directory = test_directory("align-report");
    let input = directory.join("sequences.txt");
    let output = directory.join("alignment.txt");
    fs::write(&input, "GGAAG\nGAAA\n").unwrap();

    let cli = align::Cli::parse_from([
        "align",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);
    align::cli(cli).unwrap();

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.starts_with("Score: 0\n\nMatrix:\n0\t-2\t-4\t-6\t-8\t\n"));
    assert!(report.contains("Quantity of alignments generated: 3\n"));
    assert!(
        report
            .contains("Alignments generated:\nGGAAG\nGAAA-\n\nGGAAG\nG-AAA\n\nGGAAG\n-GAAA\n\n")
    );

    fs::remove_dir_all(&directory).unwrap();
}

#[test]
fn align_reads_the_scoring_configuration() {
    let directory = test_directory("align-scoring");
    let input = directory.join("sequences.txt");
    let output = directory.join("alignment.txt");
    let scoring = directory.join("scoring.toml");
    fs::write(&input, "GATTACA\nGATTACA\n").unwrap();
    fs::write(
        &scoring,
        "match_score = 2\nmismatch_score = -1\ngap_score = -2\n",
    )
    .unwrap();

    let cli = align::Cli::parse_from([
        "align",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
        "--scoring",
        scoring.to_str().unwrap(),
    ]);
    align::cli(cli).unwrap();

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.starts_with("Score: 14\n"));
    assert!(report.contains("Quantity of alignments generated: 1\n"));

    fs::remove_dir_all(&directory).unwrap();
}

#[test]
fn align_fails_without_input_file() {
    let directory = test_directory("align-missing-input");

    let cli = align::Cli::parse_from(["align", directory.join("absent.txt").to_str().unwrap()]);
    assert!(align::cli(cli).is_err());

    fs::remove_dir_all(&directory).unwrap();
}

#[test]
fn score_and_substring_read_the_same_input_format() {
    let directory = test_directory("score-substring");
    let input = directory.join("sequences.txt");
    fs::write(&input, "CGAGGGGTCGATAGACGTA\nGGTC\n").unwrap();

    let cli = score::Cli::parse_from(["score", input.to_str().unwrap()]);
    score::cli(cli).unwrap();

    let cli = substring::Cli::parse_from(["substring", input.to_str().unwrap()]);
    substring::cli(cli).unwrap();

    fs::remove_dir_all(&directory).unwrap();
}
