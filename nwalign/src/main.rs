use clap::{Parser, Subcommand};
use log::LevelFilter;
use nwalign::{align, score, substring};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

#[derive(Parser)]
struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute all optimal global alignments of a sequence pair.
    Align(align::Cli),
    /// Score a sequence pair position by position.
    Score(score::Cli),
    /// Check whether either sequence of a pair contains the other.
    Substring(substring::Cli),
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            std::process::exit(if error.use_stderr() { 1 } else { 0 });
        }
    };

    TermLogger::init(
        cli.log_level,
        Default::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    let result = match cli.command {
        Command::Align(cli) => align::cli(cli),
        Command::Score(cli) => score::cli(cli),
        Command::Substring(cli) => substring::cli(cli),
    };

    if let Err(error) = result {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
