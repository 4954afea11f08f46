//! Command-line front end: pick an algorithm, give it input, print the result.

mod logging;

use std::io::{self, Write};

use algovault::{Algorithm, dispatch};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "algovault",
    version,
    about = "Run classic search, difference and integer algorithms"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every algorithm with its identifier and an example input.
    List,
    /// Print the example input for one algorithm.
    Hint {
        /// Algorithm identifier (e.g. `gcd`) or menu name (e.g. "Binary Search").
        algorithm: Algorithm,
    },
    /// Run one algorithm on the given input.
    Run {
        /// Algorithm identifier (e.g. `gcd`) or menu name (e.g. "Binary Search").
        algorithm: Algorithm,
        /// Input text, e.g. "[1,2,3,4], 3" or "'1010', '110'".
        input: String,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut out = io::stdout().lock();
    match cli.command {
        Command::List => cmd_list(&mut out),
        Command::Hint { algorithm } => {
            writeln!(out, "{}", algorithm.hint()).context("write hint")
        }
        Command::Run { algorithm, input } => cmd_run(&mut out, algorithm, &input),
    }
}

fn cmd_list(out: &mut impl Write) -> Result<()> {
    for algorithm in Algorithm::ALL {
        writeln!(
            out,
            "{}\t{}\t{}",
            algorithm.slug(),
            algorithm.name(),
            algorithm.hint()
        )
        .context("write algorithm list")?;
    }
    Ok(())
}

fn cmd_run(out: &mut impl Write, algorithm: Algorithm, input: &str) -> Result<()> {
    debug!(%algorithm, input, "running from command line");
    let outcome = dispatch::run_text(algorithm, input)
        .with_context(|| format!("{algorithm} failed on input {input:?}"))?;
    writeln!(out, "Result: {outcome}").context("write result")
}
