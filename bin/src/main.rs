use std::{
    io::{stdin, stdout, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;

/// Parses an arithmetic expression, evaluates it node by node and prints the
/// decorated tree together with the symbol table of intermediate values.
#[derive(clap::Parser)]
#[command(version)]
struct Args {
    /// Expression to translate. Starts an interactive prompt if neither this nor --file is given.
    expression: Option<String>,

    /// Translate every non-empty line of this file.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,
}

fn run(source: &str) -> Result<(), translator::Error> {
    let translation = translator::parse_and_evaluate(source)?;
    println!("{translation}");
    Ok(())
}

fn run_file(path: PathBuf) -> anyhow::Result<()> {
    let source =
        std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;

    let mut failed = 0;
    for line in source.lines().filter(|l| !l.trim().is_empty()) {
        println!("> {line}");
        if let Err(e) = run(line) {
            println!("Error: {e}");
            failed += 1;
        }
        println!();
    }

    if failed > 0 {
        anyhow::bail!("{failed} expression(s) failed");
    }
    Ok(())
}

fn run_prompt() -> anyhow::Result<()> {
    loop {
        print!("> ");
        stdout().flush()?;
        let mut line = String::new();
        if stdin().read_line(&mut line)? == 0 {
            log::debug!("End of input, leaving prompt");
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }
        if let Err(e) = run(&line) {
            println!("Error: {e}");
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    match (args.expression, args.file) {
        (Some(expression), _) => Ok(run(&expression)?),
        (None, Some(file)) => run_file(file),
        (None, None) => run_prompt(),
    }
}
