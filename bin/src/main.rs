use std::{
    io::{stdin, stdout, Write},
    path::PathBuf,
};

use anyhow::{anyhow, bail};
use clap::Parser;
use itertools::Itertools;

/// Parses arithmetic expressions and prints their syntax trees.
#[derive(clap::Parser)]
struct Args {
    /// File with one expression per line. Starts a prompt when omitted.
    file: Option<PathBuf>,

    /// Print the scanned tokens before each tree.
    #[arg(long)]
    tokens: bool,

    /// Longest accepted expression, in chars.
    ///
    /// Parenthesis nesting is limited separately by the parser.
    #[arg(long, default_value_t = 65536)]
    max_len: usize,
}

fn run_file(path: PathBuf, args: &Args) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(&path)?;
    let mut out = stdout();

    let mut total = 0;
    let mut failed = 0;
    for line in source.lines().filter(|line| !line.trim().is_empty()) {
        total += 1;
        if let Err(e) = run(line, args, &mut out) {
            writeln!(out, "{e}")?;
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{failed} of {total} expressions in {} failed", path.display());
    }
    Ok(())
}

fn run_prompt(args: &Args) -> anyhow::Result<()> {
    let mut out = stdout();
    loop {
        print!("> ");
        out.flush()?;
        let mut line = String::new();
        if stdin().read_line(&mut line)? == 0 {
            return Ok(());
        }

        let line = line.trim_end_matches(&['\n', '\r'][..]);
        if line.trim().is_empty() {
            continue;
        }
        if let Err(e) = run(line, args, &mut out) {
            writeln!(out, "{e}")?;
        }
    }
}

fn run(source: &str, args: &Args, out: &mut impl Write) -> anyhow::Result<()> {
    let len = source.chars().count();
    if len > args.max_len {
        return Err(anyhow!("Expression is {len} chars long, the limit is {}", args.max_len));
    }

    let tokens = scanner::scan(source)?;
    log::debug!("Scanned {} tokens", tokens.len());
    if args.tokens {
        writeln!(out, "{}", tokens.iter().map(|t| format!("{} {t}", t.kind)).join("\n"))?;
    }

    let expr = parser::parse(&tokens)?;
    writeln!(out, "{expr}")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    match &args.file {
        Some(file) => run_file(file.clone(), &args),
        None => run_prompt(&args),
    }
}
