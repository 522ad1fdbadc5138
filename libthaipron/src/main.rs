use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use libthaipron::{OutputFormat, Parser, ParserConfig};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Print the pronunciation of Thai words.
#[derive(ClapParser, Debug)]
#[command(name = "thaipron", version)]
struct Args {
    /// Parse each input as one span, letting syllables cross word boundaries.
    #[arg(long)]
    no_word_break: bool,

    /// Exception dictionary (`.dic` text or `.bin` snapshot).
    #[arg(long)]
    dict: Option<PathBuf>,

    /// Word list for segmentation (`.fst` or text).
    #[arg(long)]
    words: Option<PathBuf>,

    /// TOML configuration; flags override it.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Delim)]
    format: OutputFormat,

    /// Words to parse; lines of stdin when none are given.
    words_in: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("thaipron: {e:#}");
            std::process::exit(1);
        }
    }
}

/// Returns whether every input parsed.
fn run() -> Result<bool> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ParserConfig::load_toml(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => ParserConfig::default(),
    };
    if args.no_word_break {
        config.word_break = false;
    }
    if args.dict.is_some() {
        config.exception_dict = args.dict.clone();
    }
    if args.words.is_some() {
        config.word_list = args.words.clone();
    }

    let parser = Parser::with_config(config).context("loading parser resources")?;
    let renderer = args.format.renderer();

    let inputs: Vec<String> = if args.words_in.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("reading stdin")?
            .into_iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect()
    } else {
        args.words_in
    };

    let mut ok = true;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (word, result) in inputs.iter().zip(parser.parse_batch(&inputs)) {
        match result {
            Ok(graph) => writeln!(out, "{}", renderer.render(&graph))?,
            Err(e) => {
                eprintln!("{word}: {e}");
                ok = false;
            }
        }
    }
    Ok(ok)
}
