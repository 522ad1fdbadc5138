// thaipron/tools/src/main.rs
//
// Offline compilers for parser resources:
// - wordlist: plain text word list -> fst set
// - except: exception dictionary text -> bincode snapshot

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use tracing::info;

use libthaipron::ExceptionDict;
use thaipron_core::wordlist::WordList;

#[derive(Parser)]
#[command(name = "thaipron-tools", version)]
struct Args {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a word list (one word per line) into an fst set.
    Wordlist {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = "words.fst")]
        out: PathBuf,
    },
    /// Check an exception dictionary and write its bincode snapshot.
    Except {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = "except.bin")]
        out: PathBuf,
        /// Fail on the first malformed line instead of skipping it.
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match Args::parse().cmd {
        Command::Wordlist { input, out } => {
            let file = File::open(&input).with_context(|| format!("opening {}", input.display()))?;
            let lines = BufReader::new(file)
                .lines()
                .collect::<std::io::Result<Vec<String>>>()
                .with_context(|| format!("reading {}", input.display()))?;
            let n = WordList::compile(lines, &out)?;
            info!("wrote {} words to {}", n, out.display());
        }
        Command::Except { input, out, strict } => {
            let dict = ExceptionDict::load(&input, !strict)?;
            if dict.is_empty() {
                bail!("{} has no usable entries", input.display());
            }
            dict.save_bincode(&out)?;
            info!("wrote {} entries to {}", dict.len(), out.display());
        }
    }
    Ok(())
}
