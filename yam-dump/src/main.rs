use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use yam_lexer::{Lexer, LexerConfig, ReadSource, YamlError};
use yam_test_bench::write_tokens;

#[derive(Parser, Debug)]
#[command(name = "yam-dump", version, about)]
struct Args {
    /// YAML file to tokenize, standard input when omitted
    file: Option<PathBuf>,
    /// Read every token with this reference indent instead of tracking block structure
    #[arg(short, long)]
    reference: Option<u32>,
    /// Exit with an error if any diagnostic was reported
    #[arg(long)]
    strict: bool,
    /// Only treat `#` as a comment
    #[arg(long)]
    no_c_style: bool,
    /// More logging, repeat for more (`RUST_LOG` takes precedence)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let reader: Box<dyn Read> = match &args.file {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("cannot open {}", path.display()))?,
        ),
        None => Box::new(io::stdin()),
    };
    let config = LexerConfig::default().c_style_comments(!args.no_c_style);
    let mut lexer = Lexer::with_config(ReadSource::new(reader), config);

    let mut dump = String::new();
    write_tokens(&mut dump, &mut lexer, args.reference);
    debug!("{} diagnostic(s)", lexer.diagnostics().len());

    let mut out = io::stdout().lock();
    writeln!(out, "{}", dump.trim_start())?;

    match lexer.finish() {
        Ok(()) => Ok(()),
        Err(YamlError::Diagnostics(list)) if args.strict => {
            for diag in &list {
                eprintln!("error: {diag}");
            }
            bail!("{} problem(s) found", list.len())
        }
        Err(YamlError::Diagnostics(_)) => Ok(()),
        Err(err @ YamlError::Io(_)) => Err(err).context("input was cut short"),
    }
}
