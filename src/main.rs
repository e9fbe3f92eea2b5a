use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use dini::{File, ParseOptions};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Parse one or more configuration files, merge them in order and print the result.
#[derive(Debug, Parser)]
#[command(name = "dini", version)]
struct Cli {
    /// Configuration files, merged in the order given
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Keep wrapping quotes around values
    #[arg(long)]
    keep_quotes: bool,

    /// More log output (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = ParseOptions::new().remove_quotes(!cli.keep_quotes);
    let files = cli
        .files
        .iter()
        .map(|path| load(path, options))
        .collect::<Result<Vec<_>>>()?;

    print(&File::merge(&files));

    Ok(())
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dini=warn")),
        1 => EnvFilter::new("dini=debug"),
        _ => EnvFilter::new("dini=trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(path: &Path, options: ParseOptions) -> Result<File> {
    debug!(path = %path.display(), "loading configuration");

    let reader = fs::File::open(path)
        .with_context(|| format!("cannot open configuration file {}", path.display()))?;

    File::from_reader_with(reader, options)
        .with_context(|| format!("failed to load configuration from {}", path.display()))
}

fn print(file: &File) {
    for section in file.sections() {
        if !section.is_root() {
            if section.value().is_empty() {
                println!("[{}]", section.name());
            } else {
                println!("[{} = {}]", section.name(), section.value());
            }
        }

        for property in section.properties() {
            println!("{} = \"{}\"", property.name(), property.value());
        }

        println!();
    }
}
