//! Command-line front end: read an S-expression file and render it
//!
//! Usage: treeify [--target sexpr|html|js|json] [--config FILE] <FILE>

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;
use treeify::{backend, parse, Config, Target};

#[derive(Parser)]
#[command(name = "treeify")]
#[command(about = "Parse S-expressions and render them as S-expressions, HTML or JavaScript")]
struct Args {
    /// Path to the source file
    file: PathBuf,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    target: Option<Target>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log pipeline stages to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<String> {
    let config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config '{}'", path.display()))?;
            Config::from_json(&text)
                .with_context(|| format!("invalid config '{}'", path.display()))?
        }
        None => Config::default(),
    }
    .with_target(args.target);

    let contents = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read '{}'", args.file.display()))?;
    let source = config.source_for_target(&contents);

    tracing::info!(file = %args.file.display(), format = %config.target, "rendering file");

    let forms = parse(source).with_context(|| format!("failed to parse '{}'", args.file.display()))?;
    let output = backend::render(&forms, &config)
        .with_context(|| format!("failed to render '{}'", args.file.display()))?;
    Ok(output)
}
