//! `hashit` — generate multiple hash types from text input.
//!
//! A thin front end over the engine's two entry points
//! (`supported_algorithms` / `compute_digests`): argument parsing, stdin
//! fallback, and rendering. No algorithm logic lives here.

use std::fs;
use std::io::{self, IsTerminal as _, Read as _, Write as _};
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;
use engine::{DigestOrchestrator, Input, PresentationOptions};
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor as _};
use tracing_subscriber::EnvFilter;

mod render;

use render::OutputFormat;

#[derive(Parser)]
#[command(name = "hashit", version, about = "Generate multiple hash types from text input")]
struct Cli {
  /// Text to hash (if not provided, will read from stdin)
  text: Option<String>,

  /// Specific algorithm to use (default: all)
  #[arg(short, long)]
  algorithm: Option<String>,

  /// Output format
  #[arg(short, long, value_enum, default_value = "table")]
  format: OutputFormat,

  /// Output to file instead of console
  #[arg(short, long)]
  output: Option<PathBuf>,

  /// List all supported algorithms
  #[arg(short, long)]
  list: bool,

  /// Output hash in uppercase
  #[arg(short, long)]
  uppercase: bool,

  /// Suppress headers and formatting
  #[arg(short, long)]
  quiet: bool,

  /// Disable colored output
  #[arg(long)]
  no_color: bool,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(io::stderr)
    .init();

  run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
  let orchestrator = DigestOrchestrator::standard();
  let color = color_choice(&cli);

  if cli.list {
    let mut out = StandardStream::stdout(color);
    render::write_algorithm_list(&mut out, &orchestrator.supported_algorithms())?;
    return Ok(());
  }

  let text = match cli.text {
    Some(text) => text,
    None => read_from_stdin()?,
  };

  let options = PresentationOptions { uppercase: cli.uppercase };
  let results = orchestrator.compute_digests(Input::Text(&text), cli.algorithm.as_deref(), &options)?;

  match &cli.output {
    Some(path) => {
      let mut buf = NoColor::new(Vec::new());
      render::write_results(&mut buf, &results, cli.format, cli.quiet)?;
      if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("failed to create directory {}", parent.display()))?;
      }
      fs::write(path, buf.into_inner()).with_context(|| format!("failed to write to {}", path.display()))?;
      if !cli.quiet {
        let mut out = StandardStream::stdout(color);
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(out, "Results written to: {}", path.display())?;
        out.reset()?;
      }
    }
    None => {
      let mut out = StandardStream::stdout(color);
      render::write_results(&mut out, &results, cli.format, cli.quiet)?;
    }
  }

  Ok(())
}

fn color_choice(cli: &Cli) -> ColorChoice {
  if cli.no_color || !io::stdout().is_terminal() {
    ColorChoice::Never
  } else {
    ColorChoice::Auto
  }
}

fn read_from_stdin() -> Result<String> {
  if io::stdin().is_terminal() {
    eprintln!("Enter text to hash (press Ctrl+D when finished):");
  }
  tracing::debug!("reading input from stdin");
  let mut input = String::new();
  io::stdin()
    .read_to_string(&mut input)
    .context("failed to read from stdin")?;
  Ok(input.trim().to_string())
}
