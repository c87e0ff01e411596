//! Result rendering: table (default), JSON, and plain text.
//!
//! All writers take a [`WriteColor`] sink, so the same code path serves the
//! colored terminal, `--no-color`, and file output (via
//! [`termcolor::NoColor`]).

use std::io::{self, Write as _};

use engine::{DigestOutcome, ResultSet};
use termcolor::{Color, ColorSpec, WriteColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
  Table,
  Json,
  Plain,
}

/// Render a result set in the requested format.
pub fn write_results<W: WriteColor>(out: &mut W, results: &ResultSet, format: OutputFormat, quiet: bool) -> io::Result<()> {
  match format {
    OutputFormat::Json => write_json(out, results),
    OutputFormat::Plain => write_plain(out, results),
    OutputFormat::Table => write_table(out, results, quiet),
  }
}

/// Render the supported-algorithm list.
pub fn write_algorithm_list<W: WriteColor>(out: &mut W, ids: &[String]) -> io::Result<()> {
  out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
  writeln!(out, "Supported Hash Algorithms:")?;
  out.reset()?;
  for id in ids {
    writeln!(out, "  - {id}")?;
  }
  Ok(())
}

fn write_json<W: WriteColor>(out: &mut W, results: &ResultSet) -> io::Result<()> {
  // serde_json maps iterate sorted by key, which is already the result
  // order; JSON output is never colorized.
  let mut object = serde_json::Map::new();
  for (id, outcome) in results {
    object.insert(id.clone(), serde_json::Value::String(outcome.to_string()));
  }
  let rendered = serde_json::to_string_pretty(&serde_json::Value::Object(object))?;
  writeln!(out, "{rendered}")
}

fn write_plain<W: WriteColor>(out: &mut W, results: &ResultSet) -> io::Result<()> {
  for (id, outcome) in results {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    write!(out, "{id:<12}")?;
    out.reset()?;
    write_outcome(out, outcome)?;
    writeln!(out)?;
  }
  Ok(())
}

fn write_table<W: WriteColor>(out: &mut W, results: &ResultSet, quiet: bool) -> io::Result<()> {
  const ID_HEADER: &str = "Algorithm";
  const VALUE_HEADER: &str = "Hash Value";

  let id_width = results
    .keys()
    .map(String::len)
    .chain([ID_HEADER.len()])
    .max()
    .unwrap_or(ID_HEADER.len());
  let value_width = results
    .values()
    .map(|outcome| outcome.to_string().len())
    .chain([VALUE_HEADER.len()])
    .max()
    .unwrap_or(VALUE_HEADER.len());

  if !quiet {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
    writeln!(out, "Hash Generation Results")?;
    out.reset()?;
  }

  let rule = |left: char, mid: char, right: char| {
    format!(
      "{left}{}{mid}{}{right}",
      "─".repeat(id_width + 2),
      "─".repeat(value_width + 2)
    )
  };

  writeln!(out, "{}", rule('┌', '┬', '┐'))?;
  write!(out, "│ ")?;
  out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
  write!(out, "{ID_HEADER:<id_width$}")?;
  out.reset()?;
  write!(out, " │ ")?;
  out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
  write!(out, "{VALUE_HEADER:<value_width$}")?;
  out.reset()?;
  writeln!(out, " │")?;
  writeln!(out, "{}", rule('├', '┼', '┤'))?;

  for (id, outcome) in results {
    write!(out, "│ {id:<id_width$} │ ")?;
    let rendered = outcome.to_string();
    write_outcome(out, outcome)?;
    write!(out, "{}", " ".repeat(value_width - rendered.len()))?;
    writeln!(out, " │")?;
  }

  writeln!(out, "{}", rule('└', '┴', '┘'))
}

fn write_outcome<W: WriteColor>(out: &mut W, outcome: &DigestOutcome) -> io::Result<()> {
  if outcome.is_failure() {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
    write!(out, "{outcome}")?;
    out.reset()
  } else {
    write!(out, "{outcome}")
  }
}
