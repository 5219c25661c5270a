//! sheetcalc CLI - evaluate formulas and replay cell scripts

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use sheetcalc::prelude::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sheetcalc")]
#[command(author, version, about = "Spreadsheet formula evaluation tool")]
struct Cli {
    /// Log evaluation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single formula and print the result
    Eval {
        /// Formula to evaluate, e.g. "=SUM(A1:A3)"; text without `=` is printed as is
        formula: String,

        /// JSON file with the cells to evaluate against
        #[arg(short, long)]
        cells: Option<PathBuf>,

        /// Enter a cell before evaluating (repeatable), e.g. --set A1=5
        #[arg(short, long = "set", value_name = "ADDR=VALUE")]
        set: Vec<String>,
    },

    /// Submit cells from a script, one "ADDR INPUT" per line, and print the sheet
    Apply {
        /// Script file ("-" for stdin)
        script: PathBuf,

        /// Print the cells as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Eval {
            formula,
            cells,
            set,
        } => eval_formula(&formula, cells.as_deref(), &set),
        Commands::Apply { script, json } => apply_script(&script, json),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn eval_formula(formula: &str, cells: Option<&Path>, assignments: &[String]) -> Result<()> {
    let snapshot = match cells {
        Some(path) => load_cells(path)?,
        None => CellSnapshot::new(),
    };
    let mut sheet = Sheet::from_snapshot(snapshot, SheetOptions::default());

    for assignment in assignments {
        let (address, input) = assignment
            .split_once('=')
            .with_context(|| format!("Expected ADDR=VALUE, got '{}'", assignment))?;
        sheet
            .submit(address.trim(), input)
            .with_context(|| format!("Failed to set '{}'", address))?;
    }

    let result = display_for(formula, sheet.snapshot());
    debug!(formula, result = %result, "evaluated");
    writeln!(io::stdout(), "{}", result).context("Failed to write to stdout")?;
    Ok(())
}

/// What a cell holding `input` would show: formulas are evaluated, other text is literal
fn display_for(input: &str, cells: &CellSnapshot) -> String {
    if input.starts_with('=') {
        sheetcalc::evaluate(input, cells)
    } else {
        input.to_string()
    }
}

fn load_cells(path: &Path) -> Result<CellSnapshot> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    let cells: CellSnapshot = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse cells from '{}'", path.display()))?;
    info!(cells = cells.len(), path = %path.display(), "loaded cells");
    Ok(cells)
}

fn read_script(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        return io::read_to_string(io::stdin()).context("Failed to read stdin");
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read '{}'", path.display()))
}

/// Split a script line into address and input; `None` for blank lines and comments
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    match trimmed.split_once(char::is_whitespace) {
        Some((address, input)) => Some((address, input.trim_start())),
        None => Some((trimmed, "")),
    }
}

fn apply_script(path: &Path, json: bool) -> Result<()> {
    let script = read_script(path)?;
    let mut sheet = Sheet::new();

    for (index, line) in script.lines().enumerate() {
        let Some((address, input)) = parse_line(line) else {
            continue;
        };
        if let Err(err) = sheet.submit(address, input) {
            bail!("Line {}: {}", index + 1, err);
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        // Through a JSON value so keys come out sorted
        let value = serde_json::to_value(sheet.snapshot()).context("Failed to encode cells")?;
        let text = serde_json::to_string_pretty(&value).context("Failed to encode cells")?;
        writeln!(out, "{}", text).context("Failed to write to stdout")?;
    } else {
        for (addr, cell) in sheet.snapshot().iter_sorted() {
            writeln!(out, "{}\t{}", addr, cell.display_value)
                .context("Failed to write to stdout")?;
        }
    }

    eprintln!("Applied {} cells", sheet.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("A1 5"), Some(("A1", "5")));
        assert_eq!(parse_line("B2   =SUM(A1:A3)"), Some(("B2", "=SUM(A1:A3)")));
        assert_eq!(parse_line("C3 =TRIM( hi )\r"), Some(("C3", "=TRIM( hi )")));
        assert_eq!(parse_line("  D4"), Some(("D4", "")));
    }

    #[test]
    fn test_parse_line_skips() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("# comment"), None);
        assert_eq!(parse_line("  # indented comment"), None);
    }

    #[test]
    fn test_display_for() {
        let cells: CellSnapshot = [("A1", Cell::literal("2"))].into_iter().collect();
        assert_eq!(display_for("=A1*3", &cells), "6");
        assert_eq!(display_for("hello", &cells), "hello");
        assert_eq!(display_for("A1*3", &cells), "A1*3");
        assert_eq!(display_for("", &cells), "");
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "sheetcalc", "-v", "eval", "=A1+1", "--set", "A1=2", "--set", "A2==A1",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Eval { formula, set, cells } => {
                assert_eq!(formula, "=A1+1");
                assert_eq!(set, vec!["A1=2", "A2==A1"]);
                assert!(cells.is_none());
            }
            Commands::Apply { .. } => panic!("expected eval"),
        }
    }
}
