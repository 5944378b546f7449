//! Command-line surface over `acrostic-core` and `acrostic-external`.

pub mod preferences;

use acrostic_external::{ExportFormat, PuzzleFile};
use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use preferences::Preferences;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "acrostic", version, about = "Validate and export Acrostic 3.0 puzzle files")]
pub struct Cli {
    /// Log at debug level (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a puzzle and print a summary.
    Check {
        file: PathBuf,
        /// Print the grid with each letter square replaced by its clue label.
        #[arg(long)]
        labels: bool,
    },
    /// Parse a puzzle and write it out as JSON, binary or a CSV clue sheet.
    Export {
        file: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },
    /// Print the effective preferences.
    Prefs {
        /// Write the effective preferences to the preferences file.
        #[arg(long)]
        save: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Binary,
    Csv,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Binary => ExportFormat::Binary,
            FormatArg::Csv => ExportFormat::Csv,
        }
    }
}

pub fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

pub fn run(cli: Cli) -> Result<()> {
    let prefs = preferences::load_preferences();

    match cli.command {
        Command::Check { file, labels } => check(&file, labels || prefs.show_labels),
        Command::Export {
            file,
            output,
            format,
        } => {
            let format = resolve_format(format, &output, &prefs);
            export(&file, &output, format)
        }
        Command::Prefs { save } => show_preferences(&prefs, save),
    }
}

fn load(file: &Path) -> Result<PuzzleFile> {
    PuzzleFile::load(file).wrap_err_with(|| format!("failed to load {}", file.display()))
}

fn check(file: &Path, show_labels: bool) -> Result<()> {
    let puzzle = load(file)?.puzzle;

    println!("Title: {}", puzzle.title);
    println!("Author: {}", puzzle.author);
    println!("Grid: {}x{}", puzzle.grid.width, puzzle.grid.height);
    println!("Letters: {}", puzzle.characters());
    println!("Clues: {}", puzzle.clues.len());

    if show_labels {
        println!();
        for row in puzzle.label_rows() {
            println!("{}", row);
        }
    }
    Ok(())
}

fn export(file: &Path, output: &Path, format: ExportFormat) -> Result<()> {
    let mut puzzle_file = load(file)?;
    puzzle_file
        .save(output, format)
        .wrap_err_with(|| format!("failed to write {}", output.display()))?;
    println!("Wrote {}", output.display());
    Ok(())
}

fn show_preferences(prefs: &Preferences, save: bool) -> Result<()> {
    match preferences::preferences_path() {
        Ok(path) => println!("Preferences file: {}", path.display()),
        Err(e) => println!("Preferences file: unavailable ({})", e),
    }
    println!("{}", serde_json::to_string_pretty(prefs)?);

    if save {
        preferences::save_preferences(prefs).wrap_err("failed to save preferences")?;
    }
    Ok(())
}

/// `--format` wins, then the output extension, then the preference.
fn resolve_format(explicit: Option<FormatArg>, output: &Path, prefs: &Preferences) -> ExportFormat {
    explicit
        .map(ExportFormat::from)
        .or_else(|| {
            output
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(ExportFormat::from_extension)
        })
        .unwrap_or(prefs.export_format)
}
