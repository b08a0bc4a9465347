//! `scent`: command-line catalogue for a personal fragrance collection.
//!
//! # Usage
//!
//! ```text
//! scent add --name Aventus --house Creed --type edp --top "Pineapple, Bergamot" --fall 5
//! scent list --season fall --sort longevity --desc
//! scent export --fields name,house,notes -o collection.csv
//! scent --db ~/fragrances.db stats
//! ```

mod args;
mod commands;
mod settings;
mod table;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use args::{AddArgs, EditArgs, FilterArgs};
use clap::{Parser, Subcommand, ValueEnum};
use scent_core::{
  fragrance::FragranceId,
  stats::{DEFAULT_TOP_HOUSES, DEFAULT_TOP_NOTES, StatsOptions},
  theme::Theme,
};
use scent_store_sqlite::SqliteStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "scent", version, about = "Catalogue a personal fragrance collection")]
struct Cli {
  /// Path to the SQLite database (default: from config, then the data dir).
  #[arg(long, env = "SCENT_DB", value_name = "PATH", global = true)]
  db: Option<PathBuf>,

  /// Path to the TOML config file.
  #[arg(short, long, value_name = "FILE", global = true)]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Add a fragrance.
  Add(AddArgs),

  /// Change some attributes of a fragrance.
  Edit {
    id:      FragranceId,
    #[command(flatten)]
    changes: EditArgs,
  },

  /// Remove a fragrance.
  #[command(alias = "delete")]
  Rm { id: FragranceId },

  /// Print one fragrance in full.
  Show {
    id:   FragranceId,
    #[arg(long)]
    json: bool,
  },

  /// Search, filter and sort the collection.
  List(FilterArgs),

  /// Collection overview.
  Stats {
    #[arg(long)]
    json:       bool,
    #[arg(long, default_value_t = DEFAULT_TOP_HOUSES)]
    top_houses: usize,
    #[arg(long, default_value_t = DEFAULT_TOP_NOTES)]
    top_notes:  usize,
  },

  /// Write the (filtered, sorted) collection as CSV.
  Export {
    /// Comma-separated attributes, in column order.
    #[arg(long, value_delimiter = ',', required = true)]
    fields: Vec<String>,
    /// Write to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    #[command(flatten)]
    filter: FilterArgs,
  },

  /// Autocompletion candidates for houses or notes.
  Suggest {
    kind:     VocabKind,
    /// Case-insensitive fragment to match; omit to list everything.
    fragment: Option<String>,
  },

  /// Show or change the colour theme.
  Theme {
    #[command(subcommand)]
    action: Option<ThemeCommand>,
  },
}

#[derive(Subcommand, Debug, Default)]
enum ThemeCommand {
  /// Every theme, the active one marked.
  #[default]
  List,
  /// The active theme.
  Get,
  /// Persist a new theme in the config file.
  Set { name: Theme },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum VocabKind {
  Houses,
  Notes,
}

// ─── Entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let config_path = cli.config.or_else(settings::default_config_path);
  let cfg = settings::load(config_path.as_deref())?;

  // The flag (or SCENT_DB) beats the config file.
  let db_path = cli
    .db
    .as_deref()
    .map(settings::expand_tilde)
    .unwrap_or_else(|| cfg.db_path.clone());
  let open = || open_store(&db_path);

  match cli.command {
    Command::Add(args) => commands::add(&mut open()?, args),
    Command::Edit { id, changes } => commands::edit(&mut open()?, id, changes),
    Command::Rm { id } => commands::remove(&mut open()?, id),
    Command::Show { id, json } => commands::show(&open()?, id, json),
    Command::List(filter) => commands::list(&open()?, &filter, cfg.theme),
    Command::Stats { json, top_houses, top_notes } => {
      commands::stats(&open()?, StatsOptions { top_houses, top_notes }, json)
    }
    Command::Export { fields, output, filter } => {
      commands::export(&open()?, &fields, &filter, output.as_deref())
    }
    Command::Suggest { kind, fragment } => {
      commands::suggest(&open()?, kind, fragment.as_deref().unwrap_or_default())
    }
    Command::Theme { action } => {
      commands::theme(action.unwrap_or_default(), cfg.theme, config_path.as_deref())
    }
  }
}

fn open_store(path: &Path) -> anyhow::Result<SqliteStore> {
  commands::ensure_parent(path)?;
  SqliteStore::open(path).with_context(|| format!("failed to open store at {}", path.display()))
}
