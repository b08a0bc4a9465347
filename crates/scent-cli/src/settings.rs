//! Preferences: where the database lives and which theme is active.
//!
//! Layered lowest to highest: built-in defaults, the TOML config file, then
//! `SCENT_*` environment variables (`SCENT_DB_PATH`, `SCENT_THEME`). The
//! `--db` flag overrides all of them.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use directories::ProjectDirs;
use scent_core::theme::Theme;
use serde::Deserialize;

const APP_NAME: &str = "scent";
const CONFIG_FILE: &str = "config.toml";
const DB_FILE: &str = "fragrances.db";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
  pub db_path: PathBuf,
  #[serde(default)]
  pub theme:   Theme,
}

fn project_dirs() -> Option<ProjectDirs> { ProjectDirs::from("", "", APP_NAME) }

/// `<config dir>/scent/config.toml`, if a home directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
  project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// `<data dir>/scent/fragrances.db`, or the working directory as a last
/// resort.
pub fn default_db_path() -> PathBuf {
  project_dirs()
    .map(|dirs| dirs.data_dir().join(DB_FILE))
    .unwrap_or_else(|| PathBuf::from(DB_FILE))
}

/// Read the layered configuration. A missing file is not an error.
pub fn load(config_file: Option<&Path>) -> anyhow::Result<AppConfig> {
  let mut builder = config::Config::builder()
    .set_default("db_path", default_db_path().to_string_lossy().into_owned())?
    .set_default("theme", Theme::default().to_string())?;

  if let Some(path) = config_file {
    builder = builder.add_source(
      config::File::from(path)
        .format(config::FileFormat::Toml)
        .required(false),
    );
  }

  let settings = builder
    .add_source(config::Environment::with_prefix("SCENT"))
    .build()
    .context("failed to read configuration")?;

  let mut cfg: AppConfig = settings
    .try_deserialize()
    .context("failed to deserialise configuration")?;
  cfg.db_path = expand_tilde(&cfg.db_path);
  Ok(cfg)
}

/// Persist `theme` into the config file, keeping any other keys it holds.
pub fn save_theme(config_file: &Path, theme: Theme) -> anyhow::Result<()> {
  let mut table = match std::fs::read_to_string(config_file) {
    Ok(raw) => raw
      .parse::<toml::Table>()
      .with_context(|| format!("parsing config file {}", config_file.display()))?,
    Err(e) if e.kind() == std::io::ErrorKind::NotFound => toml::Table::new(),
    Err(e) => {
      return Err(e).with_context(|| format!("reading config file {}", config_file.display()));
    }
  };
  table.insert("theme".to_owned(), toml::Value::String(theme.to_string()));

  if let Some(parent) = config_file.parent()
    && !parent.as_os_str().is_empty()
  {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("creating config directory {}", parent.display()))?;
  }
  let raw = toml::to_string_pretty(&table).context("serialising config file")?;
  std::fs::write(config_file, raw)
    .with_context(|| format!("writing config file {}", config_file.display()))?;
  tracing::debug!(path = %config_file.display(), %theme, "saved theme");
  Ok(())
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Some(dirs) = directories::BaseDirs::new()
  {
    return dirs.home_dir().join(rest);
  }
  path.to_path_buf()
}
