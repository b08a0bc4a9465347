//! One function per subcommand. Each prints its result to stdout.

use std::{io, path::Path};

use anyhow::{Context as _, Result, bail};
use scent_core::{
  fragrance::FragranceId,
  query,
  render::{detail_text, overview_text},
  stats::{StatsOptions, summarize_with},
  store::FragranceStore,
  suggest::SuggestionIndex,
  theme::Theme,
};
use tracing::{debug, warn};

use crate::{
  ThemeCommand, VocabKind,
  args::{AddArgs, EditArgs, FilterArgs},
  settings, table,
};

// ─── Records ─────────────────────────────────────────────────────────────────

pub fn add<S: FragranceStore>(store: &mut S, args: AddArgs) -> Result<()> {
  let created = store
    .create(args.into_new())
    .context("failed to add fragrance")?;
  println!("added {}: {}", created.id, created.full_name());
  Ok(())
}

pub fn edit<S: FragranceStore>(store: &mut S, id: FragranceId, args: EditArgs) -> Result<()> {
  let patch = args.into_patch();
  if patch.is_empty() {
    warn!(%id, "no changes given");
  }
  let updated = store
    .update(id, patch)
    .with_context(|| format!("failed to update fragrance {id}"))?;
  println!("updated {}: {}", updated.id, updated.full_name());
  Ok(())
}

pub fn remove<S: FragranceStore>(store: &mut S, id: FragranceId) -> Result<()> {
  store
    .delete(id)
    .with_context(|| format!("failed to remove fragrance {id}"))?;
  println!("removed {id}");
  Ok(())
}

pub fn show<S: FragranceStore>(store: &S, id: FragranceId, json: bool) -> Result<()> {
  let f = store
    .get(id)
    .with_context(|| format!("failed to load fragrance {id}"))?;
  if json {
    println!("{}", serde_json::to_string_pretty(&f)?);
  } else {
    print!("{}", detail_text(&f));
  }
  Ok(())
}

// ─── Collection views ────────────────────────────────────────────────────────

pub fn list<S: FragranceStore>(store: &S, filter: &FilterArgs, theme: Theme) -> Result<()> {
  let records = store.list_all().context("failed to load fragrances")?;
  let visible = query::apply(&records, &filter.to_spec()?)?;

  if visible.is_empty() {
    println!("no fragrances match");
  } else {
    println!("{}", table::render(&visible, theme));
  }
  println!("{} of {} fragrances", visible.len(), records.len());
  Ok(())
}

pub fn stats<S: FragranceStore>(store: &S, options: StatsOptions, json: bool) -> Result<()> {
  let records = store.list_all().context("failed to load fragrances")?;
  let snapshot = summarize_with(&records, &options);
  if json {
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
  } else {
    print!("{}", overview_text(&snapshot));
  }
  Ok(())
}

pub fn export<S: FragranceStore>(
  store: &S,
  fields: &[String],
  filter: &FilterArgs,
  output: Option<&Path>,
) -> Result<()> {
  let records = store.list_all().context("failed to load fragrances")?;
  let visible = query::apply(&records, &filter.to_spec()?)?;

  match output {
    Some(path) => {
      // Rendered in full first so a bad field list leaves the target untouched.
      let text = scent_csv::format(&visible, fields)?;
      std::fs::write(path, text)
        .with_context(|| format!("writing export file {}", path.display()))?;
      println!("exported {} fragrances to {}", visible.len(), path.display());
    }
    None => scent_csv::write_to(io::stdout().lock(), &visible, fields)?,
  }
  Ok(())
}

pub fn suggest<S: FragranceStore>(store: &S, kind: VocabKind, fragment: &str) -> Result<()> {
  let records = store.list_all().context("failed to load fragrances")?;
  let index = SuggestionIndex::from_records(&records);
  let vocab = match kind {
    VocabKind::Houses => index.houses(),
    VocabKind::Notes => index.notes(),
  };
  for term in vocab.matching(fragment) {
    println!("{term}");
  }
  Ok(())
}

// ─── Preferences ─────────────────────────────────────────────────────────────

pub fn theme(action: ThemeCommand, current: Theme, config_file: Option<&Path>) -> Result<()> {
  match action {
    ThemeCommand::List => {
      for theme in Theme::all() {
        let marker = if theme == current { "*" } else { " " };
        println!("{marker} {:<20} {}", theme.to_string(), theme.display_name());
      }
    }
    ThemeCommand::Get => println!("{current}"),
    ThemeCommand::Set { name } => {
      let Some(path) = config_file else {
        bail!("no config file location is known; pass --config FILE");
      };
      settings::save_theme(path, name)?;
      debug!(from = %current, to = %name, "theme changed");
      println!("{name}");
    }
  }
  Ok(())
}

/// Create the parent directory of `path` if needed.
pub fn ensure_parent(path: &Path) -> Result<()> {
  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
  {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("creating directory {}", parent.display()))?;
  }
  Ok(())
}
