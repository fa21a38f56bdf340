//! Persisted most-recently-used list of analyzed brand names.
//!
//! A single JSON array on disk, loaded once at startup and flushed after
//! every mutation. A missing or unparsable file is treated as an empty
//! history, never as an error the caller has to handle.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Upper bound on retained entries
pub const MAX_ENTRIES: usize = 5;

const HISTORY_FILE: &str = "search_history.json";

/// Bounded, deduplicated brand-query history, newest first
pub struct SearchHistoryStore {
  history_file: PathBuf,
  entries: Vec<String>,
}

impl SearchHistoryStore {
  /// Open the store under `$ECHOSPHERE_DIR` (or `~/.echosphere`), creating
  /// the directory if needed and loading any persisted history
  pub fn open() -> Result<Self> {
    let base_path = if let Ok(dir) = std::env::var("ECHOSPHERE_DIR") {
      PathBuf::from(dir)
    } else {
      dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".echosphere")
    };

    Self::open_at(&base_path)
  }

  /// Open the store rooted at an explicit directory
  pub fn open_at(base_path: &Path) -> Result<Self> {
    fs::create_dir_all(base_path)?;
    let history_file = base_path.join(HISTORY_FILE);
    let entries = load_entries(&history_file);
    Ok(Self { history_file, entries })
  }

  /// Current history, most recent first
  pub fn entries(&self) -> &[String] {
    &self.entries
  }

  /// Record a brand query. Whitespace-only input is a no-op; an existing
  /// entry moves to the front instead of duplicating. Persists synchronously
  /// after every accepted record.
  pub fn record(&mut self, brand: &str) -> Result<&[String]> {
    let brand = brand.trim();
    if brand.is_empty() {
      return Ok(&self.entries);
    }

    self.entries.retain(|entry| entry != brand);
    self.entries.insert(0, brand.to_string());
    self.entries.truncate(MAX_ENTRIES);

    let json = serde_json::to_string_pretty(&self.entries)?;
    fs::write(&self.history_file, json)?;

    Ok(&self.entries)
  }
}

fn load_entries(history_file: &Path) -> Vec<String> {
  if !history_file.exists() {
    return Vec::new();
  }

  match fs::read_to_string(history_file) {
    Ok(json) => match serde_json::from_str::<Vec<String>>(&json) {
      Ok(entries) => entries,
      Err(err) => {
        tracing::warn!("discarding malformed search history: {err}");
        Vec::new()
      }
    },
    Err(err) => {
      tracing::warn!("could not read search history: {err}");
      Vec::new()
    }
  }
}
