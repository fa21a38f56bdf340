use anyhow::Result;
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

use echosphere::history::{SearchHistoryStore, MAX_ENTRIES};

fn setup_test_env() -> TempDir {
  let temp_dir = TempDir::new().unwrap();
  env::set_var("ECHOSPHERE_DIR", temp_dir.path());
  temp_dir
}

#[test]
fn record_prepends_most_recent() -> Result<()> {
  let temp_dir = TempDir::new()?;
  let mut store = SearchHistoryStore::open_at(temp_dir.path())?;

  store.record("Nike")?;
  store.record("Adidas")?;

  assert_eq!(store.entries(), &["Adidas".to_string(), "Nike".to_string()]);
  Ok(())
}

#[test]
fn duplicate_record_moves_to_front() -> Result<()> {
  let temp_dir = TempDir::new()?;
  let mut store = SearchHistoryStore::open_at(temp_dir.path())?;

  store.record("Nike")?;
  store.record("Adidas")?;
  store.record("Nike")?;

  assert_eq!(store.entries(), &["Nike".to_string(), "Adidas".to_string()]);
  Ok(())
}

#[test]
fn history_is_capped_and_deduplicated() -> Result<()> {
  let temp_dir = TempDir::new()?;
  let mut store = SearchHistoryStore::open_at(temp_dir.path())?;

  for brand in ["nike", "adidas", "nike", "puma", "reebok", "asics"] {
    store.record(brand)?;
  }

  assert_eq!(
    store.entries(),
    &[
      "asics".to_string(),
      "reebok".to_string(),
      "puma".to_string(),
      "nike".to_string(),
      "adidas".to_string(),
    ]
  );
  assert!(store.entries().len() <= MAX_ENTRIES);
  Ok(())
}

#[test]
fn blank_input_is_a_no_op() -> Result<()> {
  let temp_dir = TempDir::new()?;
  let mut store = SearchHistoryStore::open_at(temp_dir.path())?;

  store.record("Nike")?;
  store.record("")?;
  store.record("   ")?;

  assert_eq!(store.entries(), &["Nike".to_string()]);
  Ok(())
}

#[test]
fn input_is_trimmed_before_dedup() -> Result<()> {
  let temp_dir = TempDir::new()?;
  let mut store = SearchHistoryStore::open_at(temp_dir.path())?;

  store.record("Nike")?;
  store.record("  Nike  ")?;

  assert_eq!(store.entries(), &["Nike".to_string()]);
  Ok(())
}

#[test]
fn history_round_trips_through_disk() -> Result<()> {
  let temp_dir = TempDir::new()?;

  {
    let mut store = SearchHistoryStore::open_at(temp_dir.path())?;
    store.record("Nike")?;
    store.record("Adidas")?;
  }

  let reloaded = SearchHistoryStore::open_at(temp_dir.path())?;
  assert_eq!(reloaded.entries(), &["Adidas".to_string(), "Nike".to_string()]);
  Ok(())
}

#[test]
fn missing_file_loads_as_empty() -> Result<()> {
  let temp_dir = TempDir::new()?;
  let store = SearchHistoryStore::open_at(temp_dir.path())?;
  assert!(store.entries().is_empty());
  Ok(())
}

#[test]
fn malformed_file_is_recovered_silently() -> Result<()> {
  let temp_dir = TempDir::new()?;
  fs::write(temp_dir.path().join("search_history.json"), "{not json at all")?;

  let mut store = SearchHistoryStore::open_at(temp_dir.path())?;
  assert!(store.entries().is_empty());

  // The store stays usable and the next record repairs the file
  store.record("Nike")?;
  let reloaded = SearchHistoryStore::open_at(temp_dir.path())?;
  assert_eq!(reloaded.entries(), &["Nike".to_string()]);
  Ok(())
}

#[test]
fn wrong_json_shape_is_recovered_silently() -> Result<()> {
  let temp_dir = TempDir::new()?;
  fs::write(temp_dir.path().join("search_history.json"), r#"{"history": []}"#)?;

  let store = SearchHistoryStore::open_at(temp_dir.path())?;
  assert!(store.entries().is_empty());
  Ok(())
}

#[test]
#[serial]
fn open_resolves_the_env_override() -> Result<()> {
  let temp_dir = setup_test_env();

  let mut store = SearchHistoryStore::open()?;
  store.record("Nike")?;

  assert!(temp_dir.path().join("search_history.json").exists());

  env::remove_var("ECHOSPHERE_DIR");
  Ok(())
}

#[test]
#[serial]
fn env_override_isolates_histories() -> Result<()> {
  let temp_dir = setup_test_env();

  {
    let mut store = SearchHistoryStore::open()?;
    store.record("Nike")?;
  }

  let reloaded = SearchHistoryStore::open()?;
  assert_eq!(reloaded.entries(), &["Nike".to_string()]);

  drop(temp_dir);
  env::remove_var("ECHOSPHERE_DIR");
  Ok(())
}
