use anyhow::Result;

use crate::display;
use crate::history::SearchHistoryStore;

pub async fn handle() -> Result<()> {
  let store = SearchHistoryStore::open()?;
  display::render_history(store.entries());
  Ok(())
}
