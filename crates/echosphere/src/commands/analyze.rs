use anyhow::{anyhow, Result};
use std::sync::Arc;

use crate::api::http::HttpBrandIntel;
use crate::display;
use crate::history::SearchHistoryStore;
use crate::session::{AnalysisSession, SessionState};

pub async fn handle(brand: String, api_url: Option<String>) -> Result<()> {
  let api = HttpBrandIntel::from_override(api_url)?;
  let history = SearchHistoryStore::open()?;
  let mut session = AnalysisSession::new(Arc::new(api), history);

  println!("🔎 Analyzing '{}'...", brand.trim());
  session.analyze(&brand).await?;

  match session.state() {
    SessionState::Ready(report) => {
      display::render_report(report);
      Ok(())
    }
    SessionState::Failed { brand, error } => Err(anyhow!("Analysis of '{brand}' failed: {error}")),
    state => Err(anyhow!("Unexpected session state after analysis: {state:?}")),
  }
}
