use anyhow::Result;

use crate::api::http::HttpBrandIntel;
use crate::api::{self, BrandIntelApi};
use crate::display;

pub async fn handle(api_url: Option<String>) -> Result<()> {
  let api = HttpBrandIntel::from_override(api_url)?;

  let reachable = api.health_check().await.is_ok();
  let ai = api::fetch_ai_status(&api).await;

  display::render_status(reachable, &ai);
  Ok(())
}
