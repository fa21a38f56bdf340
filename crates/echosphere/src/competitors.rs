//! Relative standing of each competitor against the main brand.

use serde::{Deserialize, Serialize};

use crate::api::{CompetitorComparison, CompetitorEntry, ThreatLevel, Trend};

/// Derived read-only view over one competitor entry. The source entry is
/// embedded untouched; presentation order follows input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorStanding {
  pub entry: CompetitorEntry,
  /// Competitor sentiment minus main-brand sentiment
  pub sentiment_diff: i64,
  /// Strict comparison: ties favor the main brand
  pub ahead_of_main_brand: bool,
}

impl CompetitorStanding {
  pub fn threat_level(&self) -> ThreatLevel {
    self.entry.threat_level
  }

  pub fn trend(&self) -> Trend {
    self.entry.trend
  }
}

/// Compare every competitor against the main brand
pub fn rank(comparison: &CompetitorComparison) -> Vec<CompetitorStanding> {
  let main_score = comparison.main_brand.sentiment_score;
  comparison
    .competitors
    .iter()
    .map(|entry| CompetitorStanding {
      sentiment_diff: entry.sentiment_score as i64 - main_score as i64,
      ahead_of_main_brand: entry.sentiment_score > main_score,
      entry: entry.clone(),
    })
    .collect()
}
