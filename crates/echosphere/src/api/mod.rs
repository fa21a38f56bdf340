use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

pub mod http;

/// Wire types shared across every API implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
  Twitter,
  Instagram,
  Reddit,
  News,
  Forum,
  Blog,
  #[serde(other)]
  Other,
}

impl Default for Platform {
  fn default() -> Self {
    Platform::Other
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
  Positive,
  Negative,
  Neutral,
}

impl Default for Sentiment {
  fn default() -> Self {
    Sentiment::Neutral
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
  Anger,
  Excitement,
  Joy,
  Frustration,
  Surprise,
  Neutral,
}

/// One observed occurrence of brand-related content, pre-labeled by the
/// upstream classifier. Immutable once received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mention {
  pub id: u64,
  #[serde(default)]
  pub platform: Platform,
  pub text: String,
  #[serde(default)]
  pub sentiment: Sentiment,
  /// Classifier confidence, 0-100
  #[serde(default)]
  pub confidence: Option<u8>,
  #[serde(default)]
  pub emotion: Option<Emotion>,
  #[serde(default = "default_username")]
  pub username: String,
  #[serde(default)]
  pub verified: bool,
  #[serde(default)]
  pub engagement: u64,
  #[serde(default)]
  pub timestamp: Option<DateTime<Utc>>,
  #[serde(default)]
  pub location: Option<String>,
}

fn default_username() -> String {
  "anonymous".to_string()
}

/// Upstream-computed summary attached to a brand analysis. The core derives
/// its own indicators from the mention list; these fields are passed through
/// for display only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisSummary {
  #[serde(default)]
  pub positive_mentions: u64,
  #[serde(default)]
  pub negative_mentions: u64,
  #[serde(default)]
  pub ai_confidence_avg: u8,
}

/// Full response of one `/api/analyze` round. Owned by a single session
/// result and replaced wholesale on the next analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandAnalysis {
  pub brand: String,
  #[serde(default)]
  pub mentions: Vec<Mention>,
  #[serde(default)]
  pub summary: AnalysisSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatLevel {
  Low,
  Medium,
  High,
}

impl Default for ThreatLevel {
  fn default() -> Self {
    ThreatLevel::Medium
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
  Rising,
  Declining,
  Stable,
}

impl Default for Trend {
  fn default() -> Self {
    Trend::Stable
  }
}

/// Externally supplied per-brand metrics used for competitor comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorEntry {
  pub name: String,
  #[serde(default)]
  pub mentions: u64,
  /// Sentiment score, 0-100
  #[serde(default)]
  pub sentiment_score: u8,
  #[serde(default)]
  pub threat_level: ThreatLevel,
  #[serde(default)]
  pub trend: Trend,
}

/// Response of one `/api/competitors` round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorComparison {
  pub main_brand: CompetitorEntry,
  #[serde(default)]
  pub competitors: Vec<CompetitorEntry>,
}

/// Availability of the upstream classifier model. Polled independently of
/// analysis rounds; never affects session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiStatus {
  pub ai_available: bool,
  pub status: String,
}

impl Default for AiStatus {
  fn default() -> Self {
    Self { ai_available: false, status: "unknown".to_string() }
  }
}

/// Upstream analysis service abstraction - the HTTP transport is an external
/// collaborator, so tests substitute a mock here
#[async_trait]
pub trait BrandIntelApi: Send + Sync {
  /// Liveness probe; any 2xx counts as reachable
  async fn health_check(&self) -> Result<(), AnalysisError>;

  /// Classifier availability
  async fn ai_status(&self) -> Result<AiStatus, AnalysisError>;

  /// Fetch classified mentions for a brand
  async fn analyze_brand(&self, brand: &str) -> Result<BrandAnalysis, AnalysisError>;

  /// Fetch competitor metrics for a brand
  async fn competitor_analysis(&self, brand: &str) -> Result<CompetitorComparison, AnalysisError>;
}

/// Poll classifier availability, substituting the default status when the
/// service is unreachable. Infallible by contract.
pub async fn fetch_ai_status(api: &dyn BrandIntelApi) -> AiStatus {
  match api.ai_status().await {
    Ok(status) => status,
    Err(err) => {
      tracing::debug!("ai-status poll failed, using default: {err}");
      AiStatus::default()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn mention_decodes_with_sparse_fields() {
    // Upstream payloads routinely omit optional fields
    let mention: Mention =
      serde_json::from_str(r#"{"id": 7, "text": "saw the brand in the news"}"#).unwrap();

    assert_eq!(mention.platform, Platform::Other);
    assert_eq!(mention.sentiment, Sentiment::Neutral);
    assert_eq!(mention.username, "anonymous");
    assert_eq!(mention.confidence, None);
    assert_eq!(mention.engagement, 0);
    assert!(!mention.verified);
  }

  #[test]
  fn unknown_platform_decodes_as_other() {
    let mention: Mention = serde_json::from_str(
      r#"{"id": 1, "platform": "TikTok", "text": "hi", "sentiment": "positive"}"#,
    )
    .unwrap();
    assert_eq!(mention.platform, Platform::Other);
    assert_eq!(mention.sentiment, Sentiment::Positive);
  }

  #[test]
  fn brand_analysis_decodes_the_upstream_shape() {
    let json = r#"{
      "brand": "Nike",
      "mentions": [
        {"id": 1, "platform": "Twitter", "text": "love it", "sentiment": "positive",
         "emotion": "joy", "confidence": 92, "username": "user_1204", "engagement": 340},
        {"id": 2, "platform": "Reddit", "text": "support is slow", "sentiment": "negative",
         "emotion": "frustration"}
      ],
      "summary": {"positive_mentions": 1, "negative_mentions": 1, "ai_confidence_avg": 88}
    }"#;

    let analysis: BrandAnalysis = serde_json::from_str(json).unwrap();
    assert_eq!(analysis.brand, "Nike");
    assert_eq!(analysis.mentions.len(), 2);
    assert_eq!(analysis.mentions[0].emotion, Some(Emotion::Joy));
    assert_eq!(analysis.summary.ai_confidence_avg, 88);
  }

  #[test]
  fn competitor_entry_defaults() {
    let entry: CompetitorEntry =
      serde_json::from_str(r#"{"name": "Adidas", "mentions": 90, "sentiment_score": 75}"#).unwrap();
    assert_eq!(entry.threat_level, ThreatLevel::Medium);
    assert_eq!(entry.trend, Trend::Stable);
  }

  #[test]
  fn ai_status_default_is_unavailable_unknown() {
    let status = AiStatus::default();
    assert!(!status.ai_available);
    assert_eq!(status.status, "unknown");
  }
}
