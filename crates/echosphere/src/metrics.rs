//! Pure reducers over a mention set: aggregate counts, sentiment score,
//! and the risk indicators driving the dashboard.

use serde::{Deserialize, Serialize};

use crate::api::{Mention, Sentiment};

/// Ordinal classification of negative-mention concentration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
  Low,
  Medium,
  High,
}

impl RiskLevel {
  pub fn icon(&self) -> &'static str {
    match self {
      RiskLevel::Low => "🟢",
      RiskLevel::Medium => "🟡",
      RiskLevel::High => "🔴",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      RiskLevel::Low => "low",
      RiskLevel::Medium => "medium",
      RiskLevel::High => "high",
    }
  }
}

pub fn total_mentions(mentions: &[Mention]) -> usize {
  mentions.len()
}

fn count_sentiment(mentions: &[Mention], sentiment: Sentiment) -> usize {
  mentions.iter().filter(|m| m.sentiment == sentiment).count()
}

/// Percentage of mentions labeled positive, rounded to the nearest integer.
/// 0 for an empty set.
pub fn sentiment_score(mentions: &[Mention]) -> u8 {
  if mentions.is_empty() {
    return 0;
  }
  let positive = count_sentiment(mentions, Sentiment::Positive);
  (positive as f64 / mentions.len() as f64 * 100.0).round() as u8
}

/// Share of mentions labeled negative, 0.0 for an empty set
pub fn negative_percentage(mentions: &[Mention]) -> f64 {
  if mentions.is_empty() {
    return 0.0;
  }
  let negative = count_sentiment(mentions, Sentiment::Negative);
  negative as f64 / mentions.len() as f64 * 100.0
}

/// Risk tier for a mention set. Boundaries are strict: exactly 30% negative
/// is still medium, exactly 15% is still low.
pub fn risk_level(mentions: &[Mention]) -> RiskLevel {
  let negative = negative_percentage(mentions);
  if negative > 30.0 {
    RiskLevel::High
  } else if negative > 15.0 {
    RiskLevel::Medium
  } else {
    RiskLevel::Low
  }
}

/// Bounded 0-100 amplification of the negative share. The doubling is a
/// heuristic carried over for compatibility, not a principled risk model:
/// a 50%-negative set already saturates at 100.
pub fn risk_score(mentions: &[Mention]) -> u8 {
  let doubled = (negative_percentage(mentions) * 2.0).round();
  doubled.min(100.0) as u8
}
