//! One "analyze brand X" round: two concurrent upstream fetches, joined and
//! applied atomically, with last-request-wins semantics.

use std::sync::Arc;

use crate::api::{BrandAnalysis, BrandIntelApi, CompetitorComparison};
use crate::competitors::{self, CompetitorStanding};
use crate::error::AnalysisError;
use crate::history::SearchHistoryStore;
use crate::metrics::{self, RiskLevel};

/// Everything derived from one successful analysis round. Built in one shot
/// from the joined fetch results and replaced wholesale on the next round.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
  pub brand: String,
  pub analysis: BrandAnalysis,
  pub comparison: CompetitorComparison,
  pub total_mentions: usize,
  pub sentiment_score: u8,
  pub risk_level: RiskLevel,
  pub risk_score: u8,
  pub standings: Vec<CompetitorStanding>,
}

impl AnalysisReport {
  fn build(brand: String, analysis: BrandAnalysis, comparison: CompetitorComparison) -> Self {
    let mentions = &analysis.mentions;
    let total_mentions = metrics::total_mentions(mentions);
    let sentiment_score = metrics::sentiment_score(mentions);
    let risk_level = metrics::risk_level(mentions);
    let risk_score = metrics::risk_score(mentions);
    let standings = competitors::rank(&comparison);

    Self {
      brand,
      analysis,
      comparison,
      total_mentions,
      sentiment_score,
      risk_level,
      risk_score,
      standings,
    }
  }
}

/// Session lifecycle. One value, replaced wholesale on every transition.
#[derive(Debug)]
pub enum SessionState {
  Idle,
  Loading { brand: String },
  Ready(Box<AnalysisReport>),
  Failed { brand: String, error: AnalysisError },
}

impl SessionState {
  pub fn is_loading(&self) -> bool {
    matches!(self, SessionState::Loading { .. })
  }

  pub fn report(&self) -> Option<&AnalysisReport> {
    match self {
      SessionState::Ready(report) => Some(report),
      _ => None,
    }
  }
}

/// Handle for one in-flight analysis round. The token pins the round to the
/// session generation that started it, so a stale response can never
/// overwrite a newer one.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
  brand: String,
  token: u64,
}

impl AnalysisRequest {
  pub fn brand(&self) -> &str {
    &self.brand
  }
}

/// Joined outcome of the two upstream fetches: both results or neither
pub type RoundOutcome = Result<(BrandAnalysis, CompetitorComparison), AnalysisError>;

/// Orchestrates analysis rounds and owns the session state plus the search
/// history. Mutations are serialized through `&mut self`.
pub struct AnalysisSession {
  api: Arc<dyn BrandIntelApi>,
  history: SearchHistoryStore,
  state: SessionState,
  latest_token: u64,
}

impl AnalysisSession {
  pub fn new(api: Arc<dyn BrandIntelApi>, history: SearchHistoryStore) -> Self {
    Self { api, history, state: SessionState::Idle, latest_token: 0 }
  }

  pub fn state(&self) -> &SessionState {
    &self.state
  }

  pub fn history(&self) -> &[String] {
    self.history.entries()
  }

  /// Validate the brand name and transition to Loading. Rejects empty or
  /// whitespace-only input without touching the current state.
  pub fn begin(&mut self, brand: &str) -> Result<AnalysisRequest, AnalysisError> {
    let brand = brand.trim();
    if brand.is_empty() {
      return Err(AnalysisError::EmptyBrand);
    }

    self.latest_token += 1;
    self.state = SessionState::Loading { brand: brand.to_string() };
    Ok(AnalysisRequest { brand: brand.to_string(), token: self.latest_token })
  }

  /// Run the two data-gathering calls concurrently. Resolves only after
  /// both settle; either failure fails the whole round.
  pub async fn fetch(&self, request: &AnalysisRequest) -> RoundOutcome {
    let (analysis, comparison) = tokio::join!(
      self.api.analyze_brand(&request.brand),
      self.api.competitor_analysis(&request.brand),
    );
    Ok((analysis?, comparison?))
  }

  /// Apply a round outcome. A stale token (an outcome from a superseded
  /// round) is discarded without touching state or history. A fresh success
  /// builds the report and records the brand; a fresh failure keeps nothing
  /// from the round.
  pub fn apply(&mut self, request: AnalysisRequest, outcome: RoundOutcome) -> &SessionState {
    if request.token != self.latest_token {
      tracing::debug!("discarding stale analysis round for '{}'", request.brand);
      return &self.state;
    }

    match outcome {
      Ok((analysis, comparison)) => {
        if let Err(err) = self.history.record(&request.brand) {
          tracing::warn!("could not persist search history: {err}");
        }
        self.state =
          SessionState::Ready(Box::new(AnalysisReport::build(request.brand, analysis, comparison)));
      }
      Err(error) => {
        self.state = SessionState::Failed { brand: request.brand, error };
      }
    }

    &self.state
  }

  /// Full round: validate, fetch both datasets concurrently, apply
  pub async fn analyze(&mut self, brand: &str) -> Result<&SessionState, AnalysisError> {
    let request = self.begin(brand)?;
    let outcome = self.fetch(&request).await;
    Ok(self.apply(request, outcome))
  }

  /// Re-run the last failed round. Only valid from the Failed state.
  pub async fn retry(&mut self) -> Result<&SessionState, AnalysisError> {
    let brand = match &self.state {
      SessionState::Failed { brand, .. } => brand.clone(),
      _ => return Err(AnalysisError::EmptyBrand),
    };
    self.analyze(&brand).await
  }
}
