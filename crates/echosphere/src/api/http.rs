//! HTTP implementation of the analysis API contract
//!
//! Thin reqwest wrapper around the four upstream endpoints. All transport
//! failures are folded into `AnalysisError` so callers never see raw
//! reqwest errors.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tokio::time::timeout;

use crate::api::{AiStatus, BrandAnalysis, BrandIntelApi, CompetitorComparison};
use crate::error::AnalysisError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Configuration for the analysis API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
  /// Base URL of the analysis backend (e.g., "http://localhost:5000")
  pub base_url: String,
  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self { base_url: DEFAULT_BASE_URL.to_string(), timeout_secs: 30 }
  }
}

/// reqwest-backed `BrandIntelApi`
pub struct HttpBrandIntel {
  client: Client,
  config: ClientConfig,
}

impl HttpBrandIntel {
  pub fn new(config: ClientConfig) -> Result<Self, AnalysisError> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .build()
      .map_err(|e| AnalysisError::network(e.to_string()))?;

    Ok(Self { client, config })
  }

  /// Build a client from `ECHOSPHERE_API_URL` / `ECHOSPHERE_TIMEOUT_SECS`,
  /// falling back to defaults
  pub fn from_env() -> Result<Self, AnalysisError> {
    let base_url =
      std::env::var("ECHOSPHERE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let timeout_secs = std::env::var("ECHOSPHERE_TIMEOUT_SECS")
      .ok()
      .and_then(|v| v.parse().ok())
      .unwrap_or(30);

    Self::new(ClientConfig { base_url, timeout_secs })
  }

  /// Build a client from an optional CLI override, else the environment
  pub fn from_override(api_url: Option<String>) -> Result<Self, AnalysisError> {
    match api_url {
      Some(base_url) => Self::new(ClientConfig { base_url, ..Default::default() }),
      None => Self::from_env(),
    }
  }

  pub fn base_url(&self) -> &str {
    &self.config.base_url
  }

  fn endpoint(&self, path: &str) -> String {
    format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
  }

  async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, AnalysisError> {
    let url = self.endpoint(path);
    tracing::debug!("GET {url}");

    let response = timeout(
      Duration::from_secs(self.config.timeout_secs),
      self.client.get(&url).send(),
    )
    .await
    .map_err(|_| AnalysisError::Timeout)??;

    if !response.status().is_success() {
      return Err(AnalysisError::from_status(response.status().as_u16()));
    }

    response.json().await.map_err(|e| AnalysisError::malformed(e.to_string()))
  }

  async fn post_brand<T: serde::de::DeserializeOwned>(
    &self,
    path: &str,
    brand: &str,
  ) -> Result<T, AnalysisError> {
    let url = self.endpoint(path);
    tracing::debug!("POST {url} brand={brand}");

    let response = timeout(
      Duration::from_secs(self.config.timeout_secs),
      self.client.post(&url).json(&json!({ "brand": brand })).send(),
    )
    .await
    .map_err(|_| AnalysisError::Timeout)??;

    if !response.status().is_success() {
      return Err(AnalysisError::from_status(response.status().as_u16()));
    }

    response.json().await.map_err(|e| AnalysisError::malformed(e.to_string()))
  }
}

#[async_trait]
impl BrandIntelApi for HttpBrandIntel {
  async fn health_check(&self) -> Result<(), AnalysisError> {
    let url = self.endpoint("/api/health");

    // Shorter timeout for the liveness probe
    let response = timeout(Duration::from_secs(5), self.client.get(&url).send())
      .await
      .map_err(|_| AnalysisError::Timeout)??;

    if response.status().is_success() {
      Ok(())
    } else {
      Err(AnalysisError::from_status(response.status().as_u16()))
    }
  }

  async fn ai_status(&self) -> Result<AiStatus, AnalysisError> {
    self.get_json("/api/ai-status").await
  }

  async fn analyze_brand(&self, brand: &str) -> Result<BrandAnalysis, AnalysisError> {
    self.post_brand("/api/analyze", brand).await
  }

  async fn competitor_analysis(&self, brand: &str) -> Result<CompetitorComparison, AnalysisError> {
    self.post_brand("/api/competitors", brand).await
  }
}
