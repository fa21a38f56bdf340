pub mod api;
pub mod commands;
pub mod competitors;
pub mod display;
pub mod error;
pub mod history;
pub mod metrics;
pub mod session;

// Re-export commonly used types for easier testing
pub use api::{AiStatus, BrandAnalysis, BrandIntelApi, CompetitorComparison, Mention};
pub use error::AnalysisError;
pub use history::SearchHistoryStore;
pub use metrics::RiskLevel;
pub use session::{AnalysisReport, AnalysisSession, SessionState};
