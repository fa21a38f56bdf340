use chrono::{DateTime, Local, Utc};
use colored::*;
use console::Emoji;

use crate::api::{AiStatus, Mention, Sentiment};
use crate::session::AnalysisReport;

/// How many mentions of the feed to print under a report
const FEED_SAMPLE: usize = 5;

static CHART: Emoji<'_, '_> = Emoji("📊 ", "");

/// Convert a UTC timestamp to a human-readable local time
pub fn format_timestamp(utc_time: DateTime<Utc>) -> String {
  let local_time: DateTime<Local> = utc_time.into();
  local_time.format("%b %d, %Y %I:%M %p").to_string()
}

fn sentiment_tag(sentiment: Sentiment) -> ColoredString {
  match sentiment {
    Sentiment::Positive => "positive".green(),
    Sentiment::Negative => "negative".red(),
    Sentiment::Neutral => "neutral".dimmed(),
  }
}

fn mention_line(mention: &Mention) {
  let when = mention.timestamp.map(format_timestamp).unwrap_or_else(|| "-".to_string());
  println!(
    "  [{:?}] @{} ({}) {}",
    mention.platform,
    mention.username,
    sentiment_tag(mention.sentiment),
    when.dimmed()
  );
  println!("    {}", mention.text);
}

/// Render one full analysis report
pub fn render_report(report: &AnalysisReport) {
  println!();
  println!("{}", format!("{CHART}Brand analysis: {}", report.brand).bold());
  println!("{}", "─".repeat(50));

  println!("Total mentions:   {}", report.total_mentions);
  println!("Sentiment score:  {}% positive", report.sentiment_score);
  println!(
    "Risk:             {} {} (score {}/100)",
    report.risk_level.icon(),
    report.risk_level.label(),
    report.risk_score
  );

  let summary = &report.analysis.summary;
  println!(
    "Upstream summary: {} positive / {} negative (avg. confidence {}%)",
    summary.positive_mentions, summary.negative_mentions, summary.ai_confidence_avg
  );

  if !report.analysis.mentions.is_empty() {
    println!();
    println!("{}", "Recent mentions".bold());
    for mention in report.analysis.mentions.iter().take(FEED_SAMPLE) {
      mention_line(mention);
    }
    let hidden = report.analysis.mentions.len().saturating_sub(FEED_SAMPLE);
    if hidden > 0 {
      println!("  {}", format!("... and {hidden} more").dimmed());
    }
  }

  println!();
  println!("{}", "Competitor standing".bold());
  println!(
    "  {} (main brand): sentiment {}%",
    report.comparison.main_brand.name, report.comparison.main_brand.sentiment_score
  );
  for standing in &report.standings {
    let direction = if standing.ahead_of_main_brand {
      format!("+{} ahead", standing.sentiment_diff).red()
    } else {
      format!("{} behind/level", standing.sentiment_diff).green()
    };
    println!(
      "  {}: sentiment {}% ({}), threat {:?}, trend {:?}",
      standing.entry.name,
      standing.entry.sentiment_score,
      direction,
      standing.threat_level(),
      standing.trend()
    );
  }
}

/// Render the saved MRU search history
pub fn render_history(entries: &[String]) {
  if entries.is_empty() {
    println!("No searches recorded yet.");
    return;
  }
  println!("{}", "Recent searches".bold());
  for (index, brand) in entries.iter().enumerate() {
    println!("  {}. {}", index + 1, brand);
  }
}

/// Render backend reachability and classifier availability
pub fn render_status(reachable: bool, ai: &AiStatus) {
  if reachable {
    println!("Backend:  {}", "reachable".green());
  } else {
    println!("Backend:  {}", "unreachable".red());
  }

  if ai.ai_available {
    println!("AI model: {} ({})", "available".green(), ai.status);
  } else {
    println!("AI model: {} ({})", "unavailable".yellow(), ai.status);
  }
}
