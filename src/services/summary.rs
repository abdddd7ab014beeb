//! Heuristic parser turning free-form model output into a structured
//! interview summary.
//!
//! The model is prompted for a fixed heading layout (see
//! [`prompts`](super::prompts)), but its output is still arbitrary text.
//! The parser walks the response line by line with an explicit section
//! cursor and degrades to documented defaults wherever a marker is
//! missing. It never fails.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::InterviewSummary;

/// Fallback grammatical score when none can be extracted
pub const DEFAULT_GRAMMATICAL_SCORE: i32 = 30;

/// Fallback technical score when none can be extracted
pub const DEFAULT_TECHNICAL_SCORE: i32 = 25;

/// Placeholder used whenever a section ends up empty
pub const NO_ANALYSIS_PLACEHOLDER: &str = "Analysis not available";

lazy_static! {
    static ref INTEGER_RE: Regex = Regex::new(r"\d+").unwrap();
}

/// Which bullet list the cursor currently appends to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Strong,
    Weak,
    Practice,
}

/// Parser for free-form evaluation text
pub struct SummaryParser;

impl SummaryParser {
    /// Parse a model response into a structured summary.
    ///
    /// Relevance fields (`contextually_relevant`, `off_topic_count`) are
    /// not derivable from the response text; they default here and are
    /// overwritten by the orchestrator from the turn annotations.
    pub fn parse(response: &str) -> InterviewSummary {
        let mut summary = InterviewSummary {
            strong_points: Vec::new(),
            weak_points: Vec::new(),
            grammatical_score: DEFAULT_GRAMMATICAL_SCORE,
            technical_score: DEFAULT_TECHNICAL_SCORE,
            practice_points: Vec::new(),
            contextually_relevant: true,
            off_topic_count: 0,
        };

        let mut current_section = Section::None;

        for raw_line in response.lines() {
            let line = raw_line.trim();
            let line_upper = line.to_uppercase();

            if line_upper.contains("STRONG POINTS") {
                current_section = Section::Strong;
                continue;
            } else if line_upper.contains("WEAK POINTS") {
                current_section = Section::Weak;
                continue;
            } else if line_upper.contains("PRACTICE POINTS") {
                current_section = Section::Practice;
                continue;
            } else if line_upper.contains("GRAMMATICAL SCORE") {
                summary.grammatical_score = Self::extract_score(line, DEFAULT_GRAMMATICAL_SCORE);
                continue;
            } else if line_upper.contains("TECHNICAL SCORE") {
                summary.technical_score = Self::extract_score(line, DEFAULT_TECHNICAL_SCORE);
                continue;
            }

            // Stray score-like lines are never bullet content
            if line.is_empty() || line_upper.contains("SCORE") {
                continue;
            }

            let point = Self::strip_bullet(line);
            if point.is_empty() {
                continue;
            }

            match current_section {
                Section::Strong => summary.strong_points.push(point),
                Section::Weak => summary.weak_points.push(point),
                Section::Practice => summary.practice_points.push(point),
                Section::None => {}
            }
        }

        if summary.strong_points.is_empty() {
            summary.strong_points.push(NO_ANALYSIS_PLACEHOLDER.to_string());
        }
        if summary.weak_points.is_empty() {
            summary.weak_points.push(NO_ANALYSIS_PLACEHOLDER.to_string());
        }
        if summary.practice_points.is_empty() {
            summary
                .practice_points
                .push(NO_ANALYSIS_PLACEHOLDER.to_string());
        }

        summary
    }

    /// Extract the first integer in [0, 100] from a line, with fallback
    fn extract_score(line: &str, default_score: i32) -> i32 {
        for m in INTEGER_RE.find_iter(line) {
            if let Ok(score) = m.as_str().parse::<i32>() {
                if (0..=100).contains(&score) {
                    return score;
                }
            }
        }
        default_score
    }

    /// Strip a leading bullet marker, if present
    fn strip_bullet(line: &str) -> String {
        let stripped = line
            .strip_prefix("- ")
            .or_else(|| line.strip_prefix("• "))
            .or_else(|| line.strip_prefix("* "))
            .unwrap_or(line);

        stripped.trim().to_string()
    }
}
