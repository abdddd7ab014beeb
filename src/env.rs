//! Environment variable constants used throughout the crate
//!
//! This module centralizes all environment variable names to ensure consistency
//! and make it easier to manage configuration across the codebase.

/// Logging configuration
pub mod logging {
    /// Log level configuration (e.g., "debug", "info", "warn", "error")
    pub const LOG_LEVEL: &str = "VIVA_LOG_LEVEL";

    /// Log file path for file-based logging
    pub const LOG_FILE: &str = "VIVA_LOG_FILE";

    /// Disable colored output (follows the NO_COLOR standard)
    pub const NO_COLOR: &str = "NO_COLOR";
}

/// Interview behavior configuration
pub mod interview {
    /// Maximum number of questions per interview session
    pub const MAX_QUESTIONS: &str = "VIVA_MAX_QUESTIONS";

    /// How many prior turns to retrieve when assembling a prompt
    pub const CONTEXT_TOP_K: &str = "VIVA_CONTEXT_TOP_K";

    /// Scoring policy for majority-off-topic sessions ("numeric" or "sentinel")
    pub const SCORING_POLICY: &str = "VIVA_SCORING_POLICY";
}
