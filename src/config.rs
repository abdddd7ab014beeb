//! Configuration file management for the interview engine
//!
//! This module handles reading and writing configuration values to
//! ~/.viva/config.toml. Configuration values can be overridden by
//! environment variables.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::env::interview as env_vars;

/// Default number of questions asked per interview session
pub const DEFAULT_MAX_QUESTIONS: u32 = 4;

/// Default number of prior turns retrieved when assembling a prompt
pub const DEFAULT_CONTEXT_TOP_K: usize = 5;

/// How summary scores are reported for majority-off-topic sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    /// Always keep the numeric scores extracted from the model output
    #[default]
    Numeric,
    /// Replace both scores with the unscored sentinel when most answers
    /// were judged off-topic
    SentinelWhenOffTopic,
}

impl std::fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoringPolicy::Numeric => write!(f, "numeric"),
            ScoringPolicy::SentinelWhenOffTopic => write!(f, "sentinel"),
        }
    }
}

impl std::str::FromStr for ScoringPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "numeric" => Ok(ScoringPolicy::Numeric),
            "sentinel" | "sentinel_when_off_topic" => Ok(ScoringPolicy::SentinelWhenOffTopic),
            _ => Err(format!(
                "Unknown scoring policy: {s}. Valid options: numeric, sentinel"
            )),
        }
    }
}

/// Tunable interview behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewConfig {
    /// Maximum questions per session before auto-end
    #[serde(default = "default_max_questions")]
    pub max_questions: u32,

    /// Number of retrieved context turns per continuation prompt
    #[serde(default = "default_context_top_k")]
    pub context_top_k: usize,

    /// Score reporting mode for majority-off-topic sessions
    #[serde(default)]
    pub scoring_policy: ScoringPolicy,
}

fn default_max_questions() -> u32 {
    DEFAULT_MAX_QUESTIONS
}

fn default_context_top_k() -> usize {
    DEFAULT_CONTEXT_TOP_K
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            max_questions: DEFAULT_MAX_QUESTIONS,
            context_top_k: DEFAULT_CONTEXT_TOP_K,
            scoring_policy: ScoringPolicy::default(),
        }
    }
}

impl InterviewConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_questions(mut self, max_questions: u32) -> Self {
        self.max_questions = max_questions;
        self
    }

    pub fn with_context_top_k(mut self, top_k: usize) -> Self {
        self.context_top_k = top_k;
        self
    }

    pub fn with_scoring_policy(mut self, policy: ScoringPolicy) -> Self {
        self.scoring_policy = policy;
        self
    }
}

/// Configuration structure matching config.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub interview: InterviewConfig,
}

impl Config {
    /// Get the config file path (~/.viva/config.toml)
    pub fn get_config_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Could not find home directory")?;
        Ok(home_dir.join(".viva").join("config.toml"))
    }

    /// Load configuration from file
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path
    pub fn load_from(config_path: &PathBuf) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &PathBuf) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Apply environment variable overrides on top of the loaded values
    pub fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var(env_vars::MAX_QUESTIONS) {
            if let Ok(max) = value.parse::<u32>() {
                self.interview.max_questions = max;
            }
        }

        if let Ok(value) = std::env::var(env_vars::CONTEXT_TOP_K) {
            if let Ok(top_k) = value.parse::<usize>() {
                self.interview.context_top_k = top_k;
            }
        }

        if let Ok(value) = std::env::var(env_vars::SCORING_POLICY) {
            if let Ok(policy) = value.parse::<ScoringPolicy>() {
                self.interview.scoring_policy = policy;
            }
        }
    }

    /// Load configuration from file with environment overrides applied
    pub fn from_env() -> Result<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides();
        Ok(config)
    }
}
