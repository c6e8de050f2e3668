//! Configuration management for the course skill matcher

use crate::error::{CourseMatchError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub matching: MatchingConfig,
    pub models: ModelConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub top_n: usize,
    pub threshold: f32,
    pub strategy: MatchStrategy,
}

/// Which encoder backs the similarity matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// Dense sentence embeddings from a model2vec model
    Embedding,
    /// Feature-hashed bag of words, no model files needed
    Lexical,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub models_dir: PathBuf,
    pub embedding_model: String,
    pub batch_size: usize,
    pub hashing_dimension: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub lexicon_path: Option<PathBuf>,
    pub gazetteer_path: Option<PathBuf>,
    pub cache_course_analysis: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        let models_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".course-skill-matcher")
            .join("models");

        Self {
            matching: MatchingConfig {
                top_n: 3,
                threshold: 0.1,
                strategy: MatchStrategy::Embedding,
            },
            models: ModelConfig {
                models_dir,
                embedding_model: "minishlab/potion-base-8M".to_string(),
                batch_size: 256,
                hashing_dimension: 1024,
            },
            analysis: AnalysisConfig {
                lexicon_path: None,
                gazetteer_path: None,
                cache_course_analysis: true,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from `config_path`, writing defaults there on first use
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| CourseMatchError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| CourseMatchError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("course-skill-matcher")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.matching.top_n == 0 {
            return Err(CourseMatchError::Configuration(
                "matching.top_n must be a positive integer".to_string(),
            ));
        }
        if !self.matching.threshold.is_finite() {
            return Err(CourseMatchError::Configuration(
                "matching.threshold must be a finite number".to_string(),
            ));
        }
        if !(-1.0..=1.0).contains(&self.matching.threshold) {
            log::warn!(
                "threshold {} lies outside the cosine range [-1, 1]; it will keep all or no courses",
                self.matching.threshold
            );
        }
        if self.models.batch_size == 0 {
            return Err(CourseMatchError::Configuration(
                "models.batch_size must be at least 1".to_string(),
            ));
        }
        if self.models.hashing_dimension == 0 {
            return Err(CourseMatchError::Configuration(
                "models.hashing_dimension must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn models_dir(&self) -> &PathBuf {
        &self.models.models_dir
    }
}
