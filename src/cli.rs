//! CLI interface for the course skill matcher

use crate::config::MatchStrategy;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "course-skill-matcher")]
#[command(about = "Match career skills to the most relevant courses in a catalog")]
#[command(long_about = "Rank catalog courses for each skill using sentence embeddings, synonym enrichment, and content analysis")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank courses for a list of skills
    Match {
        /// Course catalog (CSV or JSON with title and description)
        #[arg(long)]
        courses: PathBuf,

        /// Skills file, one skill per line
        #[arg(short, long)]
        skills: Option<PathBuf>,

        /// A single skill; may be repeated
        #[arg(long = "skill")]
        skill: Vec<String>,

        /// Use the skills of a career preset (see `careers`)
        #[arg(long)]
        career: Option<String>,

        /// Courses kept per skill
        #[arg(short = 'n', long)]
        top_n: Option<usize>,

        /// Minimum similarity score, inclusive
        #[arg(short, long, allow_hyphen_values = true)]
        threshold: Option<f32>,

        /// Embedding model: registry id, Hugging Face repo id, or local directory
        #[arg(short, long)]
        model: Option<String>,

        /// Matching strategy: embedding, lexical
        #[arg(long)]
        strategy: Option<String>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,

        /// Include descriptions and a run summary
        #[arg(short, long)]
        detailed: bool,
    },

    /// List career presets
    Careers {
        /// Print the skills of one preset
        #[arg(long)]
        show: Option<String>,
    },

    /// Embedding model management
    Models {
        #[command(subcommand)]
        action: ModelAction,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ModelAction {
    /// List registry models and their download state
    List,

    /// Download a model into the models directory
    Download {
        /// Registry id, display name, or repo id
        model: String,

        /// Force re-download if model exists
        #[arg(short, long)]
        force: bool,
    },

    /// Show model information
    Info {
        model: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

pub fn parse_strategy(strategy: &str) -> Result<MatchStrategy, String> {
    match strategy.to_lowercase().as_str() {
        "embedding" | "embeddings" => Ok(MatchStrategy::Embedding),
        "lexical" | "hashing" => Ok(MatchStrategy::Lexical),
        _ => Err(format!("Invalid strategy: {}. Supported: embedding, lexical", strategy)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_command_parses() {
        let cli = Cli::try_parse_from([
            "course-skill-matcher",
            "match",
            "--courses",
            "courses.csv",
            "--skill",
            "Computer Vision",
            "--skill",
            "NLP",
            "-n",
            "5",
            "--threshold",
            "-0.2",
            "--verbose",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Match {
                skill, top_n, threshold, ..
            } => {
                assert_eq!(skill, vec!["Computer Vision", "NLP"]);
                assert_eq!(top_n, Some(5));
                assert_eq!(threshold, Some(-0.2));
            }
            _ => panic!("expected match command"),
        }
    }

    #[test]
    fn test_models_download_parses() {
        let cli = Cli::try_parse_from(["course-skill-matcher", "models", "download", "potion-base-4M", "--force"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Models {
                action: ModelAction::Download { force: true, .. }
            }
        ));
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!(parse_strategy("Lexical"), Ok(MatchStrategy::Lexical));
        assert_eq!(parse_strategy("embedding"), Ok(MatchStrategy::Embedding));
        assert!(parse_strategy("llm").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("c.CSV"), &["csv", "json"]).is_ok());
        assert!(validate_file_extension(Path::new("c.xlsx"), &["csv", "json"]).is_err());
        assert!(validate_file_extension(Path::new("courses"), &["csv"]).is_err());
    }
}
