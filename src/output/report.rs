//! Match result artifact: JSON persistence and run summary

use crate::error::{CourseMatchError, Result};
use crate::processing::course::{ConfidenceLabel, SkillResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Write results as pretty-printed JSON, creating parent directories
pub fn save_results(results: &[SkillResult], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(results)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_results(path: &Path) -> Result<Vec<SkillResult>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        CourseMatchError::InvalidInput(format!("Failed to read results {}: {}", path.display(), e))
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Counts over one matching run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub skills: usize,
    pub skills_without_matches: usize,
    pub total_matches: usize,
    pub high_confidence: usize,
    pub medium_confidence: usize,
    pub low_confidence: usize,
}

impl MatchSummary {
    pub fn from_results(results: &[SkillResult]) -> Self {
        let mut summary = MatchSummary {
            skills: results.len(),
            ..Default::default()
        };

        for result in results {
            if result.matching_courses.is_empty() {
                summary.skills_without_matches += 1;
            }
            for course in &result.matching_courses {
                summary.total_matches += 1;
                match course.confidence_label {
                    ConfidenceLabel::High => summary.high_confidence += 1,
                    ConfidenceLabel::Medium => summary.medium_confidence += 1,
                    ConfidenceLabel::Low => summary.low_confidence += 1,
                }
            }
        }

        summary
    }

    /// Skills that received no course at all
    pub fn unmatched_skills(results: &[SkillResult]) -> Vec<&str> {
        results
            .iter()
            .filter(|r| r.matching_courses.is_empty())
            .map(|r| r.skill.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::course::{ContentAnalysis, Match};
    use tempfile::TempDir;

    fn sample() -> Vec<SkillResult> {
        vec![
            SkillResult {
                skill: "Computer Vision".to_string(),
                matching_courses: vec![Match {
                    course_title: "Computer Vision".to_string(),
                    score: 0.9,
                    confidence_label: ConfidenceLabel::High,
                    analysis: ContentAnalysis {
                        technical_terms: vec!["OpenCV".to_string()],
                        skill_mentions: 4,
                        complexity_score: 0.1,
                    },
                    description: "Images".to_string(),
                }],
            },
            SkillResult {
                skill: "Pottery".to_string(),
                matching_courses: Vec::new(),
            },
        ]
    }

    #[test]
    fn test_save_writes_artifact_field_names() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("course_matches.json");
        save_results(&sample(), &path).unwrap();

        let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let first = &value[0]["matching_courses"][0];
        assert_eq!(value[0]["skill"], "Computer Vision");
        assert_eq!(first["course"], "Computer Vision");
        assert_eq!(first["confidence"], "High");
        assert_eq!(first["analysis"]["skill_mentions"], 4);
        assert_eq!(first["description"], "Images");
        assert!(value[1]["matching_courses"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_load_reads_back_saved_results() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("matches.json");
        save_results(&sample(), &path).unwrap();
        assert_eq!(load_results(&path).unwrap(), sample());
    }

    #[test]
    fn test_summary_counts() {
        let summary = MatchSummary::from_results(&sample());
        assert_eq!(summary.skills, 2);
        assert_eq!(summary.skills_without_matches, 1);
        assert_eq!(summary.total_matches, 1);
        assert_eq!(summary.high_confidence, 1);
        assert_eq!(MatchSummary::unmatched_skills(&sample()), vec!["Pottery"]);
    }
}
