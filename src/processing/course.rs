//! Course, match and result types shared across the pipeline

use crate::processing::text_processor::normalize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A course record as delivered by the catalog loader
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub description: String,
}

impl Course {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Encoder input: normalized title twice, then the normalized description.
    /// The repeated title weighs it more heavily in the embedding.
    pub fn combined_text(&self) -> String {
        let title = normalize(&self.title);
        let description = normalize(&self.description);
        format!("{} {} {}", title, title, description)
    }

    /// Text handed to the content analyzer, casing preserved for entity recognition
    pub fn analysis_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceLabel {
    High,
    Medium,
    Low,
}

impl ConfidenceLabel {
    /// Strict thresholds: exactly 0.7 is Medium, exactly 0.4 is Low
    pub fn from_score(confidence_score: f32) -> Self {
        if confidence_score > 0.7 {
            ConfidenceLabel::High
        } else if confidence_score > 0.4 {
            ConfidenceLabel::Medium
        } else {
            ConfidenceLabel::Low
        }
    }
}

impl fmt::Display for ConfidenceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceLabel::High => write!(f, "High"),
            ConfidenceLabel::Medium => write!(f, "Medium"),
            ConfidenceLabel::Low => write!(f, "Low"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    pub technical_terms: Vec<String>,
    pub skill_mentions: usize,
    pub complexity_score: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    #[serde(rename = "course")]
    pub course_title: String,
    pub score: f32,
    #[serde(rename = "confidence")]
    pub confidence_label: ConfidenceLabel,
    pub analysis: ContentAnalysis,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillResult {
    pub skill: String,
    pub matching_courses: Vec<Match>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_text_repeats_title() {
        let course = Course::new("Computer Vision", "Introduces basic concepts of computer vision.");
        assert_eq!(
            course.combined_text(),
            "computer vision computer vision introduces basic concepts of computer vision"
        );
    }

    #[test]
    fn test_analysis_text_keeps_casing() {
        let course = Course::new("Cloud Computing", "Deploying services on AWS.");
        assert_eq!(course.analysis_text(), "Cloud Computing Deploying services on AWS.");
    }

    #[test]
    fn test_label_boundaries_are_strict() {
        assert_eq!(ConfidenceLabel::from_score(0.71), ConfidenceLabel::High);
        assert_eq!(ConfidenceLabel::from_score(0.7), ConfidenceLabel::Medium);
        assert_eq!(ConfidenceLabel::from_score(0.41), ConfidenceLabel::Medium);
        assert_eq!(ConfidenceLabel::from_score(0.4), ConfidenceLabel::Low);
        assert_eq!(ConfidenceLabel::from_score(0.0), ConfidenceLabel::Low);
    }

    #[test]
    fn test_match_uses_artifact_field_names() {
        let m = Match {
            course_title: "Computer Vision".to_string(),
            score: 0.9,
            confidence_label: ConfidenceLabel::High,
            analysis: ContentAnalysis::default(),
            description: "Images".to_string(),
        };
        let value = serde_json::to_value(&m).unwrap();
        assert_eq!(value["course"], "Computer Vision");
        assert_eq!(value["confidence"], "High");
        assert!(value["analysis"]["technical_terms"].is_array());
    }
}
