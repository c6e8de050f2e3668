//! Per-pair content analysis: technical terms, skill mentions, complexity

use crate::error::Result;
use crate::processing::course::ContentAnalysis;
use crate::processing::entities::EntityRecognizer;
use crate::processing::text_processor::tokenize_with_offsets;
use std::collections::HashSet;

/// Skill-independent part of a course analysis.
///
/// Entities and tokens depend only on the course text, so one profile serves
/// every skill the course is compared against.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseProfile {
    pub technical_terms: Vec<String>,
    tokens: Vec<String>,
}

impl CourseProfile {
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Technical terms per token; 0 for text without tokens
    pub fn complexity_score(&self) -> f32 {
        self.technical_terms.len() as f32 / self.token_count().max(1) as f32
    }

    /// Tokens whose lowercase form is one of the skill's whitespace-separated words
    pub fn skill_mentions(&self, skill: &str) -> usize {
        let skill_terms: HashSet<String> = skill.to_lowercase().split_whitespace().map(String::from).collect();
        self.tokens.iter().filter(|token| skill_terms.contains(*token)).count()
    }

    pub fn analysis_for(&self, skill: &str) -> ContentAnalysis {
        ContentAnalysis {
            technical_terms: self.technical_terms.clone(),
            skill_mentions: self.skill_mentions(skill),
            complexity_score: self.complexity_score(),
        }
    }
}

pub struct ContentAnalyzer {
    recognizer: EntityRecognizer,
}

impl ContentAnalyzer {
    pub fn new(recognizer: EntityRecognizer) -> Self {
        Self { recognizer }
    }

    /// Tokenize and run entity recognition over a course text
    pub fn profile(&self, course_text: &str) -> Result<CourseProfile> {
        let tokens = tokenize_with_offsets(course_text);
        let entities = self.recognizer.recognize_tokens(course_text, &tokens)?;

        // Duplicates stay: a term named twice counts twice
        let technical_terms = entities
            .into_iter()
            .filter(|entity| entity.label.is_technical())
            .map(|entity| entity.text)
            .collect();

        Ok(CourseProfile {
            technical_terms,
            tokens: tokens.iter().map(|t| t.text.to_lowercase()).collect(),
        })
    }

    pub fn analyze(&self, course_text: &str, skill: &str) -> Result<ContentAnalysis> {
        Ok(self.profile(course_text)?.analysis_for(skill))
    }
}
