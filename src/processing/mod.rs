//! Text processing, embedding, and matching

pub mod analyzer;
pub mod course;
pub mod embedding_manager;
pub mod embeddings;
pub mod enricher;
pub mod entities;
pub mod lemmatizer;
pub mod lexicon;
pub mod matcher;
pub mod similarity;
pub mod text_processor;

pub use course::{ConfidenceLabel, ContentAnalysis, Course, Match, SkillResult};
pub use matcher::CourseSkillMatcher;
