//! Shared helpers for integration tests

#![allow(dead_code)]

use course_skill_matcher::processing::analyzer::ContentAnalyzer;
use course_skill_matcher::processing::course::Course;
use course_skill_matcher::processing::embeddings::Encoder;
use course_skill_matcher::processing::enricher::SkillEnricher;
use course_skill_matcher::processing::entities::EntityRecognizer;
use course_skill_matcher::processing::lemmatizer::Lemmatizer;
use course_skill_matcher::processing::lexicon::Lexicon;
use course_skill_matcher::processing::text_processor::normalize;
use course_skill_matcher::{CourseSkillMatcher, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

const VOCAB_DIMENSION: usize = 512;

/// Bag-of-words counts over a growing vocabulary.
///
/// Each distinct normalized word gets its own axis, so cosine scores are exact
/// word-overlap ratios. The call counter is shared with clones.
#[derive(Clone, Default)]
pub struct VocabEncoder {
    vocabulary: Rc<RefCell<HashMap<String, usize>>>,
    calls: Rc<Cell<usize>>,
}

impl VocabEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn encode_one(&self, text: &str) -> Vec<f32> {
        let mut vocabulary = self.vocabulary.borrow_mut();
        let mut vector = vec![0.0f32; VOCAB_DIMENSION];
        for word in normalize(text).split_whitespace() {
            let next = vocabulary.len();
            let index = *vocabulary.entry(word.to_string()).or_insert(next);
            assert!(index < VOCAB_DIMENSION, "test vocabulary exhausted");
            vector[index] += 1.0;
        }
        vector
    }
}

impl Encoder for VocabEncoder {
    fn name(&self) -> &str {
        "vocab"
    }

    fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        self.calls.set(self.calls.get() + 1);
        Ok(texts.iter().map(|text| self.encode_one(text)).collect())
    }
}

pub fn matcher_with(encoder: VocabEncoder, lexicon: Lexicon) -> CourseSkillMatcher {
    CourseSkillMatcher::with_components(
        Box::new(encoder),
        SkillEnricher::new(lexicon, Lemmatizer::new()),
        ContentAnalyzer::new(EntityRecognizer::builtin().expect("builtin gazetteer")),
    )
}

/// Matcher over an empty lexicon, so enrichment adds only lemmas
pub fn plain_matcher() -> (CourseSkillMatcher, VocabEncoder) {
    let encoder = VocabEncoder::new();
    (matcher_with(encoder.clone(), Lexicon::empty()), encoder)
}

pub fn sample_courses() -> Vec<Course> {
    vec![
        Course::new("Network Security", "Firewalls, intrusion detection and cryptography."),
        Course::new("Computer Vision", "Introduces basic concepts of computer vision."),
        Course::new("Data Structures", "Arrays, linked lists, trees and graphs."),
    ]
}

pub fn skills(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
