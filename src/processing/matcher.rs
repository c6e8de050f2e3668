//! Skill-to-course matching: enrichment, embedding, scoring, and ranking

use crate::config::{Config, MatchStrategy};
use crate::error::{CourseMatchError, Result};
use crate::processing::analyzer::{ContentAnalyzer, CourseProfile};
use crate::processing::course::{ConfidenceLabel, ContentAnalysis, Course, Match, SkillResult};
use crate::processing::embedding_manager::{resolve_model_source, ModelSource};
use crate::processing::embeddings::{Encoder, HashingEncoder, Model2VecEncoder};
use crate::processing::enricher::SkillEnricher;
use crate::processing::entities::EntityRecognizer;
use crate::processing::lemmatizer::Lemmatizer;
use crate::processing::lexicon::Lexicon;
use crate::processing::similarity::similarity_matrix;
use log::{debug, info, warn};
use ndarray::Array2;
use std::time::Instant;

/// Weighted blend of similarity and content signals.
///
/// `score * 0.5 + min(mentions * 0.1, 0.3) + min(complexity * 0.2, 0.2)`
pub fn confidence_score(score: f32, analysis: &ContentAnalysis) -> f32 {
    let mention_bonus = (analysis.skill_mentions as f32 * 0.1).min(0.3);
    let complexity_bonus = (analysis.complexity_score * 0.2).min(0.2);
    score * 0.5 + mention_bonus + complexity_bonus
}

#[derive(Debug, Clone, Copy)]
pub struct RankOptions {
    pub top_n: usize,
    /// Inclusive lower bound on the raw similarity score
    pub threshold: f32,
    pub cache_course_analysis: bool,
}

/// Per-course profiles, built on first use for the duration of one ranking
struct ProfileCache<'a> {
    analyzer: &'a ContentAnalyzer,
    profiles: Vec<Option<Option<CourseProfile>>>,
    enabled: bool,
}

impl<'a> ProfileCache<'a> {
    fn new(analyzer: &'a ContentAnalyzer, course_count: usize, enabled: bool) -> Self {
        Self {
            analyzer,
            profiles: vec![None; course_count],
            enabled,
        }
    }

    fn build(&self, course: &Course) -> Option<CourseProfile> {
        match self.analyzer.profile(&course.analysis_text()) {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!("Content analysis failed for '{}': {}", course.title, e);
                None
            }
        }
    }

    /// Analysis of one pair; a failed profile yields the empty analysis
    fn analysis(&mut self, index: usize, course: &Course, skill: &str) -> ContentAnalysis {
        let profile = if self.enabled {
            if self.profiles[index].is_none() {
                self.profiles[index] = Some(self.build(course));
            }
            self.profiles[index].clone().flatten()
        } else {
            self.build(course)
        };

        profile.map(|p| p.analysis_for(skill)).unwrap_or_default()
    }
}

/// Turn a skills × courses score matrix into per-skill ranked matches.
///
/// Pairs scoring below the threshold are dropped. The rest are analyzed,
/// labelled by confidence, sorted by raw score (stable, descending), and
/// truncated to `top_n`. One result per skill, in skill order.
pub fn rank(
    skills: &[String],
    courses: &[Course],
    scores: &Array2<f32>,
    options: RankOptions,
    analyzer: &ContentAnalyzer,
) -> Result<Vec<SkillResult>> {
    if scores.dim() != (skills.len(), courses.len()) {
        return Err(CourseMatchError::InvalidInput(format!(
            "Score matrix is {:?} but there are {} skills and {} courses",
            scores.dim(),
            skills.len(),
            courses.len()
        )));
    }

    let mut cache = ProfileCache::new(analyzer, courses.len(), options.cache_course_analysis);
    let mut results = Vec::with_capacity(skills.len());

    for (i, skill) in skills.iter().enumerate() {
        let mut matches = Vec::new();

        for (j, course) in courses.iter().enumerate() {
            let score = scores[[i, j]];
            // NaN on either side keeps nothing
            if !(score >= options.threshold) {
                continue;
            }

            let analysis = cache.analysis(j, course, skill);
            let confidence = confidence_score(score, &analysis);

            matches.push(Match {
                course_title: course.title.clone(),
                score,
                confidence_label: ConfidenceLabel::from_score(confidence),
                analysis,
                description: course.description.clone(),
            });
        }

        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        matches.truncate(options.top_n);

        debug!("Skill '{}': {} matching courses", skill, matches.len());
        results.push(SkillResult {
            skill: skill.clone(),
            matching_courses: matches,
        });
    }

    Ok(results)
}

/// Owns the encoder and the linguistic pipeline for a matching session
pub struct CourseSkillMatcher {
    encoder: Box<dyn Encoder>,
    enricher: SkillEnricher,
    analyzer: ContentAnalyzer,
    cache_course_analysis: bool,
}

impl CourseSkillMatcher {
    /// Build every resource named by the configuration. Any missing model,
    /// lexicon, or gazetteer is an error here rather than during matching.
    pub fn from_config(config: &Config) -> Result<Self> {
        let encoder: Box<dyn Encoder> = match config.matching.strategy {
            MatchStrategy::Embedding => {
                let source = resolve_model_source(config.models_dir(), &config.models.embedding_model);
                match &source {
                    ModelSource::Local(path) => info!("Using local model at {}", path.display()),
                    ModelSource::Hub(repo_id) => info!("Using model {} from the Hugging Face Hub", repo_id),
                }
                let encoder = Model2VecEncoder::load(
                    &source.location(),
                    &config.models.embedding_model,
                    config.models.batch_size,
                )?;
                Box::new(encoder.with_progress(true))
            }
            MatchStrategy::Lexical => {
                info!("Using hashing encoder ({} dimensions)", config.models.hashing_dimension);
                Box::new(HashingEncoder::new(config.models.hashing_dimension))
            }
        };

        let mut lexicon = Lexicon::builtin();
        if let Some(path) = &config.analysis.lexicon_path {
            let synsets = Lexicon::load_file(path)?;
            info!("Loaded {} synsets from {}", synsets.len(), path.display());
            lexicon.extend(synsets);
        }

        let recognizer = match &config.analysis.gazetteer_path {
            Some(path) => {
                let mut entries = EntityRecognizer::builtin()?.entries().to_vec();
                let extra = EntityRecognizer::load_file(path)?;
                info!("Loaded {} gazetteer entries from {}", extra.len(), path.display());
                entries.extend(extra);
                EntityRecognizer::with_entries(entries)?
            }
            None => EntityRecognizer::builtin()?,
        };

        Ok(Self::with_components(
            encoder,
            SkillEnricher::new(lexicon, Lemmatizer::new()),
            ContentAnalyzer::new(recognizer),
        )
        .with_course_cache(config.analysis.cache_course_analysis))
    }

    pub fn with_components(encoder: Box<dyn Encoder>, enricher: SkillEnricher, analyzer: ContentAnalyzer) -> Self {
        Self {
            encoder,
            enricher,
            analyzer,
            cache_course_analysis: true,
        }
    }

    pub fn with_course_cache(mut self, enabled: bool) -> Self {
        self.cache_course_analysis = enabled;
        self
    }

    pub fn encoder_name(&self) -> &str {
        self.encoder.name()
    }

    /// Rank courses for every skill.
    ///
    /// Encodes all course texts in one call and all enriched skills in one
    /// call, then scores and ranks. Empty skills give an empty result; empty
    /// courses give one empty result per skill.
    pub fn find_best_courses(
        &self,
        courses: &[Course],
        skills: &[String],
        top_n: usize,
        threshold: f32,
    ) -> Result<Vec<SkillResult>> {
        let start_time = Instant::now();

        if skills.is_empty() {
            return Ok(Vec::new());
        }

        if courses.is_empty() {
            warn!("No courses to match against");
            return Ok(skills
                .iter()
                .map(|skill| SkillResult {
                    skill: skill.clone(),
                    matching_courses: Vec::new(),
                })
                .collect());
        }

        info!("Encoding {} courses with {}", courses.len(), self.encoder.name());
        let course_texts: Vec<String> = courses.iter().map(Course::combined_text).collect();
        let course_vectors = self.encoder.encode(&course_texts)?;

        let enriched = self.enricher.enrich(skills);
        for (skill, text) in skills.iter().zip(&enriched) {
            debug!("Enriched '{}' -> '{}'", skill, text);
        }
        info!("Encoding {} enriched skills", enriched.len());
        let skill_vectors = self.encoder.encode(&enriched)?;

        if course_vectors.len() != courses.len() || skill_vectors.len() != skills.len() {
            return Err(CourseMatchError::Embedding(format!(
                "Encoder {} returned the wrong number of vectors",
                self.encoder.name()
            )));
        }

        let scores = similarity_matrix(&skill_vectors, &course_vectors)?;

        let options = RankOptions {
            top_n,
            threshold,
            cache_course_analysis: self.cache_course_analysis,
        };
        let results = rank(skills, courses, &scores, options, &self.analyzer)?;

        info!(
            "Matched {} skills against {} courses in {:.2?}",
            skills.len(),
            courses.len(),
            start_time.elapsed()
        );
        Ok(results)
    }
}
