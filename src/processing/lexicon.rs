//! Synonym knowledge base used to expand skill phrases
//!
//! Synonym sets follow WordNet conventions: each set lists lemma names with
//! underscores joining multi-word terms (`machine_learning`). A word can belong
//! to several sets; looking it up yields the lemma names of all of them.
//!
//! The built-in table covers common senses of career and course vocabulary.
//! A fuller table, such as one exported from WordNet, can be layered on top
//! through `analysis.lexicon_path` as a TOML file:
//!
//! ```toml
//! synsets = [
//!     ["learning", "acquisition"],
//!     ["eruditeness", "erudition", "learnedness", "learning", "scholarship"],
//! ]
//! ```

use crate::error::{CourseMatchError, Result};
use crate::processing::lemmatizer::Lemmatizer;
use crate::processing::text_processor::trim_punctuation;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Built-in synonym sets for computing and career vocabulary
pub static BUILTIN_SYNSETS: &[&[&str]] = &[
    // General computing
    &["computer", "computing_machine", "computing_device", "data_processor", "electronic_computer", "information_processing_system"],
    &["programming", "programing", "computer_programming", "computer_programing"],
    &["programming", "programing", "scheduling"],
    &["software", "software_system", "software_package", "package"],
    &["system", "scheme"],
    &["system", "organization", "organisation"],
    &["logic", "logical_system", "system_of_logic"],
    &["theory", "hypothesis", "possibility"],
    &["structure", "construction"],
    &["graphics", "computer_graphics"],
    &["graph", "graphical_record"],
    &["algorithm", "algorithmic_rule", "algorithmic_program"],
    &["data", "information"],
    &["database", "db", "data_store"],
    &["data_structure", "data_type"],
    &["string", "character_string"],
    &["library", "software_library", "package"],
    &["framework", "software_framework"],
    &["api", "application_programming_interface"],
    &["version_control", "source_control", "revision_control"],
    &["git", "version_control"],
    &["scripting", "scripting_language"],

    // AI and data science
    &["artificial_intelligence", "ai", "machine_intelligence"],
    &["machine_learning", "ml", "statistical_learning"],
    &["deep_learning", "deep_structured_learning"],
    &["neural_network", "neural_net", "artificial_neural_network"],
    &["learning", "acquisition"],
    &["eruditeness", "erudition", "learnedness", "learning", "scholarship", "encyclopedism", "encyclopaedism"],
    &["skill", "accomplishment", "acquirement", "acquisition", "attainment"],
    &["skill", "science"],
    &["intelligence", "intelligence_information"],
    &["intelligence", "intelligence_service", "intelligence_agency"],
    &["language", "linguistic_communication"],
    &["language", "terminology", "nomenclature"],
    &["programming_language", "programing_language"],
    &["datum", "data_point", "data"],
    &["analysis", "analytic_thinking"],
    &["analysis", "depth_psychology", "psychoanalysis"],
    &["visualization", "visualisation", "visual_image"],
    &["optimization", "optimisation", "optimality"],
    &["vision", "sight", "visual_sense", "visual_modality"],
    &["computer_vision", "cv", "machine_vision"],
    &["natural_language_processing", "nlp", "computational_linguistics"],
    &["reinforcement_learning", "rl"],
    &["generative_ai", "genai", "generative_artificial_intelligence"],
    &["llm", "large_language_model"],
    &["prompt_engineering", "prompt_design"],
    &["model", "theoretical_account", "framework"],
    &["training", "preparation", "grooming"],
    &["evaluation", "rating", "valuation", "assessment"],
    &["preprocessing", "data_preparation"],
    &["cleaning", "cleansing", "data_cleaning"],

    // Mathematics
    &["mathematics", "math", "maths"],
    &["statistics", "stats", "statistical_method"],
    &["probability", "chance"],
    &["calculus", "infinitesimal_calculus"],
    &["linear_algebra", "matrix_algebra"],

    // Security
    &["security", "protection"],
    &["cybersecurity", "cyber_security", "computer_security", "information_security"],
    &["cryptography", "cryptology", "cryptanalysis"],
    &["ethical_hacking", "penetration_testing", "pentesting"],
    &["hacking", "cracking"],
    &["authentication", "authentification", "certification"],
    &["network", "net", "web"],
    &["network", "electronic_network"],
    &["network", "meshwork", "mesh", "reticulation"],
    &["network", "network_topology", "topology"],
    &["security", "security_system", "security_measure"],
    &["security", "certificate"],
    &["security", "surety"],

    // Web and frontend
    &["web", "world_wide_web", "www", "net"],
    &["javascript", "js", "ecmascript"],
    &["html", "hypertext_markup_language"],
    &["css", "cascading_style_sheets"],
    &["ui", "user_interface", "interface"],
    &["ux", "user_experience"],
    &["dom", "document_object_model"],
    &["responsive_design", "adaptive_design"],
    &["event_handling", "event_processing"],
    &["design", "designing", "plan"],

    // Backend and infrastructure
    &["sql", "structured_query_language"],
    &["nosql", "non_relational_database"],
    &["cloud_computing", "cloud"],
    &["deployment", "release", "rollout"],
    &["container", "docker_container"],

    // Games and engineering
    &["game", "video_game", "computer_game"],
    &["physics", "physical_science", "natural_philosophy"],
    &["engineering", "engineering_science", "applied_science", "technology"],
    &["development", "developing"],
    &["development", "evolution"],
    &["development", "growth", "growing", "maturation", "ontogeny", "ontogenesis"],
    &["design", "blueprint", "pattern"],
    &["design", "intention", "purpose", "aim"],
    &["engineer", "applied_scientist", "technologist"],
    &["test", "trial", "run"],
    &["testing", "examination", "screening"],
    &["management", "direction"],
    &["communication", "communicating"],
    &["course", "course_of_study", "course_of_instruction", "class"],
    &["study", "survey"],
    &["robot", "automaton", "golem"],
];

/// Synonym sets indexed by member word
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    synsets: Vec<Vec<String>>,
    index: HashMap<String, Vec<usize>>,
}

#[derive(Debug, Deserialize)]
struct LexiconFile {
    synsets: Vec<Vec<String>>,
}

impl Lexicon {
    /// A lexicon with no entries: every lookup misses
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut lexicon = Self::empty();
        lexicon.extend(
            BUILTIN_SYNSETS
                .iter()
                .map(|set| set.iter().map(|s| s.to_string()).collect()),
        );
        lexicon
    }

    /// Read additional synsets from a TOML file of the form
    /// `synsets = [["a", "b"], ...]`
    pub fn load_file(path: &Path) -> Result<Vec<Vec<String>>> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CourseMatchError::Lexicon(format!("Failed to read lexicon {}: {}", path.display(), e))
        })?;
        let file: LexiconFile = toml::from_str(&content).map_err(|e| {
            CourseMatchError::Lexicon(format!("Failed to parse lexicon {}: {}", path.display(), e))
        })?;
        Ok(file.synsets)
    }

    pub fn extend<I>(&mut self, synsets: I)
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        for synset in synsets {
            let synset: Vec<String> = synset
                .into_iter()
                .map(|lemma| lemma.trim().to_lowercase())
                .filter(|lemma| !lemma.is_empty())
                .collect();
            if synset.is_empty() {
                continue;
            }

            let id = self.synsets.len();
            for lemma in &synset {
                let ids = self.index.entry(lemma.clone()).or_default();
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
            self.synsets.push(synset);
        }
    }

    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    /// Lemma names of every synset containing `word`, underscores replaced by
    /// spaces. `None` when the word is unknown.
    pub fn lookup(&self, word: &str) -> Option<Vec<String>> {
        let key = word.to_lowercase().replace(' ', "_");
        let ids = self.index.get(&key)?;

        let mut synonyms = Vec::new();
        for &id in ids {
            for lemma in &self.synsets[id] {
                let name = lemma.replace('_', " ");
                if !synonyms.contains(&name) {
                    synonyms.push(name);
                }
            }
        }
        Some(synonyms)
    }

    /// Lookup with fallbacks: the token as written, then trimmed of
    /// surrounding punctuation, then its lemma. Stops at the first hit.
    pub fn synonyms(&self, token: &str, lemmatizer: &Lemmatizer) -> Option<Vec<String>> {
        if let Some(found) = self.lookup(token) {
            return Some(found);
        }

        let trimmed = trim_punctuation(token);
        if trimmed.is_empty() {
            return None;
        }
        if trimmed != token {
            if let Some(found) = self.lookup(trimmed) {
                return Some(found);
            }
        }

        let lemma = lemmatizer.lemmatize(&trimmed.to_lowercase());
        if lemma != trimmed {
            return self.lookup(&lemma);
        }
        None
    }
}
