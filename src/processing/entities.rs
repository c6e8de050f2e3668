//! Gazetteer-based named-entity recognition
//!
//! Entity spans come from a dictionary of labelled terms matched with
//! Aho-Corasick (case-insensitive, leftmost-longest), accepted only when they
//! line up with token boundaries. Uppercase acronyms no dictionary entry covers
//! are labelled ORG.

use crate::error::{CourseMatchError, Result};
use crate::processing::text_processor::{tokenize_with_offsets, Token};
use aho_corasick::{AhoCorasick, MatchKind};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    Tech,
    Product,
    Org,
    Language,
    Gpe,
}

impl EntityLabel {
    /// Labels that count as technical terms in content analysis
    pub fn is_technical(&self) -> bool {
        matches!(self, EntityLabel::Tech | EntityLabel::Product | EntityLabel::Org)
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityLabel::Tech => "TECH",
            EntityLabel::Product => "PRODUCT",
            EntityLabel::Org => "ORG",
            EntityLabel::Language => "LANGUAGE",
            EntityLabel::Gpe => "GPE",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GazetteerEntry {
    pub text: String,
    pub label: EntityLabel,
}

#[derive(Debug, Deserialize)]
struct GazetteerFile {
    entities: Vec<GazetteerEntry>,
}

/// Dictionary matcher producing labelled entity spans
pub struct EntityRecognizer {
    matcher: AhoCorasick,
    entries: Vec<GazetteerEntry>,
    acronym_stoplist: HashSet<&'static str>,
}

impl EntityRecognizer {
    pub fn builtin() -> Result<Self> {
        Self::with_entries(Self::default_gazetteer())
    }

    /// Build a recognizer over the given entries. Later entries with the same
    /// text (ignoring case) replace earlier ones.
    pub fn with_entries(entries: Vec<GazetteerEntry>) -> Result<Self> {
        let mut by_text: HashMap<String, usize> = HashMap::new();
        let mut unique: Vec<GazetteerEntry> = Vec::new();

        for entry in entries {
            let key = entry.text.trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            match by_text.get(&key) {
                Some(&idx) => unique[idx].label = entry.label,
                None => {
                    by_text.insert(key.clone(), unique.len());
                    unique.push(GazetteerEntry { text: key, label: entry.label });
                }
            }
        }

        // Prefer longer matches, like the ATS skill matcher
        let patterns: Vec<&str> = unique.iter().map(|e| e.text.as_str()).collect();
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)
            .map_err(|e| CourseMatchError::Analysis(format!("Failed to build entity matcher: {}", e)))?;

        Ok(Self {
            matcher,
            entries: unique,
            acronym_stoplist: Self::acronym_stoplist(),
        })
    }

    /// Read gazetteer entries from a TOML file of `[[entities]]` tables
    pub fn load_file(path: &Path) -> Result<Vec<GazetteerEntry>> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CourseMatchError::Analysis(format!("Failed to read gazetteer {}: {}", path.display(), e))
        })?;
        let file: GazetteerFile = toml::from_str(&content).map_err(|e| {
            CourseMatchError::Analysis(format!("Failed to parse gazetteer {}: {}", path.display(), e))
        })?;
        Ok(file.entities)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[GazetteerEntry] {
        &self.entries
    }

    /// Recognize entities in `text`, ordered by position
    pub fn recognize(&self, text: &str) -> Result<Vec<Entity>> {
        let tokens = tokenize_with_offsets(text);
        self.recognize_tokens(text, &tokens)
    }

    /// Same as [`recognize`](Self::recognize) over an existing tokenization
    pub fn recognize_tokens(&self, text: &str, tokens: &[Token<'_>]) -> Result<Vec<Entity>> {
        let starts: HashSet<usize> = tokens.iter().map(|t| t.start).collect();
        let ends: HashSet<usize> = tokens.iter().map(|t| t.end).collect();

        let mut entities = Vec::new();
        let found = self
            .matcher
            .try_find_iter(text)
            .map_err(|e| CourseMatchError::Analysis(format!("Entity search failed: {}", e)))?;

        for mat in found {
            if !starts.contains(&mat.start()) || !ends.contains(&mat.end()) {
                continue;
            }
            let surface = &text[mat.start()..mat.end()];
            let entry = &self.entries[mat.pattern().as_usize()];
            if !Self::casing_accepted(surface, &entry.text) {
                continue;
            }
            entities.push(Entity {
                text: surface.to_string(),
                label: entry.label,
                start: mat.start(),
                end: mat.end(),
            });
        }

        for token in tokens {
            let covered = entities
                .iter()
                .any(|e| token.start < e.end && e.start < token.end);
            if !covered && self.is_acronym(token.text) {
                entities.push(Entity {
                    text: token.text.to_string(),
                    label: EntityLabel::Org,
                    start: token.start,
                    end: token.end,
                });
            }
        }

        entities.sort_by_key(|e| e.start);
        Ok(entities)
    }

    /// An all-lowercase surface form only counts for entries that carry
    /// digits or symbols (`node.js`, `c++`); plain words such as "react" or
    /// "unity" need capitalization to be read as names.
    fn casing_accepted(surface: &str, entry: &str) -> bool {
        let has_upper = surface.chars().any(char::is_uppercase);
        let distinctive = entry.chars().any(|c| !c.is_alphabetic() && !c.is_whitespace());
        has_upper || distinctive
    }

    fn is_acronym(&self, token: &str) -> bool {
        let len = token.chars().count();
        (2..=6).contains(&len)
            && token.chars().all(|c| c.is_ascii_uppercase())
            && !self.acronym_stoplist.contains(token)
            && !Self::is_roman_numeral(token)
    }

    fn is_roman_numeral(token: &str) -> bool {
        token.chars().all(|c| matches!(c, 'I' | 'V' | 'X' | 'L' | 'C' | 'D' | 'M'))
    }

    /// Recognizer whose searches all fail: the automaton supports only
    /// anchored searches and recognition runs unanchored
    #[cfg(test)]
    pub(crate) fn failing() -> Self {
        let matcher = AhoCorasick::builder()
            .start_kind(aho_corasick::StartKind::Anchored)
            .build(["python"])
            .unwrap();
        Self {
            matcher,
            entries: vec![GazetteerEntry {
                text: "python".to_string(),
                label: EntityLabel::Tech,
            }],
            acronym_stoplist: Self::acronym_stoplist(),
        }
    }

    fn acronym_stoplist() -> HashSet<&'static str> {
        [
            "A", "AN", "AND", "AS", "AT", "BY", "FOR", "FROM", "IN", "INTO", "IS",
            "OF", "ON", "OR", "THE", "TO", "WITH", "NOT", "ALL", "TBA", "TBD",
            "PM", "AM", "ID", "OK",
        ]
        .into_iter()
        .collect()
    }

    fn default_gazetteer() -> Vec<GazetteerEntry> {
        let groups: [(EntityLabel, &[&str]); 5] = [
            (
                EntityLabel::Tech,
                &[
                    "Python", "Java", "JavaScript", "TypeScript", "C++", "C#", "Rust",
                    "Kotlin", "Swift", "Scala", "Haskell", "Prolog", "Lisp", "Fortran",
                    "COBOL", "Perl", "Ruby", "PHP", "SQL", "NoSQL", "HTML", "CSS",
                    "HTML5", "React", "Angular", "Vue", "Node.js", "Django", "Flask",
                    "FastAPI", "Spring Boot", "TensorFlow", "PyTorch", "Keras",
                    "Scikit-learn", "Pandas", "NumPy", "SciPy", "Matplotlib",
                    "Seaborn", "Docker", "Kubernetes", "Git", "Linux", "Unix",
                    "Hadoop", "Apache Spark", "OpenGL", "Vulkan", "CUDA", "MPI",
                    "OpenMP", "Verilog", "VHDL", "LaTeX", "TCP/IP", "HTTP",
                    "GraphQL", "MongoDB", "PostgreSQL", "MySQL", "SQLite", "Redis",
                    "WebGL", "Assembly",
                ],
            ),
            (
                EntityLabel::Product,
                &[
                    "MATLAB", "Mathematica", "Excel", "Windows", "macOS", "Android",
                    "iOS", "Unity", "Unreal Engine", "Godot", "Photoshop", "Figma",
                    "ChatGPT", "Arduino", "Raspberry Pi", "Azure", "Tableau",
                    "Jupyter", "Visual Studio", "Eclipse", "Xcode", "Simulink",
                ],
            ),
            (
                EntityLabel::Org,
                &[
                    "Amazon Web Services", "AWS", "Google", "Google Cloud Platform",
                    "GCP", "Microsoft", "Amazon", "IBM", "NVIDIA", "Apple", "Intel",
                    "OpenAI", "Cisco", "Oracle", "GitHub", "IEEE", "ACM",
                    "NASA", "MIT", "NSF",
                ],
            ),
            (
                EntityLabel::Language,
                &["English", "Spanish", "French", "German", "Chinese", "Japanese", "Arabic", "Latin"],
            ),
            (
                EntityLabel::Gpe,
                &[
                    "United States", "New York", "New Jersey", "Boston", "Cambridge",
                    "California", "Massachusetts", "Washington", "Europe", "Asia",
                ],
            ),
        ];

        groups
            .iter()
            .flat_map(|(label, terms)| {
                terms.iter().map(move |term| GazetteerEntry {
                    text: term.to_string(),
                    label: *label,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn texts(entities: &[Entity]) -> Vec<&str> {
        entities.iter().map(|e| e.text.as_str()).collect()
    }

    #[test]
    fn test_recognizes_technologies_products_and_orgs() {
        let recognizer = EntityRecognizer::builtin().unwrap();
        let entities = recognizer
            .recognize("Build models in Python with TensorFlow on AWS and MATLAB.")
            .unwrap();

        assert_eq!(texts(&entities), vec!["Python", "TensorFlow", "AWS", "MATLAB"]);
        assert_eq!(entities[0].label, EntityLabel::Tech);
        assert_eq!(entities[2].label, EntityLabel::Org);
        assert_eq!(entities[3].label, EntityLabel::Product);
    }

    #[test]
    fn test_prefers_longest_match() {
        let recognizer = EntityRecognizer::builtin().unwrap();
        let entities = recognizer.recognize("Scripting in JavaScript and Java").unwrap();
        assert_eq!(texts(&entities), vec!["JavaScript", "Java"]);
    }

    #[test]
    fn test_requires_token_boundaries() {
        let recognizer = EntityRecognizer::builtin().unwrap();
        let entities = recognizer.recognize("Javanese culture and Gitlab").unwrap();
        assert!(entities.is_empty());
    }

    #[test]
    fn test_lowercase_plain_words_are_not_names() {
        let recognizer = EntityRecognizer::builtin().unwrap();
        let entities = recognizer.recognize("how systems react to unity of purpose").unwrap();
        assert!(entities.is_empty());

        let entities = recognizer.recognize("servers written in node.js").unwrap();
        assert_eq!(texts(&entities), vec!["node.js"]);
    }

    #[test]
    fn test_unknown_acronyms_are_orgs() {
        let recognizer = EntityRecognizer::builtin().unwrap();
        let entities = recognizer.recognize("Topics in GPU and FPGA design, Calculus II, INTRO TO CS").unwrap();
        assert_eq!(texts(&entities), vec!["GPU", "FPGA", "INTRO", "CS"]);
        assert!(entities.iter().all(|e| e.label == EntityLabel::Org));
    }

    #[test]
    fn test_language_and_places_are_not_technical() {
        let recognizer = EntityRecognizer::builtin().unwrap();
        let entities = recognizer.recognize("Taught in English in Boston").unwrap();
        assert_eq!(entities.len(), 2);
        assert!(entities.iter().all(|e| !e.label.is_technical()));
    }

    #[test]
    fn test_duplicates_are_reported_each_time() {
        let recognizer = EntityRecognizer::builtin().unwrap();
        let entities = recognizer.recognize("Python basics. Advanced Python.").unwrap();
        assert_eq!(texts(&entities), vec!["Python", "Python"]);
    }

    #[test]
    fn test_gazetteer_file_extends_entries() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[[entities]]\ntext = \"Zig\"\nlabel = \"TECH\"").unwrap();

        let mut entries = EntityRecognizer::default_gazetteer();
        let base = EntityRecognizer::with_entries(entries.clone()).unwrap().entry_count();
        entries.extend(EntityRecognizer::load_file(file.path()).unwrap());
        let recognizer = EntityRecognizer::with_entries(entries).unwrap();

        assert_eq!(recognizer.entry_count(), base + 1);
        let entities = recognizer.recognize("Systems programming in Zig").unwrap();
        assert_eq!(texts(&entities), vec!["Zig"]);
    }

    #[test]
    fn test_empty_text_has_no_entities() {
        let recognizer = EntityRecognizer::builtin().unwrap();
        assert!(recognizer.recognize("").unwrap().is_empty());
    }
}
