//! Rule-based English lemmatizer
//!
//! Reduces inflected words to a dictionary base form with an irregular-form
//! table, plural-noun suffix rules, and `-ing`/`-ed` stripping for a fixed set
//! of known verb bases. Output is deterministic and never fails: a word no rule
//! applies to is its own lemma.

use crate::processing::text_processor::{is_punctuation, tokenize};
use std::collections::{HashMap, HashSet};

pub struct Lemmatizer {
    irregular: HashMap<&'static str, &'static str>,
    verb_bases: HashSet<&'static str>,
    invariant: HashSet<&'static str>,
    noun_bases: HashSet<&'static str>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer {
    pub fn new() -> Self {
        Self {
            irregular: Self::irregular_forms(),
            verb_bases: Self::verb_bases(),
            invariant: Self::invariant_words(),
            noun_bases: Self::noun_bases(),
        }
    }

    /// Lemmatize every non-punctuation token of a phrase, in order
    pub fn lemmatize_phrase(&self, phrase: &str) -> Vec<String> {
        tokenize(phrase)
            .into_iter()
            .filter(|token| !is_punctuation(token))
            .map(|token| self.lemmatize(&token.to_lowercase()))
            .collect()
    }

    /// Lemma of a single lowercase word
    pub fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = self.irregular.get(word) {
            return lemma.to_string();
        }

        if self.invariant.contains(word)
            || word.chars().count() <= 3
            || !word.chars().all(char::is_alphabetic)
        {
            return word.to_string();
        }

        if let Some(verb) = self.verb_lemma(word) {
            return verb;
        }

        self.noun_lemma(word)
    }

    fn noun_lemma(&self, word: &str) -> String {
        if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
            return word.to_string();
        }

        // movies -> movie, buses -> bus
        for stem in [word.strip_suffix('s'), word.strip_suffix("es")].into_iter().flatten() {
            if self.noun_bases.contains(stem) {
                return stem.to_string();
            }
        }

        if let Some(stem) = word.strip_suffix("ies") {
            if stem.len() > 1 {
                return format!("{}y", stem);
            }
        }

        if word.ends_with("sses") {
            return word[..word.len() - 2].to_string();
        }

        for suffix in ["ches", "shes", "xes", "zes"] {
            if word.ends_with(suffix) {
                return word[..word.len() - 2].to_string();
            }
        }

        if let Some(stem) = word.strip_suffix('s') {
            return stem.to_string();
        }

        word.to_string()
    }

    /// Strip `-ing`/`-ed` only when a known verb base results
    fn verb_lemma(&self, word: &str) -> Option<String> {
        let stem = word
            .strip_suffix("ing")
            .or_else(|| word.strip_suffix("ed"))?;

        if stem.len() < 2 {
            return None;
        }

        let mut candidates = vec![stem.to_string(), format!("{}e", stem)];

        // running -> run, planned -> plan
        let bytes = stem.as_bytes();
        if bytes.len() >= 2
            && bytes[bytes.len() - 1].is_ascii()
            && bytes[bytes.len() - 1] == bytes[bytes.len() - 2]
        {
            candidates.push(stem[..stem.len() - 1].to_string());
        }

        // applied -> apply
        if let Some(root) = stem.strip_suffix('i') {
            candidates.push(format!("{}y", root));
        }

        candidates
            .into_iter()
            .find(|candidate| self.verb_bases.contains(candidate.as_str()))
    }

    fn irregular_forms() -> HashMap<&'static str, &'static str> {
        [
            ("children", "child"),
            ("people", "person"),
            ("men", "man"),
            ("women", "woman"),
            ("mice", "mouse"),
            ("indices", "index"),
            ("matrices", "matrix"),
            ("vertices", "vertex"),
            ("analyses", "analysis"),
            ("hypotheses", "hypothesis"),
            ("theses", "thesis"),
            ("criteria", "criterion"),
            ("phenomena", "phenomenon"),
            ("caches", "cache"),
            ("databases", "database"),
            ("ran", "run"),
            ("built", "build"),
            ("taught", "teach"),
            ("thought", "think"),
            ("wrote", "write"),
            ("written", "write"),
            ("made", "make"),
            ("began", "begin"),
            ("begun", "begin"),
            ("was", "be"),
            ("were", "be"),
            ("is", "be"),
            ("are", "be"),
            ("been", "be"),
            ("has", "have"),
            ("had", "have"),
            ("did", "do"),
            ("does", "do"),
            ("done", "do"),
            ("better", "well"),
            ("best", "well"),
        ]
        .into_iter()
        .collect()
    }

    fn verb_bases() -> HashSet<&'static str> {
        [
            "analyze", "apply", "build", "clean", "code", "compile", "compute",
            "cover", "debug", "deploy", "design", "develop", "engineer", "evaluate",
            "explore", "handle", "hack", "implement", "introduce", "learn", "manage",
            "manipulate", "model", "optimize", "plan", "preprocess", "process",
            "program", "render", "run", "script", "secure", "study", "test",
            "train", "use", "visualize",
        ]
        .into_iter()
        .collect()
    }

    /// Singular nouns the suffix rules would mangle: `-ie` and `-us` endings
    fn noun_bases() -> HashSet<&'static str> {
        [
            "movie", "cookie", "calorie", "zombie", "rookie", "selfie", "brownie",
            "hoodie", "genie", "pie", "tie", "lie", "die", "bus", "virus", "campus",
            "bonus", "status", "census", "corpus", "syllabus", "focus", "prospectus",
            "consensus", "apparatus", "radius", "stimulus", "nucleus",
        ]
        .into_iter()
        .collect()
    }

    /// Words that look inflected but are already base forms
    fn invariant_words() -> HashSet<&'static str> {
        [
            "physics", "mathematics", "statistics", "graphics", "robotics",
            "electronics", "economics", "linguistics", "analytics", "ethics",
            "logistics", "news", "series", "species", "data", "kubernetes",
            "pandas", "express", "numpy", "aws", "ios", "nlp", "gcp",
        ]
        .into_iter()
        .collect()
    }
}
