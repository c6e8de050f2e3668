//! Skill enrichment: expand a short skill phrase into a bag of related terms

use crate::processing::lemmatizer::Lemmatizer;
use crate::processing::lexicon::Lexicon;
use log::debug;
use std::collections::HashSet;

pub struct SkillEnricher {
    lexicon: Lexicon,
    lemmatizer: Lemmatizer,
}

impl SkillEnricher {
    pub fn new(lexicon: Lexicon, lemmatizer: Lemmatizer) -> Self {
        Self { lexicon, lemmatizer }
    }

    /// One enriched string per skill, same length and order as the input
    pub fn enrich(&self, skills: &[String]) -> Vec<String> {
        skills.iter().map(|skill| self.enrich_skill(skill)).collect()
    }

    /// Lowercased phrase, then synonyms of each whitespace token, then lemmas
    /// of the phrase; duplicates are dropped, first occurrence wins.
    pub fn enrich_skill(&self, skill: &str) -> String {
        let phrase = skill.to_lowercase();
        let mut seen = HashSet::new();
        let mut terms = Vec::new();

        let mut add = |term: String| {
            if !term.is_empty() && seen.insert(term.clone()) {
                terms.push(term);
            }
        };

        add(phrase.clone());

        for word in phrase.split_whitespace() {
            match self.lexicon.synonyms(word, &self.lemmatizer) {
                Some(synonyms) => synonyms.into_iter().for_each(&mut add),
                None => debug!("No synonyms for '{}'", word),
            }
        }

        for lemma in self.lemmatizer.lemmatize_phrase(&phrase) {
            add(lemma);
        }

        terms.join(" ")
    }
}
