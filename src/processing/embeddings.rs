//! Embedding encoders: model2vec sentence embeddings and a feature-hashing fallback

use crate::error::{CourseMatchError, Result};
use crate::processing::text_processor::normalize;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use model2vec_rs::model::StaticModel;
use siphasher::sip::SipHasher13;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::time::Instant;

/// Longest input, in model tokens, fed to the static model
const MAX_TOKENS: usize = 512;

/// Maps texts to fixed-length vectors.
///
/// Implementations must be deterministic and return exactly one vector per
/// input text, in input order. Callers pass a whole batch at once.
pub trait Encoder {
    fn name(&self) -> &str;

    fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;
}

/// Static sentence-embedding model loaded through model2vec-rs
pub struct Model2VecEncoder {
    model: StaticModel,
    model_name: String,
    batch_size: usize,
    show_progress: bool,
}

impl Model2VecEncoder {
    /// Load from a local model directory or a Hugging Face repo id.
    /// Fails immediately when the model cannot be loaded.
    pub fn load(model_path: &Path, model_name: &str, batch_size: usize) -> Result<Self> {
        let start_time = Instant::now();

        info!("Loading embedding model from: {}", model_path.display());

        let model = StaticModel::from_pretrained(
            model_path,
            None, // token
            None, // normalize
            None, // subfolder
        )
        .map_err(|e| CourseMatchError::ModelLoading(format!("Failed to load {}: {}", model_name, e)))?;

        info!("Model loaded successfully in {:.2?}", start_time.elapsed());

        Ok(Self {
            model,
            model_name: model_name.to_string(),
            batch_size: batch_size.max(1),
            show_progress: false,
        })
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    fn progress_bar(&self, total: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner} Encoding [{bar:40}] {pos}/{len} texts ({elapsed})")
        {
            bar.set_style(style.progress_chars("=> "));
        }
        bar
    }
}

impl Encoder for Model2VecEncoder {
    fn name(&self) -> &str {
        &self.model_name
    }

    fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let start_time = Instant::now();
        let bar = self.progress_bar(texts.len());
        let mut embeddings = Vec::with_capacity(texts.len());

        for batch in texts.chunks(self.batch_size) {
            let batch_embeddings = self.model.encode_with_args(batch, Some(MAX_TOKENS), batch.len());
            if batch_embeddings.len() != batch.len() {
                return Err(CourseMatchError::Embedding(format!(
                    "Model returned {} vectors for {} texts",
                    batch_embeddings.len(),
                    batch.len()
                )));
            }
            embeddings.extend(batch_embeddings);
            bar.inc(batch.len() as u64);
        }

        bar.finish_and_clear();
        info!("Encoded {} texts in {:.2?}", texts.len(), start_time.elapsed());
        Ok(embeddings)
    }
}

/// Fixed seed so vectors stay stable across runs and Rust releases
const HASH_SEED_K0: u64 = 0x0123_4567_89ab_cdef;
const HASH_SEED_K1: u64 = 0xfedc_ba98_7654_3210;

/// Bag-of-words encoder using signed feature hashing.
///
/// Each normalized whitespace token adds ±1 to one bucket; the vector is then
/// L2-normalized. An empty text gives the zero vector.
pub struct HashingEncoder {
    dimension: usize,
}

impl HashingEncoder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    fn hash(&self, token: &str) -> u64 {
        let mut hasher = SipHasher13::new_with_keys(HASH_SEED_K0, HASH_SEED_K1);
        token.hash(&mut hasher);
        hasher.finish()
    }

    fn encode_one(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];

        for token in normalize(text).split_whitespace() {
            let hash = self.hash(token);
            let idx = (hash % self.dimension as u64) as usize;
            // Top bit picks the sign, independent of the bucket bits
            let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
            vector[idx] += sign;
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

impl Encoder for HashingEncoder {
    fn name(&self) -> &str {
        "hashing"
    }

    fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|text| self.encode_one(text)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_hashing_encoder_is_deterministic() {
        let encoder = HashingEncoder::new(256);
        let input = texts(&["computer vision", "network security"]);
        let first = encoder.encode(&input).unwrap();
        let second = encoder.encode(&input).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].len(), 256);
    }

    #[test]
    fn test_hashing_encoder_normalizes() {
        let encoder = HashingEncoder::new(128);
        let vector = &encoder.encode(&texts(&["Deep Learning, Deep Networks"])).unwrap()[0];
        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_hashing_encoder_empty_text_is_zero_vector() {
        let encoder = HashingEncoder::new(64);
        let vectors = encoder.encode(&texts(&["", "?!"])).unwrap();
        assert!(vectors.iter().all(|v| v.iter().all(|&x| x == 0.0)));
    }

    #[test]
    fn test_hashing_encoder_ignores_case_and_punctuation() {
        let encoder = HashingEncoder::new(512);
        let vectors = encoder.encode(&texts(&["Computer Vision!", "computer   vision"])).unwrap();
        assert_eq!(vectors[0], vectors[1]);
    }

    #[test]
    fn test_hashing_encoder_empty_batch() {
        let encoder = HashingEncoder::new(32);
        assert!(encoder.encode(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_zero_dimension_is_clamped() {
        assert_eq!(HashingEncoder::new(0).dimension(), 1);
    }

    #[test]
    fn test_missing_model_directory_fails_fast() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = Model2VecEncoder::load(dir.path(), "empty", 8);
        assert!(matches!(result, Err(CourseMatchError::ModelLoading(_))));
    }
}
