//! Registry of model2vec embedding models: download, caching, and resolution

use crate::error::{CourseMatchError, Result};
use hf_hub::api::tokio::Api;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Files model2vec-rs needs to load a model from a local directory
const REQUIRED_FILES: [&str; 3] = ["model.safetensors", "tokenizer.json", "config.json"];
const OPTIONAL_FILES: [&str; 1] = ["README.md"];

/// Information about an available embedding model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingModelInfo {
    pub name: String,
    pub repo_id: String,
    pub size_mb: u64,
    pub description: String,
    pub dimensions: u32,
}

/// Where the matcher should load a model from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// A directory holding the model files
    Local(PathBuf),
    /// A Hugging Face repo id, fetched by model2vec-rs on load
    Hub(String),
}

impl ModelSource {
    pub fn location(&self) -> PathBuf {
        match self {
            ModelSource::Local(path) => path.clone(),
            ModelSource::Hub(repo_id) => PathBuf::from(repo_id),
        }
    }
}

fn builtin_models() -> BTreeMap<String, EmbeddingModelInfo> {
    let mut models = BTreeMap::new();

    models.insert(
        "potion-base-8M".to_string(),
        EmbeddingModelInfo {
            name: "Potion Base 8M".to_string(),
            repo_id: "minishlab/potion-base-8M".to_string(),
            size_mb: 30,
            description: "General-purpose static embeddings, recommended default".to_string(),
            dimensions: 256,
        },
    );
    models.insert(
        "potion-base-4M".to_string(),
        EmbeddingModelInfo {
            name: "Potion Base 4M".to_string(),
            repo_id: "minishlab/potion-base-4M".to_string(),
            size_mb: 15,
            description: "Smaller potion model for constrained machines".to_string(),
            dimensions: 128,
        },
    );
    models.insert(
        "m2v-base".to_string(),
        EmbeddingModelInfo {
            name: "Model2Vec Base".to_string(),
            repo_id: "minishlab/M2V_base_output".to_string(),
            size_mb: 90,
            description: "Model2Vec distillation of bge-base".to_string(),
            dimensions: 256,
        },
    );

    models
}

/// Whether `path` holds every file a local model load needs
pub fn is_model_directory(path: &Path) -> bool {
    path.is_dir() && REQUIRED_FILES.iter().all(|file| path.join(file).is_file())
}

/// Manager for embedding models: registry lookup, download, and local cache
pub struct EmbeddingModelManager {
    models_dir: PathBuf,
    available_models: BTreeMap<String, EmbeddingModelInfo>,
    downloaded_models: HashSet<String>,
}

impl EmbeddingModelManager {
    pub async fn new(models_dir: PathBuf) -> Result<Self> {
        if !models_dir.exists() {
            fs::create_dir_all(&models_dir).await.map_err(|e| {
                CourseMatchError::ModelLoading(format!("Failed to create models directory: {}", e))
            })?;
        }

        let mut manager = Self {
            models_dir,
            available_models: builtin_models(),
            downloaded_models: HashSet::new(),
        };
        manager.scan_downloaded_models().await?;

        Ok(manager)
    }

    async fn scan_downloaded_models(&mut self) -> Result<()> {
        let mut entries = fs::read_dir(&self.models_dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let model_id = entry.file_name().to_string_lossy().to_string();
            if self.available_models.contains_key(&model_id) && is_model_directory(&entry.path()) {
                self.downloaded_models.insert(model_id);
            }
        }

        Ok(())
    }

    /// Download a registry model into `<models_dir>/<id>`.
    /// An already downloaded model is only fetched again with `force`.
    pub async fn download_model(&mut self, model_id: &str, force: bool) -> Result<PathBuf> {
        let resolved = self
            .resolve_model_id(model_id)
            .ok_or_else(|| CourseMatchError::ModelNotFound(format!("Unknown embedding model: {}", model_id)))?;
        let model_info = self.available_models[&resolved].clone();
        let model_dir = self.models_dir.join(&resolved);

        if self.downloaded_models.contains(&resolved) && !force {
            info!("Model {} already present at {}", resolved, model_dir.display());
            return Ok(model_dir);
        }

        info!("Downloading {} (~{} MB) from {}", model_info.name, model_info.size_mb, model_info.repo_id);

        fs::create_dir_all(&model_dir).await?;

        let api = Api::new().map_err(|e| CourseMatchError::Network(format!("Failed to initialize HF API: {}", e)))?;
        let repo = api.model(model_info.repo_id.clone());

        for file in REQUIRED_FILES {
            let cached = repo
                .get(file)
                .await
                .map_err(|e| CourseMatchError::Network(format!("Failed to download required file {}: {}", file, e)))?;
            fs::copy(&cached, model_dir.join(file)).await?;
            info!("  downloaded {}", file);
        }

        for file in OPTIONAL_FILES {
            match repo.get(file).await {
                Ok(cached) => {
                    fs::copy(&cached, model_dir.join(file)).await?;
                }
                Err(e) => warn!("Optional file {} not available: {}", file, e),
            }
        }

        self.downloaded_models.insert(resolved);
        Ok(model_dir)
    }

    pub fn get_model_path(&self, model_id: &str) -> Option<PathBuf> {
        let resolved = self.resolve_model_id(model_id)?;
        self.downloaded_models
            .contains(&resolved)
            .then(|| self.models_dir.join(resolved))
    }

    pub async fn ensure_model_available(&mut self, model_id: &str) -> Result<PathBuf> {
        if let Some(path) = self.get_model_path(model_id) {
            return Ok(path);
        }
        self.download_model(model_id, false).await
    }

    /// Registry entries sorted by id
    pub fn list_available_models(&self) -> Vec<(&str, &EmbeddingModelInfo)> {
        self.available_models.iter().map(|(id, info)| (id.as_str(), info)).collect()
    }

    pub fn list_downloaded_models(&self) -> Vec<String> {
        let mut models: Vec<String> = self.downloaded_models.iter().cloned().collect();
        models.sort();
        models
    }

    pub fn get_model_info(&self, model_id: &str) -> Option<&EmbeddingModelInfo> {
        let resolved = self.resolve_model_id(model_id)?;
        self.available_models.get(&resolved)
    }

    pub fn is_model_downloaded(&self, model_id: &str) -> bool {
        self.get_model_path(model_id).is_some()
    }

    /// Resolve a registry id, repo id, or display name (case-insensitive)
    pub fn resolve_model_id(&self, input: &str) -> Option<String> {
        resolve_in(&self.available_models, input)
    }

    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }
}

fn resolve_in(models: &BTreeMap<String, EmbeddingModelInfo>, input: &str) -> Option<String> {
    if models.contains_key(input) {
        return Some(input.to_string());
    }

    let input_lower = input.to_lowercase();
    models
        .iter()
        .find(|(id, info)| {
            info.repo_id.to_lowercase() == input_lower
                || info.name.to_lowercase() == input_lower
                || id.to_lowercase() == input_lower
        })
        .map(|(id, _)| id.clone())
}

/// Decide where a configured model name should be loaded from.
///
/// Order: an existing model directory given as a path, a downloaded registry
/// model under `models_dir`, then the name as a Hugging Face repo id (registry
/// aliases map to their repo id).
pub fn resolve_model_source(models_dir: &Path, model: &str) -> ModelSource {
    let as_path = Path::new(model);
    if is_model_directory(as_path) {
        return ModelSource::Local(as_path.to_path_buf());
    }

    let models = builtin_models();
    match resolve_in(&models, model) {
        Some(id) => {
            let local = models_dir.join(&id);
            if is_model_directory(&local) {
                ModelSource::Local(local)
            } else {
                ModelSource::Hub(models[&id].repo_id.clone())
            }
        }
        None => ModelSource::Hub(model.to_string()),
    }
}
