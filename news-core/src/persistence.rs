use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::article::Article;

/// A recoverable slot for the currently selected article, so a detail
/// view opened via direct link or reload can still resolve it. Strictly
/// best-effort: read and write failures are swallowed here and never
/// reach the caller.
#[async_trait]
pub trait SelectionStore: Send + Sync {
    async fn save(&self, article: &Article);
    async fn load(&self) -> Option<Article>;
}

/// Selection slot that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemorySelectionStore {
    slot: Arc<RwLock<Option<Article>>>,
}

impl MemorySelectionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SelectionStore for MemorySelectionStore {
    async fn save(&self, article: &Article) {
        *self.slot.write().await = Some(article.clone());
    }

    async fn load(&self) -> Option<Article> {
        self.slot.read().await.clone()
    }
}

/// Selection slot backed by a single JSON file, written atomically via
/// a temp file rename.
#[derive(Debug, Clone)]
pub struct FileSelectionStore {
    path: PathBuf,
}

impl FileSelectionStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl SelectionStore for FileSelectionStore {
    async fn save(&self, article: &Article) {
        let bytes = match serde_json::to_vec_pretty(article) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(%err, "failed to serialize selected article");
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            let _ = tokio::fs::create_dir_all(parent).await;
        }
        let tmp = self.path.with_extension("json.tmp");
        if let Err(err) = tokio::fs::write(&tmp, &bytes).await {
            warn!(%err, path = %tmp.display(), "failed to write selected article slot");
            return;
        }
        if let Err(err) = tokio::fs::rename(&tmp, &self.path).await {
            warn!(%err, path = %self.path.display(), "failed to persist selected article slot");
        }
    }

    async fn load(&self) -> Option<Article> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(article) => Some(article),
                Err(err) => {
                    warn!(%err, path = %self.path.display(), "selected article slot corrupted, trying tmp fallback");
                    let tmp = self.path.with_extension("json.tmp");
                    let tmp_bytes = tokio::fs::read(&tmp).await.ok()?;
                    serde_json::from_slice(&tmp_bytes).ok()
                }
            },
            Err(_) => {
                debug!(path = %self.path.display(), "no selected article slot yet");
                None
            }
        }
    }
}
