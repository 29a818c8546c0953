use std::io::ErrorKind;
use std::path::PathBuf;

use tokio::fs;
use uuid::Uuid;

use mesmer_core::models::assessment::Assessment;

use crate::error::StorageError;
use crate::paths;

/// File-backed assessment store rooted at the configured data directory.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Persist a scored assessment as `assessments/{id}.json`.
    pub async fn save(&self, assessment: &Assessment) -> Result<(), StorageError> {
        fs::create_dir_all(paths::assessments_dir(&self.root)).await?;
        let path = paths::assessment(&self.root, assessment.id);
        let body = serde_json::to_vec_pretty(assessment)?;
        fs::write(&path, body).await?;
        tracing::debug!(id = %assessment.id, path = %path.display(), "assessment_saved");
        Ok(())
    }

    pub async fn load(&self, id: Uuid) -> Result<Assessment, StorageError> {
        let path = paths::assessment(&self.root, id);
        let body = match fs::read(&path).await {
            Ok(body) => body,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound { id });
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&body)?)
    }

    /// List every stored assessment, most recently completed first.
    pub async fn list(&self) -> Result<Vec<Assessment>, StorageError> {
        let dir = paths::assessments_dir(&self.root);
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut assessments = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let body = fs::read(&path).await?;
            match serde_json::from_slice::<Assessment>(&body) {
                Ok(assessment) => assessments.push(assessment),
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "skipping unreadable assessment file"
                    );
                }
            }
        }

        assessments.sort_by(|a, b| b.result.completed_at.cmp(&a.result.completed_at));
        Ok(assessments)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), StorageError> {
        let path = paths::assessment(&self.root, id);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StorageError::NotFound { id }),
            Err(e) => Err(e.into()),
        }
    }
}
