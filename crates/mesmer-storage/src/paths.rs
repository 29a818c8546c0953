//! Data-directory layout conventions.
//!
//! Pure path functions, no filesystem access. These define the canonical
//! layout under the configured data root.

use std::path::{Path, PathBuf};

use uuid::Uuid;

pub const ASSESSMENTS_DIR: &str = "assessments";

pub fn assessments_dir(root: &Path) -> PathBuf {
    root.join(ASSESSMENTS_DIR)
}

pub fn assessment(root: &Path, id: Uuid) -> PathBuf {
    assessments_dir(root).join(format!("{id}.json"))
}
