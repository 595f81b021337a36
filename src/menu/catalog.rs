//! Collaborators the menus read from: the applications folder and the model
//! catalog.

use crate::error::{PortalError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Directory listing over the applications root.
pub trait DirectoryLister {
    /// Names (not paths) of the entries directly under `path`.
    fn list_entries(&self, path: &Path) -> Result<Vec<String>>;

    fn is_dir(&self, path: &Path) -> bool;
}

/// Local filesystem lister.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list_entries(&self, path: &Path) -> Result<Vec<String>> {
        let entries = fs::read_dir(path).map_err(|e| PortalError::io(path, e))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| PortalError::io(path, e))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// One row of the catalog's model table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRow {
    pub model_key: String,
    pub model_desc: String,
}

/// Source of model sessions. Each session is opened for a single query and
/// released when dropped, including on error paths.
pub trait ModelCatalog {
    fn open_session(&self) -> Result<Box<dyn CatalogSession + '_>>;
}

pub trait CatalogSession {
    fn models(&mut self) -> Result<Vec<ModelRow>>;
}

/// Catalog with a fixed model table, loaded from configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaticCatalog {
    #[serde(default)]
    pub models: Vec<ModelRow>,
}

impl StaticCatalog {
    pub fn new(models: Vec<ModelRow>) -> Self {
        Self { models }
    }
}

struct StaticSession<'a> {
    rows: &'a [ModelRow],
}

impl ModelCatalog for StaticCatalog {
    fn open_session(&self) -> Result<Box<dyn CatalogSession + '_>> {
        tracing::trace!(models = self.models.len(), "catalog session opened");
        Ok(Box::new(StaticSession { rows: &self.models }))
    }
}

impl CatalogSession for StaticSession<'_> {
    fn models(&mut self) -> Result<Vec<ModelRow>> {
        Ok(self.rows.to_vec())
    }
}

impl Drop for StaticSession<'_> {
    fn drop(&mut self) {
        tracing::trace!("catalog session released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fs_lister_returns_names_and_dir_flag() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("poliblogs")).unwrap();
        fs::write(dir.path().join("README"), "x").unwrap();

        let mut names = FsLister.list_entries(dir.path()).unwrap();
        names.sort();
        assert_eq!(names, vec!["README".to_string(), "poliblogs".to_string()]);
        assert!(FsLister.is_dir(&dir.path().join("poliblogs")));
        assert!(!FsLister.is_dir(&dir.path().join("README")));
    }

    #[test]
    fn fs_lister_reports_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let err = FsLister.list_entries(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, PortalError::Io { .. }));
    }

    #[test]
    fn static_catalog_serves_rows_in_order() {
        let catalog = StaticCatalog::new(vec![
            ModelRow { model_key: "lda".into(), model_desc: "LDA".into() },
            ModelRow { model_key: "corpus".into(), model_desc: "Corpus".into() },
        ]);
        let rows = catalog.open_session().unwrap().models().unwrap();
        assert_eq!(rows[0].model_key, "lda");
        assert_eq!(rows[1].model_key, "corpus");
    }
}
