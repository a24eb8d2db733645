use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use stable_core::{AchievementCatalog, CatalogError, CatalogSource, StableSession};

/// Achievement catalog stored as a JSON array on disk.
#[derive(Debug, Clone)]
pub struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for CatalogFile {
    type Error = CatalogError;

    fn load_catalog(&self) -> Result<AchievementCatalog, Self::Error> {
        let json = fs::read_to_string(&self.path)?;
        AchievementCatalog::from_json(&json)
    }
}

/// Inputs shared by every scenario run.
#[derive(Debug, Clone, Default)]
pub struct TesterAssets {
    pub extra_catalog: Option<AchievementCatalog>,
}

impl TesterAssets {
    pub fn load(achievements: Option<&Path>) -> Result<Self> {
        let Some(path) = achievements else {
            return Ok(Self::default());
        };
        let catalog = CatalogFile::new(path)
            .load_catalog()
            .with_context(|| format!("failed to load achievements from {}", path.display()))?;
        log::info!(
            "loaded {} achievement definitions from {}",
            catalog.len(),
            path.display()
        );
        Ok(Self {
            extra_catalog: Some(catalog),
        })
    }

    /// Fresh session with the extra catalog applied.
    pub fn new_session(&self) -> StableSession {
        match &self.extra_catalog {
            Some(catalog) => match StableSession::with_catalog(catalog) {
                Ok(session) => session,
                Err(never) => match never {},
            },
            None => StableSession::new(),
        }
    }

    /// Number of definitions the session catalog should hold.
    pub fn expected_catalog_size(&self) -> usize {
        self.new_session().achievements().total_count()
    }
}
