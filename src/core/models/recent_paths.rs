use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::global_constants::{
    LOG_TAG_RECENT_PATHS, RECENT_PATHS_DIRECTORY_NAME, RECENT_PATHS_FILE_NAME, RECENT_PATHS_LIMIT,
};

/// Most-recent-first list of custom save directories, persisted as a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentPaths {
    paths: Vec<String>,
}

impl RecentPaths {
    #[cfg(test)]
    pub fn from_paths(paths: Vec<String>) -> Self {
        Self { paths }
    }

    /// Loads the cache, treating any read or parse failure as an empty list.
    pub fn load_or_default(cache_path: &Path) -> Self {
        match Self::load_from(cache_path) {
            Ok(recent_paths) => recent_paths,
            Err(error) => {
                log::error!(
                    "{} Error reading cache {:?}: {:#}",
                    LOG_TAG_RECENT_PATHS,
                    cache_path,
                    error
                );
                Self::default()
            }
        }
    }

    pub fn load_from(cache_path: &Path) -> anyhow::Result<Self> {
        if !cache_path.exists() {
            log::debug!("{} No cache file at {:?}", LOG_TAG_RECENT_PATHS, cache_path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(cache_path)
            .with_context(|| format!("failed to read {:?}", cache_path))?;
        let stored: RecentPaths = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse {:?}", cache_path))?;

        let paths: Vec<String> = stored
            .paths
            .into_iter()
            .filter(|path| Self::parent_directory_exists(path))
            .collect();

        log::debug!(
            "{} Loaded {} recent paths from {:?}",
            LOG_TAG_RECENT_PATHS,
            paths.len(),
            cache_path
        );

        Ok(Self { paths })
    }

    /// Writes the cache, logging instead of failing.
    pub fn save_or_log(&self, cache_path: &Path) {
        if let Err(error) = self.save_to(cache_path) {
            log::error!(
                "{} Error writing cache {:?}: {:#}",
                LOG_TAG_RECENT_PATHS,
                cache_path,
                error
            );
        }
    }

    pub fn save_to(&self, cache_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = cache_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {:?}", parent))?;
        }

        let contents = serde_json::to_string(self)?;
        std::fs::write(cache_path, contents)
            .with_context(|| format!("failed to write {:?}", cache_path))?;

        log::info!("{} Saved recent paths to {:?}", LOG_TAG_RECENT_PATHS, cache_path);
        Ok(())
    }

    /// Moves `path` to the front, dropping duplicates and anything past the limit.
    pub fn remember(&mut self, path: &str) {
        self.paths.retain(|existing| existing != path);
        self.paths.insert(0, path.to_string());
        self.paths.truncate(RECENT_PATHS_LIMIT);
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn get_cache_file_path() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(RECENT_PATHS_DIRECTORY_NAME)
            .join(RECENT_PATHS_FILE_NAME)
    }

    fn parent_directory_exists(path: &str) -> bool {
        match Path::new(path).parent() {
            Some(parent) => parent.exists(),
            None => true,
        }
    }
}
