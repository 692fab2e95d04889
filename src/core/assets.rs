//=========================================================================
// Asset Loader
//=========================================================================
//
// Resolves asset paths against an ordered list of search paths and reads
// them synchronously.
//
// Resolution order:
//   1. absolute paths are used as-is
//   2. each search path, in insertion order
//   3. the working directory
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fs;
use std::path::{Path, PathBuf};

//=== External Dependencies ===============================================

use log::{debug, trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::error::ModuleError;
use crate::core::module::{RuntimeModule, SubsystemKind};

//=== AssetLoader =========================================================

pub struct AssetLoader {
    search_paths: Vec<PathBuf>,
}

impl AssetLoader {
    pub fn new() -> Self {
        Self {
            search_paths: Vec::new(),
        }
    }

    /// Creates a loader with the given search paths (duplicates dropped).
    pub fn with_search_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut loader = Self::new();
        for path in paths {
            loader.add_search_path(path);
        }
        loader
    }

    //--- Search Paths -----------------------------------------------------

    /// Appends a search path. Returns `false` if it was already present.
    pub fn add_search_path(&mut self, path: impl Into<PathBuf>) -> bool {
        let path = path.into();
        if self.search_paths.contains(&path) {
            return false;
        }
        trace!(target: "bootstrap", "Asset search path added: {}", path.display());
        self.search_paths.push(path);
        true
    }

    /// Removes a search path. Returns `false` if it was not present.
    pub fn remove_search_path(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let before = self.search_paths.len();
        self.search_paths.retain(|p| p != path);
        self.search_paths.len() != before
    }

    pub fn clear_search_paths(&mut self) {
        self.search_paths.clear();
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    //--- Lookup -----------------------------------------------------------

    /// Locates an existing file for `path`, following the resolution order.
    pub fn resolve(&self, path: impl AsRef<Path>) -> Option<PathBuf> {
        let path = path.as_ref();

        if path.is_absolute() {
            return path.is_file().then(|| path.to_path_buf());
        }

        self.search_paths
            .iter()
            .map(|dir| dir.join(path))
            .chain(std::iter::once(path.to_path_buf()))
            .find(|candidate| candidate.is_file())
    }

    /// Reads a located asset as UTF-8 text.
    pub fn read_text(&self, path: impl AsRef<Path>) -> Result<String, ModuleError> {
        let resolved = self.locate(path.as_ref())?;
        fs::read_to_string(&resolved).map_err(|source| ModuleError::Io {
            path: resolved,
            source,
        })
    }

    /// Reads a located asset as raw bytes.
    pub fn read_binary(&self, path: impl AsRef<Path>) -> Result<Vec<u8>, ModuleError> {
        let resolved = self.locate(path.as_ref())?;
        fs::read(&resolved).map_err(|source| ModuleError::Io {
            path: resolved,
            source,
        })
    }

    fn locate(&self, path: &Path) -> Result<PathBuf, ModuleError> {
        let resolved = self
            .resolve(path)
            .ok_or_else(|| ModuleError::AssetNotFound(path.to_path_buf()))?;
        debug!(target: "bootstrap", "Asset {} resolved to {}", path.display(), resolved.display());
        Ok(resolved)
    }
}

impl Default for AssetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeModule for AssetLoader {
    fn kind(&self) -> SubsystemKind {
        SubsystemKind::AssetLoader
    }

    fn initialize(&mut self) -> Result<(), ModuleError> {
        for path in &self.search_paths {
            if !path.is_dir() {
                warn!(target: "bootstrap", "Asset search path does not exist: {}", path.display());
            }
        }
        debug!(target: "bootstrap", "Asset loader initialized ({} search paths)", self.search_paths.len());
        Ok(())
    }

    fn finalize(&mut self) {
        self.search_paths.clear();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
