//! Needle cache: decode each reference image once
use crate::errors::VisualError;
use dashmap::DashMap;
use image::GrayImage;
use ocvbot_core_types::Pattern;
use std::path::PathBuf;
use std::sync::Arc;

/// Grayscale needles keyed by their path
#[derive(Default)]
pub struct NeedleCache {
    cache: DashMap<PathBuf, Arc<GrayImage>>,
}

impl NeedleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a needle, decoding it from disk on first use
    pub fn load(&self, pattern: &Pattern) -> Result<Arc<GrayImage>, VisualError> {
        if let Some(entry) = self.cache.get(pattern.path()) {
            return Ok(Arc::clone(entry.value()));
        }

        let decoded = image::open(pattern.path())
            .map_err(|err| VisualError::Needle {
                path: pattern.path().to_path_buf(),
                reason: err.to_string(),
            })?
            .to_luma8();
        let needle = Arc::new(decoded);
        self.cache
            .insert(pattern.path().to_path_buf(), Arc::clone(&needle));
        tracing::debug!(%pattern, "needle decoded");
        Ok(needle)
    }

    /// Register an in-memory needle under a pattern path
    pub fn insert(&self, pattern: &Pattern, needle: GrayImage) {
        self.cache
            .insert(pattern.path().to_path_buf(), Arc::new(needle));
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
