//! Fetching asset bytes by URL.
//!
//! Renderers never touch the filesystem or network directly: every photo, logo, overlay and
//! icon goes through an [`AssetLoader`]. Loads for one render may run concurrently, so
//! loaders must be `Send + Sync`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use crate::assets::decode::{PreparedImage, decode_image};
use crate::foundation::error::{CardError, CardResult};

/// Source of asset bytes.
pub trait AssetLoader: Send + Sync {
    /// Fetch the bytes behind `url`.
    fn load(&self, url: &str) -> CardResult<Vec<u8>>;
}

/// Loads `file://` URLs, absolute paths and paths relative to a root directory.
#[derive(Clone, Debug)]
pub struct FsAssetLoader {
    root: PathBuf,
}

impl FsAssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, url: &str) -> CardResult<PathBuf> {
        if let Some(rest) = url.strip_prefix("file://") {
            return Ok(PathBuf::from(rest));
        }
        if url.contains("://") {
            return Err(CardError::validation(format!(
                "unsupported asset url scheme in '{url}'"
            )));
        }
        let path = Path::new(url);
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }
        Ok(self.root.join(normalize_rel_path(url)?))
    }
}

impl AssetLoader for FsAssetLoader {
    fn load(&self, url: &str) -> CardResult<Vec<u8>> {
        let path = self.path_for(url)?;
        std::fs::read(&path)
            .with_context(|| format!("read asset bytes from '{}'", path.display()))
            .map_err(CardError::from)
    }
}

/// In-memory loader keyed by exact URL.
#[derive(Clone, Debug, Default)]
pub struct MemoryAssetLoader {
    entries: HashMap<String, Arc<Vec<u8>>>,
}

impl MemoryAssetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, url: impl Into<String>, bytes: Vec<u8>) -> &mut Self {
        self.entries.insert(url.into(), Arc::new(bytes));
        self
    }

    pub fn with(mut self, url: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.insert(url, bytes);
        self
    }
}

impl AssetLoader for MemoryAssetLoader {
    fn load(&self, url: &str) -> CardResult<Vec<u8>> {
        self.entries
            .get(url)
            .map(|b| b.as_ref().clone())
            .ok_or_else(|| CardError::asset(format!("no asset registered for '{url}'")))
    }
}

/// Load and decode a required image. Any failure is reported as [`CardError::Asset`].
pub fn load_image(loader: &dyn AssetLoader, url: &str) -> CardResult<PreparedImage> {
    let bytes = loader
        .load(url)
        .map_err(|e| CardError::asset(format!("failed to load image '{url}': {e}")))?;
    decode_image(&bytes)
        .map_err(|e| CardError::asset(format!("failed to decode image '{url}': {e}")))
}

/// Load and decode an optional image, logging and dropping failures.
pub fn load_optional_image(
    loader: &dyn AssetLoader,
    url: Option<&str>,
    what: &str,
) -> Option<PreparedImage> {
    let url = url?;
    match load_image(loader, url) {
        Ok(img) => Some(img),
        Err(err) => {
            tracing::warn!(asset = what, url, %err, "optional asset unavailable, skipping");
            None
        }
    }
}

/// Normalize and validate root-relative asset paths.
///
/// The normalized result uses `/` separators, removes `.` segments, and rejects parent
/// traversals (`..`).
pub fn normalize_rel_path(source: &str) -> CardResult<String> {
    let s = source.replace('\\', "/");
    if s.is_empty() {
        return Err(CardError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(CardError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(CardError::validation("asset path must contain a file name"));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;
