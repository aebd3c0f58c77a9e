use crate::error::Result;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tracing::debug;

const CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60); // 24 hours
const CACHE_FILE: &str = "registry.json";

/// Get the cache directory (~/.cache/pkgscout/ or equivalent)
pub fn cache_dir() -> PathBuf {
    if let Some(cache_home) = std::env::var_os("XDG_CACHE_HOME") {
        PathBuf::from(cache_home).join("pkgscout")
    } else if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".cache/pkgscout")
    } else {
        PathBuf::from(".cache/pkgscout")
    }
}

/// On-disk cache for the raw registry payload.
///
/// One fixed slot, freshness judged against the artifact's mtime. The cache
/// must never fail a search: read errors degrade to a miss and write errors
/// are at most logged by the caller.
pub struct SearchCache {
    dir: PathBuf,
    ttl: Duration,
}

impl SearchCache {
    pub fn new() -> Self {
        Self {
            dir: cache_dir(),
            ttl: CACHE_TTL,
        }
    }

    /// Cache rooted at `dir` with a custom TTL. Tests use this to exercise
    /// expiry without waiting out the full window.
    pub fn at(dir: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            dir: dir.into(),
            ttl,
        }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(CACHE_FILE)
    }

    /// Check if a cached payload exists and is still fresh (less than TTL old)
    pub fn has_valid(&self) -> bool {
        self.is_fresh(&self.path())
    }

    fn is_fresh(&self, path: &Path) -> bool {
        if !path.exists() {
            return false;
        }

        let metadata = match std::fs::metadata(path) {
            Ok(m) => m,
            Err(_) => return false,
        };

        let modified = match metadata.modified() {
            Ok(t) => t,
            Err(_) => return false,
        };

        let age = match SystemTime::now().duration_since(modified) {
            Ok(d) => d,
            Err(_) => return false,
        };

        age < self.ttl
    }

    /// Get the cached payload or None if stale/missing
    pub fn read(&self) -> Option<String> {
        let path = self.path();

        if !self.is_fresh(&path) {
            return None;
        }

        std::fs::read_to_string(&path).ok()
    }

    /// Store the payload, overwriting any prior content
    pub fn write(&self, payload: &str) -> Result<()> {
        let path = self.path();

        // Create cache directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, payload)?;
        debug!("wrote registry cache to {}", path.display());

        Ok(())
    }
}

impl Default for SearchCache {
    fn default() -> Self {
        Self::new()
    }
}
