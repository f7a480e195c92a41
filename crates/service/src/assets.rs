//! Asset store for uploaded owner images.
//!
//! Files live flat under one directory and are addressed by their public
//! path (`<public_prefix>/<file name>`), which is what owner records store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::{fs, io::AsyncWriteExt};
use tracing::debug;

use crate::errors::ServiceError;

/// Attempts made to find an unused generated name before giving up.
const SAVE_ATTEMPTS: usize = 3;

#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Persist `bytes` under a freshly generated name; returns the public path.
    async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String, ServiceError>;

    /// Remove the file behind `public_path`. `Ok(false)` when it was already gone
    /// or the path does not belong to this store.
    async fn remove(&self, public_path: &str) -> Result<bool, ServiceError>;
}

/// Filesystem-backed store; the directory is also served statically.
#[derive(Clone, Debug)]
pub struct DiskAssetStore {
    root: PathBuf,
    public_prefix: String,
}

impl DiskAssetStore {
    pub fn new<P: Into<PathBuf>>(root: P, public_prefix: &str) -> Self {
        Self { root: root.into(), public_prefix: public_prefix.trim_end_matches('/').to_string() }
    }

    pub fn public_prefix(&self) -> &str { &self.public_prefix }

    /// `<unix millis>-<8 hex chars><.ext>`; the extension comes from the
    /// uploaded file name and is dropped unless short and alphanumeric.
    pub fn generate_name(original_name: &str) -> String {
        let ext = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| !e.is_empty() && e.len() <= 10 && e.chars().all(|c| c.is_ascii_alphanumeric()))
            .map(|e| format!(".{}", e.to_ascii_lowercase()))
            .unwrap_or_default();
        format!("{}-{:08x}{}", Utc::now().timestamp_millis(), rand::random::<u32>(), ext)
    }

    /// Map a public path back to a file under `root`. Only bare file names
    /// directly below the prefix resolve.
    fn resolve(&self, public_path: &str) -> Option<PathBuf> {
        let name = public_path.strip_prefix(&self.public_prefix)?.strip_prefix('/')?;
        let bad = name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']);
        if bad {
            return None;
        }
        Some(self.root.join(name))
    }
}

#[async_trait]
impl AssetStore for DiskAssetStore {
    async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String, ServiceError> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| ServiceError::Asset(format!("cannot create {}: {}", self.root.display(), e)))?;

        for _ in 0..SAVE_ATTEMPTS {
            let name = Self::generate_name(original_name);
            let path = self.root.join(&name);
            let mut file = match fs::OpenOptions::new().write(true).create_new(true).open(&path).await {
                Ok(f) => f,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(ServiceError::Asset(format!("cannot create {}: {}", path.display(), e))),
            };
            let written = async {
                file.write_all(bytes).await?;
                file.flush().await
            }
            .await;
            if let Err(e) = written {
                let _ = fs::remove_file(&path).await;
                return Err(ServiceError::Asset(format!("cannot write {}: {}", path.display(), e)));
            }
            debug!(file = %path.display(), size = bytes.len(), "asset saved");
            return Ok(format!("{}/{}", self.public_prefix, name));
        }
        Err(ServiceError::Asset("could not allocate a unique file name".into()))
    }

    async fn remove(&self, public_path: &str) -> Result<bool, ServiceError> {
        let Some(path) = self.resolve(public_path) else {
            debug!(%public_path, "path outside asset store; nothing to remove");
            return Ok(false);
        };
        match fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(ServiceError::Asset(format!("cannot remove {}: {}", path.display(), e))),
        }
    }
}
