//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so the server crate prepares the asset
//! directory through the service layer that owns it.

/// Ensure the upload directory exists before serving.
pub async fn ensure_env(upload_dir: &str) -> anyhow::Result<()> {
    common::env::ensure_upload_dir(upload_dir).await
}
