//! Upload pipeline
//!
//! Opens the file, uploads it under its base name, presigns a GET URL and
//! strips the query string so only the bare object URL is left. The result is
//! only reachable when the bucket allows anonymous reads.

use std::path::Path;
use tokio::fs::File;
use tracing::debug;
use url::Url;

use crate::storage::ObjectStore;
use crate::types::{ShutterError, ShutterResult};

/// An opened file ready to be uploaded.
#[derive(Debug)]
pub struct InspectedFile {
    pub file: File,
    /// Object key, the file's base name.
    pub key: String,
    pub content_type: Option<String>,
}

/// MIME type for the path's extension, `None` when the extension is unknown.
pub fn content_type_for(path: &Path) -> Option<String> {
    mime_guess::from_path(path).first().map(|mime| mime.to_string())
}

pub async fn inspect(path: &Path) -> ShutterResult<InspectedFile> {
    let key = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| ShutterError::InvalidFileName(path.to_path_buf()))?;

    let file = File::open(path).await.map_err(|source| ShutterError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let metadata = file.metadata().await.map_err(|source| ShutterError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    if metadata.is_dir() {
        return Err(ShutterError::NotAFile(path.to_path_buf()));
    }

    Ok(InspectedFile {
        file,
        key,
        content_type: content_type_for(path),
    })
}

/// Drop the query component of `input`. Input without a query comes back as is.
pub fn strip_query_string(input: &str) -> ShutterResult<String> {
    let mut url = Url::parse(input).map_err(|source| ShutterError::UrlParse {
        url: input.to_string(),
        source,
    })?;
    if url.query().is_none() {
        return Ok(input.to_string());
    }
    url.set_query(None);
    Ok(url.to_string())
}

/// Upload `path` and return its query-free URL.
pub async fn run(store: &dyn ObjectStore, path: &Path) -> ShutterResult<String> {
    let mut inspected = inspect(path).await?;
    debug!(
        "object key {} content type {:?} ({} bytes)",
        inspected.key,
        inspected.content_type,
        inspected.file.metadata().await.map(|m| m.len()).unwrap_or_default()
    );

    store
        .upload(&inspected.key, inspected.content_type.as_deref(), &mut inspected.file)
        .await?;

    let presigned = store.presign_get(&inspected.key).await?;
    let url = strip_query_string(&presigned)?;
    debug!("public url {}", url);
    Ok(url)
}
