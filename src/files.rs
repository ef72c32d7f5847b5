//! Document root file resolution.

use std::path::PathBuf;

/// Facts about a servable file, recomputed per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub path: PathBuf,
    pub size: u64,
}

/// Maps a raw request path to a file beneath the document root.
///
/// The candidate path is the document root and the request path joined by
/// plain concatenation; the path is not decoded or normalized. The target
/// must exist and be a regular file. Every stat failure and every
/// non-regular target (directory, device, symlink) collapses to `None`.
pub async fn resolve(docroot: &str, urlpath: &str) -> Option<FileInfo> {
    let path = PathBuf::from(format!("{}{}", docroot, urlpath));
    let meta = tokio::fs::symlink_metadata(&path).await.ok()?;
    if !meta.file_type().is_file() {
        return None;
    }
    Some(FileInfo {
        path,
        size: meta.len(),
    })
}
