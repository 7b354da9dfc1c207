//! Tool archive acquisition: reuse the cached jar or download it
//!
//! The archive is an explicit external dependency with a fetch-iff-absent
//! contract. Once present it is immutable: no version or integrity check
//! on later runs, absence is the only fetch trigger.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::FetchError;
use crate::workspace::Workspace;

/// How the ensure step satisfied the archive requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A readable archive was already present; no request was made.
    Cached,
    /// The archive was downloaded and written to the cache path.
    Downloaded,
}

/// Ensure the tool archive is present and readable, downloading it if not.
pub async fn ensure_tool_archive(workspace: &Workspace) -> Result<FetchOutcome, FetchError> {
    let archive = workspace.tool_archive_path();
    if is_readable(&archive) {
        log::debug!("Reusing cached tool archive at {}", archive.display());
        return Ok(FetchOutcome::Cached);
    }
    download_tool_archive(workspace).await?;
    Ok(FetchOutcome::Downloaded)
}

// Open, not just stat: an archive that exists but cannot be read must
// trigger a re-fetch.
fn is_readable(path: &Path) -> bool {
    File::open(path).is_ok()
}

async fn download_tool_archive(workspace: &Workspace) -> Result<(), FetchError> {
    let url = workspace.tool_url();
    let archive = workspace.tool_archive_path();
    log::info!("Downloading tool archive from {}", url);

    let response = reqwest::get(url).await.map_err(|e| FetchError::Download {
        url: url.to_string(),
        source: e,
    })?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }
    let body = response.bytes().await.map_err(|e| FetchError::Download {
        url: url.to_string(),
        source: e,
    })?;

    // A failed transfer must not leave a partial archive at the cache
    // path: the body is read in full first, then the written temp file is
    // renamed into place.
    let mut tmp =
        tempfile::NamedTempFile::new_in(workspace.root()).map_err(|e| FetchError::Write {
            path: archive.clone(),
            source: e,
        })?;
    tmp.write_all(&body).map_err(|e| FetchError::Write {
        path: archive.clone(),
        source: e,
    })?;
    tmp.persist(&archive).map_err(|e| FetchError::Write {
        path: archive.clone(),
        source: e.error,
    })?;

    log::info!(
        "Tool archive saved to {} ({} bytes)",
        archive.display(),
        body.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::TOOL_ARCHIVE;
    use std::fs;

    #[tokio::test]
    async fn test_download_writes_archive() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/tool.jar")
            .with_status(200)
            .with_body("jar bytes")
            .create_async()
            .await;

        let workspace =
            Workspace::new(dir.path()).with_tool_url(format!("{}/tool.jar", server.url()));
        let outcome = ensure_tool_archive(&workspace)
            .await
            .expect("download should succeed");

        assert_eq!(outcome, FetchOutcome::Downloaded);
        let written = fs::read(workspace.tool_archive_path()).expect("archive should exist");
        assert_eq!(written, b"jar bytes");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_existing_archive_skips_network() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(TOOL_ARCHIVE), "cached").expect("seed archive");

        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let workspace =
            Workspace::new(dir.path()).with_tool_url(format!("{}/tool.jar", server.url()));
        let outcome = ensure_tool_archive(&workspace)
            .await
            .expect("cached archive should be reused");

        assert_eq!(outcome, FetchOutcome::Cached);
        let kept = fs::read(workspace.tool_archive_path()).expect("archive untouched");
        assert_eq!(kept, b"cached");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_http_error_status_leaves_no_archive() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/tool.jar")
            .with_status(500)
            .create_async()
            .await;

        let workspace =
            Workspace::new(dir.path()).with_tool_url(format!("{}/tool.jar", server.url()));
        let result = ensure_tool_archive(&workspace).await;

        assert!(matches!(result, Err(FetchError::HttpStatus { .. })));
        assert!(!workspace.tool_archive_path().exists());
    }

    #[tokio::test]
    async fn test_unreachable_url_leaves_no_archive() {
        let dir = tempfile::tempdir().expect("tempdir");
        // Port 1 is closed; the connection itself must fail.
        let workspace =
            Workspace::new(dir.path()).with_tool_url("http://127.0.0.1:1/tool.jar".to_string());
        let result = ensure_tool_archive(&workspace).await;

        assert!(matches!(result, Err(FetchError::Download { .. })));
        assert!(!workspace.tool_archive_path().exists());
    }
}
