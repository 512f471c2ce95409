use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::process::Command;
use tracing::warn;

mod diff;
mod model;

pub use crate::diff::{commit_message, diff, Change};
pub use crate::model::PackageLock;

pub const LOCKFILE: &str = "package-lock.json";

#[derive(Error, Debug)]
pub enum Error {
    #[error("no package-lock.json in {}", .0.display())]
    MissingLockfile(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Lockfile as it sits in the working tree.
pub async fn load_current(dir: &Path) -> Result<PackageLock, Error> {
    let path = dir.join(LOCKFILE);

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::MissingLockfile(path));
        }
        Err(err) => return Err(err.into()),
    };

    Ok(PackageLock::parse(&content)?)
}

/// Lockfile as committed at HEAD. Any retrieval failure (no repository, no
/// commits yet, file not tracked at HEAD) degrades to an empty document so
/// a first-ever lockfile commit diffs as all-added. Non-empty output that
/// is not valid JSON is still an error.
pub async fn load_previous(dir: &Path) -> Result<PackageLock, Error> {
    let output = match Command::new("git")
        .arg("show")
        .arg(format!("HEAD:./{}", LOCKFILE))
        .current_dir(dir)
        .output()
        .await
    {
        Ok(output) => output,
        Err(err) => {
            warn!(%err, "could not run git");
            return Ok(PackageLock::default());
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        warn!(status = %output.status, git_stderr = %stderr.trim(), "no lockfile at HEAD");
        return Ok(PackageLock::default());
    }

    let content = String::from_utf8_lossy(&output.stdout);
    if content.trim().is_empty() {
        return Ok(PackageLock::default());
    }

    Ok(PackageLock::parse(&content)?)
}
