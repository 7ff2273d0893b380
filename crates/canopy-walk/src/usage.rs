//! Depth-first disk-usage measurement.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::WalkConfig;
use crate::error::{WalkError, WalkWarning};
use crate::fs::{FileSystem, OsFileSystem};

/// Running total for one visited path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageEntry {
    /// The visited path.
    pub path: PathBuf,
    /// Bytes used by the path and everything below it.
    pub bytes: u64,
    /// Depth below the walk root (the root itself is 0).
    pub depth: u32,
}

/// Result of measuring a path.
///
/// Entries are recorded in completion order: every child appears before
/// its parent, and the walk root is last.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageReport {
    /// Total bytes used by the root and all descendants.
    pub total: u64,
    /// Per-path running totals in completion order.
    pub entries: Vec<UsageEntry>,
    /// Non-fatal problems encountered below the root.
    pub warnings: Vec<WalkWarning>,
}

impl UsageReport {
    /// Check if there were any warnings during the walk.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Recursive disk-usage walker over a [`FileSystem`].
///
/// A path's usage is its own size plus the usage of each child. Only a
/// failure on the walk root is fatal; failures below it are recorded as
/// warnings and the entry is skipped.
#[derive(Debug)]
pub struct DiskUsage<F = OsFileSystem> {
    fs: F,
}

impl DiskUsage<OsFileSystem> {
    /// Create a walker over the real filesystem.
    pub fn new() -> Self {
        Self { fs: OsFileSystem }
    }
}

impl Default for DiskUsage<OsFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> DiskUsage<F> {
    /// Create a walker over a custom filesystem implementation.
    pub fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    /// Measure the tree rooted at `config.root`.
    pub fn measure(&self, config: &WalkConfig) -> Result<UsageReport, WalkError> {
        let mut report = UsageReport {
            total: 0,
            entries: Vec::new(),
            warnings: Vec::new(),
        };
        let total = self.visit(&config.root, 0, config, &mut report)?;
        report.total = total;
        debug!(
            path = %config.root.display(),
            total = report.total,
            warnings = report.warnings.len(),
            "walk finished"
        );
        Ok(report)
    }

    /// Measure one path: its own size plus all children's totals.
    fn visit(
        &self,
        path: &Path,
        depth: u32,
        config: &WalkConfig,
        report: &mut UsageReport,
    ) -> Result<u64, WalkError> {
        let mut total = self
            .fs
            .size_of(path)
            .map_err(|source| WalkError::io(path, source))?;

        let descend = config.max_depth.is_none_or(|limit| depth < limit);
        if descend && self.fs.is_directory(path) {
            let names = self
                .fs
                .list_children(path)
                .map_err(|source| WalkError::io(path, source))?;

            for name in names {
                let display_name = name.to_string_lossy();
                if config.should_skip_hidden(&display_name)
                    || config.should_ignore(&display_name)
                {
                    continue;
                }
                let child_path = path.join(&name);
                match self.visit(&child_path, depth + 1, config, report) {
                    Ok(bytes) => total += bytes,
                    Err(error) => {
                        warn!(path = %child_path.display(), %error, "skipping unreadable entry");
                        report.warnings.push(WalkWarning::from_error(&child_path, &error));
                    }
                }
            }
        }

        report.entries.push(UsageEntry {
            path: path.to_path_buf(),
            bytes: total,
            depth,
        });
        Ok(total)
    }
}
