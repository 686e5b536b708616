//! Batch suffix renamer
//!
//! Appends a fixed suffix to image file stems under a directory tree:
//! `zeta.png` becomes `zeta_ap.png`. Files whose stem already ends with the
//! suffix are left alone, so running twice is a no-op.

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::config::RenamerConfig;
use crate::error::{RenameError, RenameResult};

/// A pending rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Outcome of a rename run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameReport {
    /// Files renamed successfully
    pub renamed: usize,
    /// Files whose rename failed
    pub failed: usize,
}

/// Suffix renamer
#[derive(Debug, Clone)]
pub struct Renamer {
    suffix: String,
    // Lower-cased, with leading dot
    extensions: Vec<String>,
}

impl Renamer {
    /// Create a renamer for the given suffix and extensions
    pub fn new(suffix: impl Into<String>, extensions: &[String]) -> Self {
        Self {
            suffix: suffix.into(),
            extensions: extensions.iter().map(|e| e.to_lowercase()).collect(),
        }
    }

    /// Create a renamer from configuration
    pub fn from_config(config: &RenamerConfig) -> Self {
        Self::new(&config.suffix, &config.extensions)
    }

    /// Compute the new file name for `file_name`, if it needs renaming
    pub fn target_name(&self, file_name: &str) -> Option<String> {
        let lower = file_name.to_lowercase();
        if !self.extensions.iter().any(|ext| lower.ends_with(ext.as_str())) {
            return None;
        }

        let path = Path::new(file_name);
        let stem = path.file_stem()?.to_str()?;
        if stem.ends_with(&self.suffix) {
            return None;
        }

        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => Some(format!("{}{}.{}", stem, self.suffix, ext)),
            None => Some(format!("{}{}", stem, self.suffix)),
        }
    }

    /// Collect every rename under `root` without touching the filesystem
    ///
    /// Hidden files are included and ignore files are not honoured.
    ///
    /// # Errors
    ///
    /// Returns `RenameError::RootNotFound` if `root` is not a directory.
    pub fn plan(&self, root: &Path) -> RenameResult<Vec<RenamePlan>> {
        if !root.is_dir() {
            return Err(RenameError::RootNotFound(root.to_path_buf()));
        }

        let mut plans = Vec::new();
        for entry in WalkBuilder::new(root).standard_filters(false).build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let Some(file_name) = entry.file_name().to_str() else {
                tracing::debug!(path = %entry.path().display(), "Skipping non UTF-8 file name");
                continue;
            };

            if let Some(new_name) = self.target_name(file_name) {
                let from = entry.path().to_path_buf();
                let to = from.with_file_name(new_name);
                plans.push(RenamePlan { from, to });
            }
        }

        Ok(plans)
    }

    /// Rename every eligible file under `root`
    ///
    /// Candidates are collected first; individual failures are logged and
    /// counted, and the run continues.
    pub fn run(&self, root: &Path) -> RenameResult<RenameReport> {
        tracing::info!(root = %root.display(), suffix = %self.suffix, "Scanning directory");

        let mut report = RenameReport::default();
        for plan in self.plan(root)? {
            match apply(&plan) {
                Ok(()) => {
                    tracing::info!(from = %plan.from.display(), to = %plan.to.display(), "Renamed");
                    report.renamed += 1;
                }
                Err(e) => {
                    tracing::error!(error = %e, "Rename failed");
                    report.failed += 1;
                }
            }
        }

        Ok(report)
    }
}

impl Default for Renamer {
    fn default() -> Self {
        Self::from_config(&RenamerConfig::default())
    }
}

fn apply(plan: &RenamePlan) -> RenameResult<()> {
    std::fs::rename(&plan.from, &plan.to).map_err(|source| RenameError::Rename {
        from: plan.from.clone(),
        to: plan.to.clone(),
        source,
    })
}
