// SPDX-FileCopyrightText: 2026 SchedCC Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary directory management for integration tests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tokio::fs;

/// A temporary directory holding datasets and exports.
///
/// Removed with all its content when dropped.
#[derive(Debug)]
pub struct TempDataDir {
    dir: TempDir,
}

impl TempDataDir {
    /// Creates a new temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a JSON dataset made of the given entries.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub async fn write_dataset(
        &self,
        name: &str,
        entries: &[String],
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = self.dir.path().join(name);
        fs::write(&path, format!("[{}]", entries.join(",\n"))).await?;
        Ok(path)
    }
}
