//! Resolution of command-line file arguments.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::info;
use walkdir::WalkDir;

use crate::ProcessError;
use crate::config::ProcessorConfig;

/// Finds the documents to lint.
///
/// Arguments naming an existing file are taken as-is; anything else is a
/// glob matched against the files under a base directory. The configured
/// `include` and `exclude` patterns filter both.
pub struct FileFinder {
    include_globs: Option<GlobSet>,
    exclude_globs: Option<GlobSet>,
}

impl FileFinder {
    /// Creates a finder from include and exclude patterns.
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self, ProcessError> {
        Ok(Self {
            include_globs: build_globset(include)?,
            exclude_globs: build_globset(exclude)?,
        })
    }

    /// Creates a finder from the configured patterns.
    pub fn from_config(config: &ProcessorConfig) -> Result<Self, ProcessError> {
        Self::new(&config.include, &config.exclude)
    }

    /// Returns true if `path` is filtered out. Excludes win over includes.
    pub fn should_ignore(&self, path: &Path) -> bool {
        if self
            .exclude_globs
            .as_ref()
            .is_some_and(|excludes| excludes.is_match(path))
        {
            return true;
        }

        self.include_globs
            .as_ref()
            .is_some_and(|includes| !includes.is_match(path))
    }

    /// Resolves `patterns` to a sorted, deduplicated file list.
    pub fn discover_files(
        &self,
        patterns: &[String],
        base_dir: &Path,
    ) -> Result<Vec<PathBuf>, ProcessError> {
        let mut files = Vec::new();
        let mut globs = Vec::new();

        for pattern in patterns {
            let path = Path::new(pattern);
            if path.is_file() {
                if !self.should_ignore(path) {
                    files.push(path.to_path_buf());
                }
            } else {
                globs.push(pattern.clone());
            }
        }

        if let Some(glob_set) = build_globset(&globs)? {
            for entry in WalkDir::new(base_dir).into_iter().filter_map(Result::ok) {
                let path = entry.path();
                if entry.file_type().is_file()
                    && glob_set.is_match(path)
                    && !self.should_ignore(path)
                {
                    files.push(path.to_path_buf());
                }
            }
        }

        files.sort();
        files.dedup();

        info!("Discovered {} file(s) to lint", files.len());
        Ok(files)
    }
}

fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>, ProcessError> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| {
            ProcessError::config(format!("Invalid pattern '{}': {}", pattern, e))
        })?;
        builder.add(glob);
    }

    let globset = builder
        .build()
        .map_err(|e| ProcessError::config(format!("Failed to build globset: {}", e)))?;

    Ok(Some(globset))
}
