//! Build and per-file summaries returned by the pipeline.

use std::path::PathBuf;

/// Outcome of a `build` run over one UCD directory.
#[derive(Debug)]
pub struct BuildResult {
    pub ucd_dir: PathBuf,
    pub output_dir: PathBuf,
    pub files: Vec<FileSummary>,
    /// Configured files absent from the directory.
    pub missing: Vec<String>,
    pub dry_run: bool,
    pub has_errors: bool,
}

impl BuildResult {
    pub fn failed_count(&self) -> usize {
        self.files.iter().filter(|file| file.error.is_some()).count()
    }
}

/// Per-file row of the build summary.
#[derive(Debug, Clone)]
pub struct FileSummary {
    pub file_name: String,
    pub transform: Option<&'static str>,
    /// Entries in the output document (records, map keys or names-list
    /// entries).
    pub records: usize,
    pub output: Option<PathBuf>,
    pub warnings: Vec<String>,
    pub error: Option<String>,
}
