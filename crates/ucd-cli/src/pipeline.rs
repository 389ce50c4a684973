//! Conversion pipeline with explicit stages.
//!
//! The pipeline follows these stages for every configured file:
//! 1. **Discover**: match the UCD directory against the field table
//! 2. **Read**: decode the file as UTF-8
//! 3. **Parse**: split lines, strip comments, build records
//! 4. **Transform**: apply the configured post-processing, if any
//! 5. **Write**: serialize to `<output>/<name>.json`
//!
//! A file that fails is recorded and the remaining files still run.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, error, info, info_span, warn};

use ucd_ingest::{ParseStats, discover_files, parse_document, read_source};
use ucd_model::Document;
use ucd_standards::{FieldTable, FileSpec};
use ucd_transform::apply_transform;

use crate::types::{BuildResult, FileSummary};

/// Indentation of written JSON files.
const JSON_INDENT: &[u8] = b"    ";

/// Default output directory name inside the UCD directory.
pub const DEFAULT_OUTPUT_DIR: &str = "json";

/// Options of one `build` run.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub ucd_dir: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
}

impl BuildOptions {
    /// Options writing to `<ucd_dir>/json`.
    pub fn new(ucd_dir: impl Into<PathBuf>) -> Self {
        let ucd_dir = ucd_dir.into();
        let output_dir = ucd_dir.join(DEFAULT_OUTPUT_DIR);
        Self {
            ucd_dir,
            output_dir,
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// A converted document and the parse counters behind it.
#[derive(Debug, Clone)]
pub struct ConvertedFile {
    pub document: Document,
    pub stats: ParseStats,
}

impl ConvertedFile {
    /// Non-fatal anomalies worth surfacing in the summary.
    pub fn warnings(&self) -> Vec<String> {
        self.stats
            .unterminated_block
            .map(|line| format!("block comment opened at line {line} is never closed"))
            .into_iter()
            .collect()
    }
}

/// Reads, parses and post-processes one file.
pub fn convert_file(path: &Path, spec: &FileSpec) -> Result<ConvertedFile> {
    let text = read_source(path)?;
    convert_text(spec, &text)
}

/// Parses and post-processes already loaded file content.
pub fn convert_text(spec: &FileSpec, text: &str) -> Result<ConvertedFile> {
    let parsed = parse_document(spec, text);
    let document = apply_transform(spec, parsed.document)
        .with_context(|| format!("post-process {}", spec.file_name))?;
    Ok(ConvertedFile {
        document,
        stats: parsed.stats,
    })
}

/// Serializes a document with four-space indentation.
pub fn document_json(document: &Document) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(
        &mut buffer,
        PrettyFormatter::with_indent(JSON_INDENT),
    );
    document
        .serialize(&mut serializer)
        .with_context(|| format!("serialize {}", document.name))?;
    String::from_utf8(buffer).context("serialized JSON is not UTF-8")
}

/// Writes `<output_dir>/<name>.json`, creating the directory if needed.
pub fn write_document(output_dir: &Path, document: &Document) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;
    let output_path = output_dir.join(format!("{}.json", document.name));
    let json = document_json(document)?;
    fs::write(&output_path, format!("{json}\n"))
        .with_context(|| format!("write {}", output_path.display()))?;
    Ok(output_path)
}

/// Converts every configured file present in the UCD directory.
pub fn run_build(table: &FieldTable, options: &BuildOptions) -> Result<BuildResult> {
    let build_span = info_span!("build", ucd_dir = %options.ucd_dir.display());
    let _build_guard = build_span.enter();
    let build_start = Instant::now();

    let discovery = discover_files(&options.ucd_dir, table)
        .with_context(|| format!("scan {}", options.ucd_dir.display()))?;
    for name in &discovery.missing {
        warn!(file = %name, "configured file not found; skipping");
    }
    for path in &discovery.unconfigured {
        debug!(path = %path.display(), "file has no field table entry; skipping");
    }

    let mut files = Vec::with_capacity(discovery.files.len());
    for discovered in &discovery.files {
        let spec = discovered.spec;
        let file_span = info_span!("file", name = %spec.file_name);
        let summary = file_span.in_scope(|| process_file(&discovered.path, spec, options));
        files.push(summary);
    }

    let mut result = BuildResult {
        ucd_dir: options.ucd_dir.clone(),
        output_dir: options.output_dir.clone(),
        files,
        missing: discovery.missing.iter().map(|name| (*name).to_string()).collect(),
        dry_run: options.dry_run,
        has_errors: false,
    };
    result.has_errors = result.failed_count() > 0;
    info!(
        files = result.files.len(),
        missing = result.missing.len(),
        failed = result.failed_count(),
        duration_ms = build_start.elapsed().as_millis(),
        "build complete"
    );
    Ok(result)
}

fn process_file(path: &Path, spec: &FileSpec, options: &BuildOptions) -> FileSummary {
    let mut summary = FileSummary {
        file_name: spec.file_name.clone(),
        transform: spec.transform.as_ref().map(|transform| transform.name()),
        records: 0,
        output: None,
        warnings: Vec::new(),
        error: None,
    };

    let outcome = convert_file(path, spec).and_then(|converted| {
        summary.records = converted.document.body.len();
        summary.warnings = converted.warnings();
        if options.dry_run {
            return Ok(None);
        }
        write_document(&options.output_dir, &converted.document).map(Some)
    });

    match outcome {
        Ok(output) => {
            info!(records = summary.records, "converted");
            summary.output = output;
        }
        Err(err) => {
            let message = format!("{err:#}");
            error!(error = %message, "conversion failed");
            summary.error = Some(message);
        }
    }
    summary
}
