//! SeriesLoader: read the fixed hex inputs and the processed-output directory.
//!
//! Loading never fails as a whole. Each source is decoded independently; a
//! source that is missing, unreadable or contains a bad line is skipped and
//! recorded in [`LoadReport::issues`], and loading continues with the rest.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SourcePaths;
use crate::data::source::{LineFault, SourceKind};
use crate::error::LoadError;

/// One named sequence of samples, as decoded from a source.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSeries {
    pub name: String,
    pub kind: SourceKind,
    pub values: Vec<f64>,
}

/// Outcome of a load: the series that made it, plus everything that didn't.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Fixed sources first (raw, clean), then processed files in sorted name order.
    pub series: Vec<RawSeries>,
    pub issues: Vec<LoadError>,
}

impl LoadReport {
    /// Human-readable notes for the operator.
    pub fn notes(&self) -> impl Iterator<Item = String> + '_ {
        self.issues.iter().map(|e| e.to_string())
    }

    /// Number of sources that were skipped entirely.
    pub fn skipped(&self) -> usize {
        self.issues.iter().filter(|e| e.is_skip()).count()
    }
}

#[derive(Debug, Clone)]
pub struct SeriesLoader {
    paths: SourcePaths,
}

impl SeriesLoader {
    pub fn new(paths: SourcePaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &SourcePaths {
        &self.paths
    }

    /// Load every configured source.
    pub fn load(&self) -> LoadReport {
        log::info!("Loading data...");
        let mut report = LoadReport::default();

        for kind in SourceKind::FIXED {
            let path = match kind {
                SourceKind::RawInput => &self.paths.raw_input,
                _ => &self.paths.clean_input,
            };
            self.load_fixed(kind, path, &mut report);
        }
        self.load_processed_dir(&mut report);

        log::info!("Loaded {} signals total.", report.series.len());
        report
    }

    fn load_fixed(&self, kind: SourceKind, path: &Path, report: &mut LoadReport) {
        if !path.is_file() {
            push_issue(
                report,
                LoadError::MissingSource {
                    kind,
                    path: path.to_path_buf(),
                },
            );
            return;
        }
        let name = kind.fixed_name().unwrap_or_default().to_string();
        match read_source(kind, path) {
            Ok(values) => push_series(report, name, kind, values),
            Err(e) => push_issue(report, e),
        }
    }

    fn load_processed_dir(&self, report: &mut LoadReport) {
        let dir = &self.paths.processed_dir;
        if !dir.is_dir() {
            push_issue(report, LoadError::MissingDirectory { path: dir.clone() });
            return;
        }
        let files = match list_files_sorted(dir) {
            Ok(files) => files,
            Err(source) => {
                push_issue(
                    report,
                    LoadError::Io {
                        path: dir.clone(),
                        source,
                    },
                );
                return;
            }
        };

        for path in files {
            let values = match read_source(SourceKind::Processed, &path) {
                Ok(values) => values,
                Err(e) => {
                    push_issue(report, e);
                    continue;
                }
            };
            let (name, flag) = display_name(&path);
            if let Some(reason) = flag {
                push_issue(
                    report,
                    LoadError::AmbiguousName {
                        path: path.clone(),
                        name: name.clone(),
                        reason,
                    },
                );
            }
            push_series(report, name, SourceKind::Processed, values);
        }
    }
}

fn push_issue(report: &mut LoadReport, issue: LoadError) {
    log::warn!("{issue}");
    report.issues.push(issue);
}

fn push_series(report: &mut LoadReport, name: String, kind: SourceKind, values: Vec<f64>) {
    if values.is_empty() {
        log::debug!("'{name}' has no samples, not registering it");
        return;
    }
    log::info!("Loaded '{}' ({} samples)", name, values.len());
    report.series.push(RawSeries { name, kind, values });
}

/// Read and decode one source file, all or nothing.
fn read_source(kind: SourceKind, path: &Path) -> Result<Vec<f64>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let encoding = kind.encoding();
    encoding
        .decode_all(&text)
        .map_err(|bad| match bad.fault {
            LineFault::Malformed => LoadError::Decode {
                path: path.to_path_buf(),
                line_no: bad.line_no,
                line: bad.line,
                encoding,
            },
            LineFault::OutOfRange => LoadError::OutOfRange {
                path: path.to_path_buf(),
                line_no: bad.line_no,
                line: bad.line,
            },
        })
}

/// Regular files of `dir`, sorted by file name.
fn list_files_sorted(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file())
        .collect();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Series name for a processed file: its base name with the final extension
/// stripped. Names with no extension or several dots are flagged.
pub fn display_name(path: &Path) -> (String, Option<&'static str>) {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.clone());

    let flag = if path.extension().is_none() {
        Some("no extension")
    } else if stem.contains('.') {
        Some("multiple dots")
    } else {
        None
    };
    (stem, flag)
}
