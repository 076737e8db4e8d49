//! Input discovery and sample labeling

use anyhow::{bail, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// An input file and the label it is reported under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleFile {
    pub path: PathBuf,
    pub label: String,
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// A single file as given, or the matching files of a directory, sorted by path
pub fn collect_audio_files(path: &Path, extensions: &[String], recursive: bool) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        bail!("Input not found: {}", path.display());
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();

    for entry in WalkDir::new(path).max_depth(max_depth).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// File stem with every occurrence of `strip` removed
pub fn label_for(path: &Path, strip: &str) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    if strip.is_empty() {
        stem
    } else {
        stem.replace(strip, "")
    }
}

/// Label every file; on a duplicate label the first file in order wins
pub fn assign_labels(files: Vec<PathBuf>, strip: &str) -> Vec<SampleFile> {
    let mut seen = HashSet::new();
    let mut samples = Vec::with_capacity(files.len());

    for path in files {
        let label = label_for(&path, strip);
        if !seen.insert(label.clone()) {
            log::warn!("Duplicate label '{}': skipping {}", label, path.display());
            continue;
        }
        samples.push(SampleFile { path, label });
    }

    samples
}
