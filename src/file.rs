// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv::to_export_string;
use crate::data::DataSet;

/// Read a saved portal page. Lossy on invalid UTF-8; the portal mixes encodings
/// inside script blocks.
pub fn read_document(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let bytes = fs::read(path).map_err(|e| format!("Cannot read {}: {e}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Render an export according to `export.format`: the table for CSV/TSV, the
/// typed value for JSON.
pub fn render_export<T: Serialize>(
    export: &ExportOptions,
    table: &DataSet,
    value: &T,
) -> Result<String, Box<dyn std::error::Error>> {
    match export.format.delimiter() {
        Some(sep) => Ok(to_export_string(table, export.include_headers, sep)?),
        None => Ok(serde_json::to_string_pretty(value)? + "\n"),
    }
}

/// Write an export file, creating parent directories as needed.
/// Returns the final path written to.
pub fn write_export_single(path: &Path, contents: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(path.to_path_buf())
}

/// `-o` may name a file or a directory (trailing separator or existing dir);
/// a directory gets `default_filename` appended.
pub fn resolve_single_out_path(user_o: &str, default_filename: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if user_o.is_empty() { return Ok(PathBuf::from(default_filename)); }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(user_o) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn default_filename(stem: &str, format: ExportFormat) -> String {
    format!("{stem}.{}", format.ext())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &str) -> bool {
    p.ends_with('/') || p.ends_with('\\')
}
