//! Writing entry lists back to disk.

use crate::config::SaveOptions;
use crate::error::{ConfigError, ParseResult};
use crate::loader::LineEnding;
use crate::types::Entry;
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Render entries one per line, each followed by `line_ending`
pub fn serialize_entries(entries: &[Entry], line_ending: LineEnding) -> String {
    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.to_string());
        output.push_str(line_ending.as_str());
    }
    output
}

/// Render entries one per line, each followed by its own terminator.
///
/// Entries without a matching terminator use `default`.
pub(crate) fn serialize_lines(
    entries: &[Entry],
    endings: &[LineEnding],
    default: LineEnding,
) -> String {
    let mut output = String::new();
    for (idx, entry) in entries.iter().enumerate() {
        output.push_str(&entry.to_string());
        output.push_str(endings.get(idx).copied().unwrap_or(default).as_str());
    }
    output
}

/// Replace the contents of `path` with the serialized entries
pub fn write_entries(
    entries: &[Entry],
    path: impl AsRef<Path>,
    line_ending: LineEnding,
    options: &SaveOptions,
) -> ParseResult<()> {
    write_contents(path.as_ref(), &serialize_entries(entries, line_ending), options)
}

/// Path a backup of `path` is written to
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

pub(crate) fn write_contents(
    path: &Path,
    contents: &str,
    options: &SaveOptions,
) -> ParseResult<()> {
    if options.backup && path.exists() {
        let backup = backup_path(path, &options.backup_suffix);
        fs::copy(path, &backup).map_err(|e| ConfigError::io(&backup, e))?;
        log::info!("backed up '{}' to '{}'", path.display(), backup.display());
    }

    if options.atomic {
        write_atomic(path, contents)?;
    } else {
        fs::write(path, contents).map_err(|e| ConfigError::io(path, e))?;
    }

    log::debug!("wrote {} bytes to '{}'", contents.len(), path.display());
    Ok(())
}

fn write_atomic(path: &Path, contents: &str) -> ParseResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp =
        tempfile::NamedTempFile::new_in(dir).map_err(|e| ConfigError::io(dir, e))?;
    temp.write_all(contents.as_bytes())
        .and_then(|_| temp.as_file().sync_all())
        .map_err(|e| ConfigError::io(temp.path().to_path_buf(), e))?;
    temp.persist(path).map_err(|e| ConfigError::io(path, e.error))?;
    Ok(())
}
