//! Reading configuration files into ordered entry lists.
//!
//! Loading never rejects a line. Lines that match a setting pattern but cannot be decoded
//! are kept as [`Entry::Misc`] and reported as a [`Demotion`] so callers can tell the user.

use crate::classifier::{self, LineType};
use crate::config::SaveOptions;
use crate::error::{ConfigError, ParseResult};
use crate::types::{Entry, Setting};
use crate::writer;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const BOM: char = '\u{feff}';

/// Line terminator used when writing a file back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Detect the terminator from the first terminated line; unterminated text is LF
    pub fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(idx) if text[..idx].ends_with('\r') => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// A line that looked like a setting but was kept as Misc
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demotion {
    /// 1-based line number
    pub line: usize,

    /// Kind the classifier picked for the line
    pub kind: LineType,

    pub reason: String,
}

impl fmt::Display for Demotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} ({}): {}", self.line, self.kind, self.reason)
    }
}

/// Split `text` into lines, each paired with the terminator that ended it.
///
/// A final line without a terminator is paired with `default`.
pub fn split_lines(text: &str, default: LineEnding) -> Vec<(&str, LineEnding)> {
    text.split_inclusive('\n')
        .map(|line| match line.strip_suffix('\n') {
            Some(rest) => match rest.strip_suffix('\r') {
                Some(rest) => (rest, LineEnding::CrLf),
                None => (rest, LineEnding::Lf),
            },
            None => (line, default),
        })
        .collect()
}

/// Classify every line of `text`, in order
pub fn parse_entries(text: &str) -> (Vec<Entry>, Vec<Demotion>) {
    classify_lines(split_lines(text, LineEnding::Lf).into_iter().map(|(line, _)| line))
}

fn classify_lines<'a>(lines: impl Iterator<Item = &'a str>) -> (Vec<Entry>, Vec<Demotion>) {
    let mut entries = Vec::new();
    let mut demotions = Vec::new();

    for (idx, line) in lines.enumerate() {
        let kind = classifier::classify(&classifier::normalize(line));
        if kind == LineType::Misc {
            entries.push(Entry::Misc(line.to_string()));
            continue;
        }

        match Setting::from_line(kind, line) {
            Ok(setting) => entries.push(Entry::Setting(setting)),
            Err(err) => {
                let err = err.at_line(idx + 1);
                demotions.push(Demotion {
                    line: idx + 1,
                    kind,
                    reason: err.to_string(),
                });
                entries.push(Entry::Misc(line.to_string()));
            }
        }
    }

    (entries, demotions)
}

/// One configuration file held in memory
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
    entries: Vec<Entry>,
    /// Terminator of each entry's line, parallel to `entries`
    endings: Vec<LineEnding>,
    line_ending: LineEnding,
    bom: bool,
    demotions: Vec<Demotion>,
}

impl ConfigFile {
    /// Read and classify a file
    pub fn load(path: impl AsRef<Path>) -> ParseResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let file = Self::from_text(path, &content);

        log::debug!(
            "loaded {} entries from '{}' ({:?} line endings)",
            file.entries.len(),
            path.display(),
            file.line_ending
        );

        Ok(file)
    }

    /// Classify in-memory `text` that belongs to `path`
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        let path = path.into();
        let (bom, text) = match text.strip_prefix(BOM) {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let line_ending = LineEnding::detect(text);
        let lines = split_lines(text, line_ending);
        let endings = lines.iter().map(|(_, ending)| *ending).collect();
        let (entries, demotions) = classify_lines(lines.into_iter().map(|(line, _)| line));

        for demotion in &demotions {
            log::warn!("'{}': kept {} as an unparsed line", path.display(), demotion);
        }

        Self {
            path,
            entries,
            endings,
            line_ending,
            bom,
            demotions,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries can be modified in place but not added or removed
    pub fn entries_mut(&mut self) -> &mut [Entry] {
        &mut self.entries
    }

    /// Terminator of the first line, used for lines that had none
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Terminator of every line, in entry order
    pub fn line_endings(&self) -> &[LineEnding] {
        &self.endings
    }

    /// Whether the file started with a UTF-8 byte order mark
    pub fn has_bom(&self) -> bool {
        self.bom
    }

    pub fn demotions(&self) -> &[Demotion] {
        &self.demotions
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render every entry followed by the terminator it was read with
    pub fn serialize(&self) -> String {
        let body = writer::serialize_lines(&self.entries, &self.endings, self.line_ending);
        if self.bom {
            format!("{BOM}{body}")
        } else {
            body
        }
    }

    /// Write the file back to its own path
    pub fn save(&self, options: &SaveOptions) -> ParseResult<()> {
        writer::write_contents(&self.path, &self.serialize(), options)
    }
}

/// Find the settings file in `dir` whose stem and extension match case-insensitively.
///
/// Candidates are ordered by file name so the result does not depend on directory order.
pub fn find_settings_file(
    dir: impl AsRef<Path>,
    stem: &str,
    extension: &str,
) -> ParseResult<PathBuf> {
    let dir = dir.as_ref();
    let read_dir = fs::read_dir(dir).map_err(|e| ConfigError::io(dir, e))?;

    let mut candidates = Vec::new();
    for dir_entry in read_dir {
        let path = dir_entry.map_err(|e| ConfigError::io(dir, e))?.path();
        if !path.is_file() {
            continue;
        }
        let stem_matches = path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|s| s.eq_ignore_ascii_case(stem));
        let extension_matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension));
        if stem_matches && extension_matches {
            candidates.push(path);
        }
    }

    candidates.sort();
    candidates
        .into_iter()
        .next()
        .ok_or_else(|| ConfigError::settings_file_not_found(dir, stem, extension))
}
