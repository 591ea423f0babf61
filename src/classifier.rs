//! Line classification.
//!
//! Every line of a profile or `dayz.cfg` file is assigned exactly one [`LineType`] by a fixed,
//! ordered set of textual rules. Several rules overlap (a key binding line also contains
//! `=` and `;`), so the first matching rule wins:
//!
//! 1. starts with `playername` or `lastmpservername` → [`LineType::SpecialText`]
//! 2. contains `[`, `]`, `{`, `}` and `;` → [`LineType::KeyBinding`]
//! 3. contains `"`, `;` and `=` → [`LineType::Text`]
//! 4. contains `.`, `;` and `=` → [`LineType::NumberDouble`]
//! 5. contains `;` and `=` → [`LineType::Boolean`], [`LineType::NumberDouble`] or
//!    [`LineType::NumberInt`] depending on the key
//! 6. anything else → [`LineType::Misc`]

use std::fmt;

/// Keys whose `0`/`1` values are read as booleans
pub const BOOLEAN_KEYS: &[&str] = &[
    "windowed",
    "ssaoenabled",
    "vsync",
    "perspective",
    "trackir",
    "freetrack",
    "triplehead",
    "showtitles",
    "useimperialsystem",
    "vehiclefreelook",
    "showradio",
    "battleyelicense",
];

/// Keys that hold floating point values even when written without a decimal point
pub const DOUBLE_KEYS: &[&str] = &["headbob", "gamma", "bloom", "fov", "mousesmoothing"];

const SPECIAL_TEXT_PREFIXES: &[&str] = &["playername", "lastmpservername"];

/// Structural kind of a configuration line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineType {
    Text,
    SpecialText,
    KeyBinding,
    NumberDouble,
    NumberInt,
    Boolean,
    Misc,
}

impl LineType {
    /// Classify a raw line as read from disk
    pub fn of(line: &str) -> Self {
        classify(&normalize(line))
    }

    pub fn name(&self) -> &'static str {
        match self {
            LineType::Text => "Text",
            LineType::SpecialText => "SpecialText",
            LineType::KeyBinding => "KeyBinding",
            LineType::NumberDouble => "NumberDouble",
            LineType::NumberInt => "NumberInt",
            LineType::Boolean => "Boolean",
            LineType::Misc => "Misc",
        }
    }
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strip leading tabs and lower-case a line for pattern matching.
///
/// The result is only used to pick a [`LineType`]; stored keys and values keep their
/// original casing.
pub fn normalize(line: &str) -> String {
    line.trim_start_matches('\t').to_lowercase()
}

/// Classify a line already passed through [`normalize`]
pub fn classify(line: &str) -> LineType {
    if SPECIAL_TEXT_PREFIXES
        .iter()
        .any(|prefix| line.starts_with(prefix))
    {
        return LineType::SpecialText;
    }

    if contains_all(line, &['[', ']', '{', '}', ';']) {
        return LineType::KeyBinding;
    }

    if contains_all(line, &['"', ';', '=']) {
        return LineType::Text;
    }

    if contains_all(line, &['.', ';', '=']) {
        return LineType::NumberDouble;
    }

    if contains_all(line, &[';', '=']) {
        let key = line.split('=').next().unwrap_or_default();

        if BOOLEAN_KEYS.contains(&key) {
            return LineType::Boolean;
        }
        if is_double_key(key) {
            return LineType::NumberDouble;
        }
        return LineType::NumberInt;
    }

    LineType::Misc
}

/// Whether `key` reads as a double even without a decimal point
pub fn is_double_key(key: &str) -> bool {
    DOUBLE_KEYS.contains(&key.to_lowercase().as_str())
}

fn contains_all(line: &str, needles: &[char]) -> bool {
    needles.iter().all(|c| line.contains(*c))
}
