use crate::classifier::{self, LineType};
use crate::error::{ConfigError, ParseResult};
use crate::parser::DayzParser;
use std::fmt;

/// Typed payload of a setting line, one variant per non-Misc [`LineType`]
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Quoted string, stored without the quotes
    Text(String),

    /// Quoted string identifying the player or server
    SpecialText(String),

    /// Opaque binding list such as `{17,200}`
    KeyBinding(String),

    /// 64-bit floating point, always written with `.` as the decimal separator
    NumberDouble(f64),

    /// 32-bit signed integer
    NumberInt(i32),

    /// `1` is true, anything else reads as false
    Boolean(bool),
}

impl Value {
    /// Decode the value segment of a line for the given kind
    pub fn parse(kind: LineType, text: &str) -> ParseResult<Self> {
        match kind {
            LineType::Text => Ok(Value::Text(unquote(text).to_string())),
            LineType::SpecialText => Ok(Value::SpecialText(unquote(text).to_string())),
            LineType::KeyBinding => Ok(Value::KeyBinding(text.to_string())),
            LineType::NumberDouble => parse_double(text).map(Value::NumberDouble),
            LineType::NumberInt => text
                .parse::<i32>()
                .map(Value::NumberInt)
                .map_err(|e| ConfigError::invalid_number(text, e.to_string())),
            LineType::Boolean => Ok(Value::Boolean(text == "1")),
            LineType::Misc => Err(ConfigError::custom("Misc lines carry no value")),
        }
    }

    pub fn kind(&self) -> LineType {
        match self {
            Value::Text(_) => LineType::Text,
            Value::SpecialText(_) => LineType::SpecialText,
            Value::KeyBinding(_) => LineType::KeyBinding,
            Value::NumberDouble(_) => LineType::NumberDouble,
            Value::NumberInt(_) => LineType::NumberInt,
            Value::Boolean(_) => LineType::Boolean,
        }
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Try to get the value as text (Text or SpecialText)
    pub fn as_text(&self) -> ParseResult<&str> {
        match self {
            Value::Text(s) | Value::SpecialText(s) => Ok(s.as_str()),
            _ => Err(ConfigError::type_error("value", "Text", self.type_name())),
        }
    }

    /// Try to get the value as a raw key binding
    pub fn as_binding(&self) -> ParseResult<&str> {
        match self {
            Value::KeyBinding(s) => Ok(s.as_str()),
            _ => Err(ConfigError::type_error("value", "KeyBinding", self.type_name())),
        }
    }

    /// Try to get the value as a double; integers widen
    pub fn as_double(&self) -> ParseResult<f64> {
        match self {
            Value::NumberDouble(v) => Ok(*v),
            Value::NumberInt(v) => Ok(f64::from(*v)),
            _ => Err(ConfigError::type_error("value", "NumberDouble", self.type_name())),
        }
    }

    /// Try to get the value as an integer
    pub fn as_int(&self) -> ParseResult<i32> {
        match self {
            Value::NumberInt(v) => Ok(*v),
            _ => Err(ConfigError::type_error("value", "NumberInt", self.type_name())),
        }
    }

    /// Try to get the value as a boolean
    pub fn as_bool(&self) -> ParseResult<bool> {
        match self {
            Value::Boolean(v) => Ok(*v),
            _ => Err(ConfigError::type_error("value", "Boolean", self.type_name())),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) | Value::SpecialText(s) => write!(f, "\"{}\"", s),
            Value::KeyBinding(s) => f.write_str(s),
            // f64's Display never uses the host locale or exponent notation
            Value::NumberDouble(v) => write!(f, "{}", v),
            Value::NumberInt(v) => write!(f, "{}", v),
            Value::Boolean(v) => f.write_str(if *v { "1" } else { "0" }),
        }
    }
}

fn unquote(text: &str) -> &str {
    text.trim_matches('"')
}

fn parse_double(text: &str) -> ParseResult<f64> {
    let value = text
        .parse::<f64>()
        .map_err(|e| ConfigError::invalid_number(text, e.to_string()))?;
    if !value.is_finite() {
        return Err(ConfigError::invalid_number(text, "value is not finite"));
    }
    Ok(value)
}

/// A classified `key=value;` line
///
/// While a setting is unmutated it keeps the exact line it was read from and writes that
/// line back verbatim. Any mutation drops the original text and the setting is rendered as
/// `<tabs>key=value;`.
#[derive(Debug, Clone)]
pub struct Setting {
    indentation: usize,
    key: String,
    value: Value,
    /// Original line, cleared on mutation
    raw: Option<String>,
}

impl Setting {
    /// Create a setting that has no source line
    pub fn new(indentation: usize, key: impl Into<String>, value: Value) -> Self {
        Self {
            indentation,
            key: key.into(),
            value,
            raw: None,
        }
    }

    /// Build a setting of the given kind from a full line (tabs included)
    pub fn from_line(kind: LineType, line: &str) -> ParseResult<Self> {
        if kind == LineType::Misc {
            return Err(ConfigError::custom("Misc lines carry no setting"));
        }

        let split = DayzParser::split_line(line)?;
        let value = Value::parse(kind, split.value)?;

        Ok(Self {
            indentation: split.indentation,
            key: split.key.to_string(),
            value,
            raw: Some(line.to_string()),
        })
    }

    pub fn indentation(&self) -> usize {
        self.indentation
    }

    /// Key in its original casing
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn kind(&self) -> LineType {
        self.value.kind()
    }

    /// Whether the setting changed since it was read
    pub fn is_modified(&self) -> bool {
        self.raw.is_none()
    }

    /// Case-insensitive key comparison
    pub fn matches_key(&self, key: &str) -> bool {
        self.key.to_lowercase() == key.to_lowercase()
    }

    /// Mutable access to the payload; no kind check is made
    pub fn value_mut(&mut self) -> &mut Value {
        self.raw = None;
        &mut self.value
    }

    /// Replace the payload; the kind may change
    pub fn set_value(&mut self, value: Value) {
        self.raw = None;
        self.value = value;
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> ParseResult<()> {
        let text = self.check_single_line(text.into())?;
        let value = match self.value {
            Value::Text(_) => Value::Text(text),
            Value::SpecialText(_) => Value::SpecialText(text),
            _ => return Err(self.type_mismatch("Text")),
        };
        self.replace_checked(value)
    }

    pub fn set_binding(&mut self, binding: impl Into<String>) -> ParseResult<()> {
        let binding = self.check_single_line(binding.into())?;
        match self.value {
            Value::KeyBinding(_) => self.replace_checked(Value::KeyBinding(binding)),
            _ => Err(self.type_mismatch("KeyBinding")),
        }
    }

    pub fn set_double(&mut self, value: f64) -> ParseResult<()> {
        if !value.is_finite() {
            return Err(ConfigError::invalid_number(
                value.to_string(),
                "value is not finite",
            ));
        }
        match self.value {
            Value::NumberDouble(_) => self.replace_checked(Value::NumberDouble(value)),
            _ => Err(self.type_mismatch("NumberDouble")),
        }
    }

    pub fn set_int(&mut self, value: i32) -> ParseResult<()> {
        match self.value {
            Value::NumberInt(_) => self.replace_checked(Value::NumberInt(value)),
            _ => Err(self.type_mismatch("NumberInt")),
        }
    }

    pub fn set_bool(&mut self, value: bool) -> ParseResult<()> {
        match self.value {
            Value::Boolean(_) => self.replace_checked(Value::Boolean(value)),
            _ => Err(self.type_mismatch("Boolean")),
        }
    }

    /// Store `value` only if the rendered line classifies and decodes back to it
    fn replace_checked(&mut self, value: Value) -> ParseResult<()> {
        let candidate = Setting::new(self.indentation, self.key.clone(), value);
        match Entry::from_line(&candidate.to_string()) {
            Entry::Setting(reread) if reread == candidate => {
                self.set_value(candidate.value);
                Ok(())
            }
            Entry::Setting(reread) => Err(ConfigError::invalid_value(
                &self.key,
                format!("would read back as {} {}", reread.kind(), reread.value()),
            )),
            Entry::Misc(_) => Err(ConfigError::invalid_value(
                &self.key,
                "would read back as Misc",
            )),
        }
    }

    fn type_mismatch(&self, expected: &str) -> ConfigError {
        ConfigError::type_error(&self.key, expected, self.value.type_name())
    }

    fn check_single_line(&self, text: String) -> ParseResult<String> {
        if text.contains(['\n', '\r']) {
            return Err(ConfigError::invalid_value(
                &self.key,
                "must not contain line breaks",
            ));
        }
        Ok(text)
    }
}

impl PartialEq for Setting {
    fn eq(&self, other: &Self) -> bool {
        self.indentation == other.indentation && self.key == other.key && self.value == other.value
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(raw) = &self.raw {
            return f.write_str(raw);
        }
        for _ in 0..self.indentation {
            f.write_str("\t")?;
        }
        match self.value {
            // Without a decimal point only DOUBLE_KEYS read back as doubles
            Value::NumberDouble(v)
                if v.fract() == 0.0 && !classifier::is_double_key(&self.key) =>
            {
                write!(f, "{}={}.0;", self.key, v)
            }
            _ => write!(f, "{}={};", self.key, self.value),
        }
    }
}

/// One line of a configuration file
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A recognized `key=value;` line
    Setting(Setting),

    /// Any other line, kept byte for byte
    Misc(String),
}

impl Entry {
    /// Classify and build an entry from a raw line.
    ///
    /// Lines that look like settings but fail to decode become [`Entry::Misc`].
    pub fn from_line(line: &str) -> Self {
        let kind = classifier::classify(&classifier::normalize(line));
        Self::try_from_line(kind, line).unwrap_or_else(|_| Entry::Misc(line.to_string()))
    }

    /// Build an entry of an already classified kind, reporting decode failures
    pub fn try_from_line(kind: LineType, line: &str) -> ParseResult<Self> {
        match kind {
            LineType::Misc => Ok(Entry::Misc(line.to_string())),
            _ => Setting::from_line(kind, line).map(Entry::Setting),
        }
    }

    pub fn kind(&self) -> LineType {
        match self {
            Entry::Setting(setting) => setting.kind(),
            Entry::Misc(_) => LineType::Misc,
        }
    }

    /// Key of the entry; Misc lines have none
    pub fn key(&self) -> Option<&str> {
        match self {
            Entry::Setting(setting) => Some(setting.key()),
            Entry::Misc(_) => None,
        }
    }

    pub fn as_setting(&self) -> Option<&Setting> {
        match self {
            Entry::Setting(setting) => Some(setting),
            Entry::Misc(_) => None,
        }
    }

    pub fn as_setting_mut(&mut self) -> Option<&mut Setting> {
        match self {
            Entry::Setting(setting) => Some(setting),
            Entry::Misc(_) => None,
        }
    }

    pub fn is_misc(&self) -> bool {
        matches!(self, Entry::Misc(_))
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Setting(setting) => fmt::Display::fmt(setting, f),
            Entry::Misc(raw) => f.write_str(raw),
        }
    }
}
