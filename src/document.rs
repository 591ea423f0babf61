//! Document model for a DayZ profile and its companion `dayz.cfg`.
//!
//! A [`ConfigDocument`] owns two [`ConfigFile`]s. Keys are looked up case-insensitively,
//! the settings file first and then the profile; with duplicate keys the first one in file
//! order wins. Entries are never added, removed or reordered, so a load/edit/save cycle
//! keeps every file's line count and order.

use crate::config::{DocumentOptions, SaveOptions};
use crate::error::{ConfigError, ParseResult};
use crate::loader::{self, ConfigFile, Demotion};
use crate::types::{Entry, Setting};
use std::collections::HashMap;
use std::path::Path;

/// Which of the two files an entry lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Profile,
    Settings,
}

/// Location of a setting within the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryLocation {
    pub file: FileKind,
    /// Index into the file's entries, 0-based
    pub index: usize,
}

/// The profile and settings files loaded together
#[derive(Debug, Clone)]
pub struct ConfigDocument {
    profile: ConfigFile,
    settings: ConfigFile,

    /// Lower-cased key -> first location, settings file taking precedence
    key_index: HashMap<String, EntryLocation>,

    options: DocumentOptions,
}

impl ConfigDocument {
    /// Load a profile and an already resolved settings file
    pub fn load(
        profile_path: impl AsRef<Path>,
        settings_path: impl AsRef<Path>,
    ) -> ParseResult<Self> {
        let profile = ConfigFile::load(profile_path)?;
        let settings = ConfigFile::load(settings_path)?;
        Ok(Self::from_files(profile, settings))
    }

    /// Load a profile and the `dayz.cfg` found next to it
    pub fn open(profile_path: impl AsRef<Path>) -> ParseResult<Self> {
        Self::open_with_options(profile_path, DocumentOptions::default())
    }

    /// Load a profile and the settings file named by `options` found next to it
    pub fn open_with_options(
        profile_path: impl AsRef<Path>,
        options: DocumentOptions,
    ) -> ParseResult<Self> {
        let profile_path = profile_path.as_ref();
        let dir = match profile_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let settings_path =
            loader::find_settings_file(dir, &options.settings_stem, &options.settings_extension)?;

        let mut document = Self::load(profile_path, settings_path)?;
        document.options = options;
        Ok(document)
    }

    /// Build a document from files that are already in memory
    pub fn from_files(profile: ConfigFile, settings: ConfigFile) -> Self {
        let mut doc = Self {
            profile,
            settings,
            key_index: HashMap::new(),
            options: DocumentOptions::default(),
        };
        doc.rebuild_index();
        doc
    }

    pub fn with_options(mut self, options: DocumentOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &DocumentOptions {
        &self.options
    }

    /// Rebuild the key index from the current entries
    fn rebuild_index(&mut self) {
        self.key_index.clear();
        // Settings first so its keys shadow the profile's
        let files = [
            (FileKind::Settings, &self.settings),
            (FileKind::Profile, &self.profile),
        ];
        for (kind, file) in files {
            for (index, entry) in file.entries().iter().enumerate() {
                if let Some(key) = entry.key() {
                    self.key_index
                        .entry(key.to_lowercase())
                        .or_insert(EntryLocation { file: kind, index });
                }
            }
        }
    }

    pub fn profile(&self) -> &ConfigFile {
        &self.profile
    }

    pub fn settings(&self) -> &ConfigFile {
        &self.settings
    }

    pub fn file(&self, kind: FileKind) -> &ConfigFile {
        match kind {
            FileKind::Profile => &self.profile,
            FileKind::Settings => &self.settings,
        }
    }

    /// Edit the profile's entries in place; the key index is rebuilt afterwards
    pub fn profile_mut<R>(&mut self, f: impl FnOnce(&mut [Entry]) -> R) -> R {
        self.edit_entries(FileKind::Profile, f)
    }

    /// Edit the settings file's entries in place; the key index is rebuilt afterwards
    pub fn settings_mut<R>(&mut self, f: impl FnOnce(&mut [Entry]) -> R) -> R {
        self.edit_entries(FileKind::Settings, f)
    }

    fn edit_entries<R>(&mut self, kind: FileKind, f: impl FnOnce(&mut [Entry]) -> R) -> R {
        let result = f(self.file_mut(kind).entries_mut());
        self.rebuild_index();
        result
    }

    fn file_mut(&mut self, kind: FileKind) -> &mut ConfigFile {
        match kind {
            FileKind::Profile => &mut self.profile,
            FileKind::Settings => &mut self.settings,
        }
    }

    /// Where the setting for `key` lives, if anywhere
    pub fn locate(&self, key: &str) -> Option<EntryLocation> {
        self.key_index.get(&key.to_lowercase()).copied()
    }

    /// Look up a setting by key, ignoring case
    pub fn get(&self, key: &str) -> Option<&Setting> {
        let location = self.locate(key)?;
        self.file(location.file)
            .entries()
            .get(location.index)
            .and_then(Entry::as_setting)
    }

    /// Look up a setting for in-place mutation
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Setting> {
        let location = self.locate(key)?;
        self.file_mut(location.file)
            .entries_mut()
            .get_mut(location.index)
            .and_then(Entry::as_setting_mut)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.key_index.contains_key(&key.to_lowercase())
    }

    /// Keys of every setting in original casing, settings file first then profile
    pub fn keys(&self) -> Vec<&str> {
        self.settings
            .entries()
            .iter()
            .chain(self.profile.entries())
            .filter_map(Entry::key)
            .collect()
    }

    fn require(&self, key: &str) -> ParseResult<&Setting> {
        self.get(key).ok_or_else(|| ConfigError::key_not_found(key))
    }

    fn require_mut(&mut self, key: &str) -> ParseResult<&mut Setting> {
        self.get_mut(key).ok_or_else(|| ConfigError::key_not_found(key))
    }

    pub fn get_text(&self, key: &str) -> ParseResult<&str> {
        let setting = self.require(key)?;
        setting
            .value()
            .as_text()
            .map_err(|_| ConfigError::type_error(key, "Text", setting.value().type_name()))
    }

    pub fn get_binding(&self, key: &str) -> ParseResult<&str> {
        let setting = self.require(key)?;
        setting
            .value()
            .as_binding()
            .map_err(|_| ConfigError::type_error(key, "KeyBinding", setting.value().type_name()))
    }

    pub fn get_double(&self, key: &str) -> ParseResult<f64> {
        let setting = self.require(key)?;
        setting
            .value()
            .as_double()
            .map_err(|_| ConfigError::type_error(key, "NumberDouble", setting.value().type_name()))
    }

    pub fn get_int(&self, key: &str) -> ParseResult<i32> {
        let setting = self.require(key)?;
        setting
            .value()
            .as_int()
            .map_err(|_| ConfigError::type_error(key, "NumberInt", setting.value().type_name()))
    }

    pub fn get_bool(&self, key: &str) -> ParseResult<bool> {
        let setting = self.require(key)?;
        setting
            .value()
            .as_bool()
            .map_err(|_| ConfigError::type_error(key, "Boolean", setting.value().type_name()))
    }

    pub fn set_text(&mut self, key: &str, value: impl Into<String>) -> ParseResult<()> {
        self.require_mut(key)?.set_text(value)
    }

    pub fn set_binding(&mut self, key: &str, value: impl Into<String>) -> ParseResult<()> {
        self.require_mut(key)?.set_binding(value)
    }

    pub fn set_double(&mut self, key: &str, value: f64) -> ParseResult<()> {
        self.require_mut(key)?.set_double(value)
    }

    pub fn set_int(&mut self, key: &str, value: i32) -> ParseResult<()> {
        self.require_mut(key)?.set_int(value)
    }

    pub fn set_bool(&mut self, key: &str, value: bool) -> ParseResult<()> {
        self.require_mut(key)?.set_bool(value)
    }

    pub fn player_name(&self) -> ParseResult<&str> {
        self.get_text("playerName")
    }

    pub fn set_player_name(&mut self, name: impl Into<String>) -> ParseResult<()> {
        self.set_text("playerName", name)
    }

    /// Lines of either file that were kept unparsed
    pub fn demotions(&self) -> impl Iterator<Item = (FileKind, &Demotion)> {
        self.profile
            .demotions()
            .iter()
            .map(|d| (FileKind::Profile, d))
            .chain(self.settings.demotions().iter().map(|d| (FileKind::Settings, d)))
    }

    /// Whether any setting in either file was changed
    pub fn is_modified(&self) -> bool {
        self.profile
            .entries()
            .iter()
            .chain(self.settings.entries())
            .filter_map(Entry::as_setting)
            .any(Setting::is_modified)
    }

    pub fn serialize_profile(&self) -> String {
        self.profile.serialize()
    }

    pub fn serialize_settings(&self) -> String {
        self.settings.serialize()
    }

    /// Write both files back using the document's save options
    pub fn save(&self) -> ParseResult<()> {
        self.save_with(&self.options.save)
    }

    /// Write both files back, profile first
    pub fn save_with(&self, options: &SaveOptions) -> ParseResult<()> {
        self.profile.save(options)?;
        self.settings.save(options)
    }

    pub fn save_profile(&self) -> ParseResult<()> {
        self.profile.save(&self.options.save)
    }

    pub fn save_settings(&self) -> ParseResult<()> {
        self.settings.save(&self.options.save)
    }
}
