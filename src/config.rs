/// Options controlling how a document is written back to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOptions {
    /// Copy the existing file to `<file name><backup_suffix>` before overwriting it
    pub backup: bool,

    /// Suffix appended to the file name of a backup copy
    pub backup_suffix: String,

    /// Write to a temporary file in the same directory and rename it over the target.
    /// When false the target is truncated and rewritten in place.
    pub atomic: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            backup: false,
            backup_suffix: ".bak".to_string(),
            atomic: false,
        }
    }
}

impl SaveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    pub fn with_backup_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.backup_suffix = suffix.into();
        self
    }

    pub fn with_atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }
}

/// Document options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Stem of the settings file next to the profile, matched case-insensitively
    pub settings_stem: String,

    /// Extension of the settings file, matched case-insensitively
    pub settings_extension: String,

    /// Options used by [`ConfigDocument::save`](crate::ConfigDocument::save)
    pub save: SaveOptions,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            settings_stem: "dayz".to_string(),
            settings_extension: "cfg".to_string(),
            save: SaveOptions::default(),
        }
    }
}

impl DocumentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings_file(
        mut self,
        stem: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        self.settings_stem = stem.into();
        self.settings_extension = extension.into();
        self
    }

    pub fn with_save_options(mut self, save: SaveOptions) -> Self {
        self.save = save;
        self
    }
}
