//! # dayzcfg
//!
//! Reads, edits and writes back DayZ configuration files: a player's `.DayZProfile` and the
//! companion `dayz.cfg` that lives next to it.
//!
//! Every line is classified into a typed [`Entry`] and kept in file order. Lines that are not
//! understood are preserved verbatim, so saving a document rewrites each file exactly as it
//! was read except for the values that were changed.
//!
//! ## Features
//!
//! - **Line classification**: fixed, ordered rules pick one [`LineType`] per line
//! - **Typed values**: text, key bindings, doubles, integers and booleans as [`Value`] variants
//! - **Case-insensitive lookup**: settings file first, then profile
//! - **Exact round-trip**: unchanged lines, indentation, line endings and BOM are kept
//! - **Safe writes** (opt-in): backup copies and atomic replace via [`SaveOptions`]
//!
//! ## Example
//!
//! ```rust
//! use dayzcfg::{ConfigDocument, ConfigFile};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let profile = ConfigFile::from_text(
//!     "Survivor.DayZProfile",
//!     "version=1;\n\tplayerName=\"Hero\";\n",
//! );
//! let settings = ConfigFile::from_text("dayz.cfg", "vsync=1;\nfov=75.5;\n");
//! let mut doc = ConfigDocument::from_files(profile, settings);
//!
//! assert_eq!(doc.player_name()?, "Hero");
//! assert!(doc.get_bool("VSync")?);
//! assert_eq!(doc.get_double("fov")?, 75.5);
//!
//! doc.set_player_name("Survivor")?;
//! assert_eq!(
//!     doc.serialize_profile(),
//!     "version=1;\n\tplayerName=\"Survivor\";\n"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Files on disk
//!
//! ```no_run
//! use dayzcfg::{ConfigDocument, DocumentOptions, SaveOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = DocumentOptions::new()
//!     .with_save_options(SaveOptions::new().with_backup(true).with_atomic(true));
//!
//! // Finds dayz.cfg next to the profile
//! let mut doc = ConfigDocument::open_with_options("Documents/DayZ/Hero.DayZProfile", options)?;
//! doc.set_bool("vsync", false)?;
//! doc.save()?;
//! # Ok(())
//! # }
//! ```

// Module declarations
mod classifier;
mod config;
mod document;
mod error;
mod loader;
mod parser;
mod types;
mod writer;

// Public API exports
pub use classifier::{BOOLEAN_KEYS, DOUBLE_KEYS, LineType, classify, normalize};
pub use config::{DocumentOptions, SaveOptions};
pub use document::{ConfigDocument, EntryLocation, FileKind};
pub use error::{ConfigError, ParseResult};
pub use loader::{
    ConfigFile, Demotion, LineEnding, find_settings_file, parse_entries, split_lines,
};
pub use parser::{DayzParser, SplitLine};
pub use types::{Entry, Setting, Value};
pub use writer::{backup_path, serialize_entries, write_entries};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
