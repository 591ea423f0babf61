//! Rename the player in a DayZ profile.
//!
//! Usage: `cargo run --example rename_player -- <path/to/Name.DayZProfile> <new name>`

use dayzcfg::{ConfigDocument, DocumentOptions, SaveOptions};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let (Some(profile), Some(name)) = (args.next(), args.next()) else {
        eprintln!("usage: rename_player <profile> <new name>");
        std::process::exit(2);
    };

    let options = DocumentOptions::new()
        .with_save_options(SaveOptions::new().with_backup(true).with_atomic(true));
    let mut doc = ConfigDocument::open_with_options(&profile, options)?;

    for (file, demotion) in doc.demotions() {
        eprintln!("warning: {:?} {}", file, demotion);
    }

    println!("Current name: {}", doc.player_name()?);
    doc.set_player_name(name)?;
    doc.save_profile()?;
    println!("New name: {}", doc.player_name()?);

    Ok(())
}
