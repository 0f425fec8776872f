//! Contact detail by id.
//!
//! Fetches once and prints the detail overlay for a single contact, with the
//! company and address sections expanded on request.

use anyhow::{bail, Result};

use crate::config::Config;
use crate::models::Contact;
use crate::render::{self, DetailSections};
use crate::source::{self, Directory};

/// Core lookup returning the contact (used by CLI and tests).
pub fn find_contact(directory: &Directory, id: u64) -> Result<&Contact> {
    match directory.contacts.iter().find(|c| c.id == id) {
        Some(contact) => Ok(contact),
        None => bail!("contact not found: {}", id),
    }
}

/// CLI entry point: fetch, look up, and print.
pub async fn run_show(
    config: &Config,
    id: u64,
    sections: DetailSections,
    json: bool,
) -> Result<()> {
    let directory = source::load_directory(&config.source).await;

    let contact = match find_contact(&directory, id) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if json {
        println!("{}", render::detail_json(contact, sections)?);
    } else {
        print!("{}", render::render_detail(contact, sections));
    }

    Ok(())
}
