//! One-shot listing.
//!
//! Fetches once, runs the pipeline for a single query state, and prints the
//! grouped cards (or JSON). Used by `contacts list` and `contacts fields`.

use anyhow::Result;

use crate::config::Config;
use crate::pipeline::{self, ContactGroup};
use crate::query::{QueryState, SearchField};
use crate::render;
use crate::source::{self, Directory};

/// Core list function returning structured data.
pub fn list_contacts(directory: &Directory, query: &QueryState) -> Vec<ContactGroup> {
    pipeline::shape(&directory.contacts, query)
}

/// CLI entry point: fetch, shape, and print.
pub async fn run_list(config: &Config, query: &QueryState, json: bool) -> Result<()> {
    let directory = source::load_directory(&config.source).await;
    let groups = list_contacts(&directory, query);

    if json {
        println!("{}", render::groups_json(&groups)?);
        return Ok(());
    }

    println!("{}", render::render_header(query));
    println!();
    print!("{}", render::render_groups(&groups, directory.is_loading()));
    if !groups.is_empty() {
        println!();
        println!(
            "{} contact(s) in {} group(s)",
            pipeline::total_contacts(&groups),
            groups.len()
        );
    }

    Ok(())
}

/// Print the field selector.
pub fn run_fields(selected: SearchField) -> Result<()> {
    print!("{}", render::render_fields(selected));
    Ok(())
}
