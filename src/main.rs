//! # Contact Harness CLI (`contacts`)
//!
//! The `contacts` binary fetches a contact list once and shows it sorted,
//! filtered, and grouped by initial.
//!
//! ## Usage
//!
//! ```bash
//! contacts --config ./config/contacts.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `contacts list` | Print contacts grouped by first letter |
//! | `contacts show <id>` | Print one contact's details |
//! | `contacts fields` | List searchable fields |
//! | `contacts browse` | Interactive session |
//!
//! ## Examples
//!
//! ```bash
//! # Everyone whose address mentions "Gwenborough"
//! contacts list --field address --query gwenborough
//!
//! # Exact id match
//! contacts list --field id --query 1
//!
//! # Read from a local fixture instead of the network
//! contacts --url ./fixtures/users.json list --json
//! ```

mod config;
mod list;
mod models;
mod pipeline;
mod query;
mod render;
mod session;
mod show;
mod source;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::query::{QueryState, SearchField, SortOrder};
use crate::render::DetailSections;

/// Contact Harness CLI: a terminal contact directory.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. A missing file falls back to built-in defaults.
#[derive(Parser)]
#[command(
    name = "contacts",
    about = "Contact Harness — fetch, sort, filter, and group a contact directory",
    version,
    long_about = "Contact Harness reads a JSON array of contacts from an HTTP endpoint \
    (or a local file) once, then sorts them by name, filters them by one of eight fields, \
    and groups them by first letter."
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/contacts.toml")]
    config: PathBuf,

    /// Contact endpoint; overrides `[source].url`.
    ///
    /// `http(s)://` URLs are fetched; `file://` URLs and plain paths are read
    /// from disk.
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// List contacts grouped by the first letter of their name.
    List {
        /// Field the query is matched against. Defaults to `[view].field`.
        #[arg(long, value_enum)]
        field: Option<SearchField>,

        /// Search text. Empty matches everything.
        #[arg(long, default_value = "")]
        query: String,

        /// Sort direction by name. Defaults to `[view].order`.
        #[arg(long, value_enum)]
        order: Option<SortOrder>,

        /// Print JSON instead of cards.
        #[arg(long)]
        json: bool,
    },

    /// Show one contact's details.
    Show {
        /// Contact id.
        id: u64,

        /// Expand the company section.
        #[arg(long)]
        company: bool,

        /// Expand the address section.
        #[arg(long)]
        address: bool,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// List the searchable fields.
    Fields,

    /// Browse interactively: type commands, the list re-renders after each.
    ///
    /// Type `help` inside the session for the command list.
    Browse,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut cfg = config::load_or_default(&cli.config)?;
    if let Some(url) = cli.url {
        cfg.source.url = url;
        config::validate(&cfg)?;
    }

    match cli.command {
        Commands::List {
            field,
            query,
            order,
            json,
        } => {
            let state = QueryState::new(
                field.unwrap_or(cfg.view.field),
                order.unwrap_or(cfg.view.order),
            )
            .with_query(query);
            list::run_list(&cfg, &state, json).await?;
        }
        Commands::Show {
            id,
            company,
            address,
            json,
        } => {
            show::run_show(&cfg, id, DetailSections { company, address }, json).await?;
        }
        Commands::Fields => {
            list::run_fields(cfg.view.field)?;
        }
        Commands::Browse => {
            let state = QueryState::new(cfg.view.field, cfg.view.order);
            session::run_browse(&cfg, state).await?;
        }
    }

    Ok(())
}
