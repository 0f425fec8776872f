//! Interactive browsing session.
//!
//! [`Session`] is the presentation controller behind `contacts browse`. It
//! owns the fetched [`Directory`], the [`QueryState`], and the modal state of
//! the detail overlay. Every state-changing command recomputes the grouped
//! result from scratch through [`pipeline::shape`](crate::pipeline::shape);
//! nothing is patched incrementally.
//!
//! # Commands
//!
//! | Command | Effect |
//! |---------|--------|
//! | `field <name>` | Select the search field |
//! | `search [text]` | Set the search text (omit to clear) |
//! | `clear` | Clear the search text |
//! | `sort` | Toggle ascending / descending |
//! | `open <id>` | Open the detail overlay of a listed contact |
//! | `company` | Show / hide the company section of the open overlay |
//! | `address` | Show / hide the address section of the open overlay |
//! | `close` | Close the overlay |
//! | `fields` | Print the field selector |
//! | `help` | Print this table |
//! | `quit` | Leave the session |

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

use crate::config::Config;
use crate::models::Contact;
use crate::pipeline::{self, ContactGroup};
use crate::query::{QueryState, SearchField};
use crate::render::{self, DetailSections};
use crate::source::{self, Directory};

const HELP: &str = "\
Commands:
  field <name>    select the search field (see `fields`)
  search [text]   set the search text; omit text to clear
  clear           clear the search text
  sort            toggle ascending / descending
  open <id>       open a contact's details
  company         show / hide company details
  address         show / hide address details
  close           close the details
  fields          list searchable fields
  help            show this help
  quit            leave
";

/// One parsed line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Field(SearchField),
    Search(String),
    Clear,
    Sort,
    Open(u64),
    ToggleCompany,
    ToggleAddress,
    Close,
    Fields,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (trimmed, ""),
        };

        let cmd = match word.to_ascii_lowercase().as_str() {
            "field" => Command::Field(rest.parse()?),
            "search" => Command::Search(rest.trim().to_string()),
            "clear" => Command::Clear,
            "sort" => Command::Sort,
            "open" => {
                let id = rest
                    .trim()
                    .parse::<u64>()
                    .with_context(|| format!("invalid contact id: '{}'", rest.trim()))?;
                Command::Open(id)
            }
            "company" => Command::ToggleCompany,
            "address" => Command::ToggleAddress,
            "close" => Command::Close,
            "fields" => Command::Fields,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "" => bail!("empty command"),
            other => bail!("unknown command: '{}'", other),
        };
        Ok(cmd)
    }
}

/// The open detail overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenDetail {
    contact_id: u64,
    sections: DetailSections,
}

/// What the caller should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    directory: Directory,
    query: QueryState,
    groups: Vec<ContactGroup>,
    detail: Option<OpenDetail>,
}

impl Session {
    pub fn new(directory: Directory, query: QueryState) -> Self {
        let mut session = Self {
            directory,
            query,
            groups: Vec::new(),
            detail: None,
        };
        session.recompute();
        session
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn groups(&self) -> &[ContactGroup] {
        &self.groups
    }

    /// The contact shown in the overlay, with its section state.
    pub fn open_detail(&self) -> Option<(&Contact, DetailSections)> {
        let detail = self.detail?;
        self.visible(detail.contact_id)
            .map(|contact| (contact, detail.sections))
    }

    fn visible(&self, id: u64) -> Option<&Contact> {
        self.groups()
            .iter()
            .flat_map(|g| g.contacts.iter())
            .find(|c| c.id == id)
    }

    /// Rebuild the grouped result. An overlay whose contact is no longer
    /// listed is closed.
    fn recompute(&mut self) {
        self.groups = pipeline::shape(&self.directory.contacts, &self.query);
        if let Some(detail) = self.detail {
            if self.visible(detail.contact_id).is_none() {
                self.detail = None;
            }
        }
    }

    pub fn set_search_field(&mut self, field: SearchField) {
        self.query.search_field = field;
        self.recompute();
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.query.search_query = text.into();
        self.recompute();
    }

    pub fn toggle_sort(&mut self) {
        self.query.sort_order = self.query.sort_order.toggled();
        self.recompute();
    }

    /// Open the overlay for a listed contact. Section state starts collapsed,
    /// even when reopening the same contact.
    pub fn open(&mut self, id: u64) -> Result<()> {
        if self.visible(id).is_none() {
            bail!("no listed contact with id {}", id);
        }
        self.detail = Some(OpenDetail {
            contact_id: id,
            sections: DetailSections::default(),
        });
        Ok(())
    }

    pub fn close(&mut self) {
        self.detail = None;
    }

    pub fn toggle_company(&mut self) -> Result<()> {
        let detail = self.detail_mut()?;
        detail.sections.company = !detail.sections.company;
        Ok(())
    }

    pub fn toggle_address(&mut self) -> Result<()> {
        let detail = self.detail_mut()?;
        detail.sections.address = !detail.sections.address;
        Ok(())
    }

    fn detail_mut(&mut self) -> Result<&mut OpenDetail> {
        self.detail
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("no contact is open; use `open <id>` first"))
    }

    pub fn apply(&mut self, cmd: &Command) -> Result<Flow> {
        match cmd {
            Command::Field(field) => self.set_search_field(*field),
            Command::Search(text) => self.set_search_query(text.as_str()),
            Command::Clear => self.set_search_query(""),
            Command::Sort => self.toggle_sort(),
            Command::Open(id) => self.open(*id)?,
            Command::ToggleCompany => self.toggle_company()?,
            Command::ToggleAddress => self.toggle_address()?,
            Command::Close => self.close(),
            Command::Fields | Command::Help => {}
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Header, list, and (if open) the overlay.
    pub fn render(&self) -> String {
        let mut out = render::render_header(self.query());
        out.push_str("\n\n");
        out.push_str(&render::render_groups(
            self.groups(),
            self.directory.is_loading(),
        ));
        if let Some((contact, sections)) = self.open_detail() {
            out.push('\n');
            out.push_str("======== details (close to dismiss) ========\n");
            out.push_str(&render::render_detail(contact, sections));
        }
        out
    }

    /// Drive the session from `input` until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
        prompt: bool,
    ) -> Result<()> {
        write!(output, "{}", self.render())?;

        let mut line = String::new();
        loop {
            if prompt {
                write!(output, "> ")?;
                output.flush()?;
            }
            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            let cmd = match Command::parse(&line) {
                Ok(cmd) => cmd,
                Err(e) => {
                    writeln!(output, "{}. Type `help` for commands.", e)?;
                    continue;
                }
            };

            match self.apply(&cmd) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    writeln!(output, "{}", e)?;
                    continue;
                }
            }

            match cmd {
                Command::Help => write!(output, "{}", HELP)?,
                Command::Fields => {
                    write!(output, "{}", render::render_fields(self.query().search_field))?
                }
                _ => {
                    writeln!(output)?;
                    write!(output, "{}", self.render())?;
                }
            }
        }

        output.flush()?;
        Ok(())
    }
}

/// CLI entry point for `contacts browse`.
///
/// Shows the loading indicator while the one fetch is in flight, then hands
/// stdin and stdout to the session.
pub async fn run_browse(config: &Config, query: QueryState) -> Result<()> {
    let interactive = atty::is(atty::Stream::Stdin);
    if interactive {
        println!("{}", render::LOADING_MESSAGE);
    }

    let directory = source::load_directory(&config.source).await;
    let mut session = Session::new(directory, query);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session.run(stdin.lock(), stdout.lock(), interactive)
}
