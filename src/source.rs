//! Contact source: the one read performed at startup.
//!
//! [`fetch_contacts`] performs the raw read and reports every failure.
//! [`load_directory`] is what the CLI calls: it swallows the failure, logs
//! it, and hands back an empty [`Directory`] so the presentation layer shows
//! the empty-state message instead of an error.
//!
//! # Endpoints
//!
//! | Form | Read |
//! |------|------|
//! | `http://...`, `https://...` | HTTP GET, non-2xx is a failure |
//! | `file:///path/users.json` | read from disk |
//! | `./users.json` | read from disk |
//!
//! There is no retry and no backoff. `timeout_secs` only bounds the HTTP
//! request.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::SourceConfig;
use crate::models::Contact;

/// Where contacts are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Http(String),
    File(PathBuf),
}

impl Endpoint {
    pub fn parse(url: &str) -> Self {
        let url = url.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            Endpoint::Http(url.to_string())
        } else if let Some(path) = url.strip_prefix("file://") {
            Endpoint::File(PathBuf::from(path))
        } else {
            Endpoint::File(PathBuf::from(url))
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Http(url) => f.write_str(url),
            Endpoint::File(path) => write!(f, "file://{}", path.display()),
        }
    }
}

/// The fetched contact list plus its loading flag.
#[derive(Debug, Clone)]
pub struct Directory {
    pub contacts: Vec<Contact>,
    loading: bool,
}

impl Directory {
    /// A directory whose fetch has not completed yet.
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
            loading: true,
        }
    }

    /// A directory that is already loaded with `contacts`.
    pub fn loaded(contacts: Vec<Contact>) -> Self {
        let mut dir = Self::new();
        dir.finish_loading(contacts);
        dir
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Store the fetch result and clear the loading flag. Only the first call
    /// has any effect.
    pub fn finish_loading(&mut self, contacts: Vec<Contact>) {
        if !self.loading {
            return;
        }
        self.contacts = contacts;
        self.loading = false;
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

/// Read the contact list from `config.url`.
pub async fn fetch_contacts(config: &SourceConfig) -> Result<Vec<Contact>> {
    let endpoint = Endpoint::parse(&config.url);
    tracing::debug!(%endpoint, "fetching contacts");

    let body = match &endpoint {
        Endpoint::Http(url) => fetch_http(url, config.timeout_secs).await?,
        Endpoint::File(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read contacts file: {}", path.display()))?,
    };

    parse_contacts(&body).with_context(|| format!("Malformed contact list from {}", endpoint))
}

async fn fetch_http(url: &str, timeout_secs: u64) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;

    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?;

    let status = response.status();
    if !status.is_success() {
        let body_text = response.text().await.unwrap_or_default();
        bail!("Contact endpoint error {}: {}", status, body_text.trim());
    }

    Ok(response.text().await?)
}

/// Decode a JSON array of contacts.
pub fn parse_contacts(body: &str) -> Result<Vec<Contact>> {
    Ok(serde_json::from_str(body)?)
}

/// Fetch once and settle the directory, whatever the outcome.
///
/// On failure the error is logged and the directory is left empty. The
/// loading flag is cleared on both paths.
pub async fn load_directory(config: &SourceConfig) -> Directory {
    let contacts = match fetch_contacts(config).await {
        Ok(contacts) => {
            tracing::info!(count = contacts.len(), "contacts loaded");
            contacts
        }
        Err(e) => {
            tracing::error!(url = %config.url, error = %format!("{:#}", e), "contact fetch failed");
            Vec::new()
        }
    };

    Directory::loaded(contacts)
}
