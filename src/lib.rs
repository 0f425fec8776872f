//! # Contact Harness
//!
//! A terminal contact directory.
//!
//! Contact Harness reads a list of contacts from a JSON endpoint once at
//! startup, then sorts, filters, and groups it in memory for display as
//! sectioned cards with an expandable detail view.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   ┌──────────────────────┐   ┌──────────────┐
//! │   Source    │──▶│       Pipeline       │──▶│   Render     │
//! │ HTTP / file │   │ sort → filter → group│   │ cards/detail │
//! └─────────────┘   └──────────▲───────────┘   └──────┬───────┘
//!                              │ QueryState           │
//!                        ┌─────┴──────┐               │
//!                        │  Session   │◀──────────────┘
//!                        │ (browse)   │
//!                        └────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! contacts list                                # all contacts, A-Z
//! contacts list --field company --query "neural"
//! contacts list --order desc --json
//! contacts show 3 --company --address
//! contacts browse                              # interactive session
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Contact records and nested-field traversal |
//! | [`query`] | Sort order, search field, query state |
//! | [`source`] | One-shot contact fetch and loading state |
//! | [`pipeline`] | Sort, filter, and group |
//! | [`render`] | Text and JSON output |
//! | [`list`] | `contacts list` / `contacts fields` |
//! | [`show`] | `contacts show` |
//! | [`session`] | `contacts browse` controller |

pub mod config;
pub mod list;
pub mod models;
pub mod pipeline;
pub mod query;
pub mod render;
pub mod session;
pub mod show;
pub mod source;
