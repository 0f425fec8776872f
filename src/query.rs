//! Query state: sort direction, search field, and search text.
//!
//! These are the only inputs besides the raw contact list that the
//! [`pipeline`](crate::pipeline) depends on. The same enums are used as CLI
//! values, config values, and interactive session arguments, so they all
//! parse from and print as the same lower-case words.

use anyhow::{bail, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of the name sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Label of the sort control: names the order a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            SortOrder::Asc => "Sort Z-A",
            SortOrder::Desc => "Sort A-Z",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => bail!("Unknown sort order: '{}'. Use asc or desc.", other),
        }
    }
}

/// Attribute the search text is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    #[default]
    Name,
    Username,
    Email,
    Phone,
    Website,
    Id,
    Address,
    Company,
}

impl SearchField {
    /// Every field, in field-selector order.
    pub const ALL: [SearchField; 8] = [
        SearchField::Name,
        SearchField::Username,
        SearchField::Email,
        SearchField::Phone,
        SearchField::Website,
        SearchField::Id,
        SearchField::Address,
        SearchField::Company,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Username => "username",
            SearchField::Email => "email",
            SearchField::Phone => "phone",
            SearchField::Website => "website",
            SearchField::Id => "id",
            SearchField::Address => "address",
            SearchField::Company => "company",
        }
    }

    /// Human label shown in the field selector.
    pub fn label(self) -> &'static str {
        match self {
            SearchField::Name => "Name",
            SearchField::Username => "Username",
            SearchField::Email => "Email",
            SearchField::Phone => "Phone",
            SearchField::Website => "Website",
            SearchField::Id => "ID (exact match)",
            SearchField::Address => "Address",
            SearchField::Company => "Company",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        SearchField::ALL
            .into_iter()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = SearchField::ALL.iter().map(|f| f.as_str()).collect();
                anyhow::anyhow!(
                    "Unknown search field: '{}'. Use one of: {}.",
                    wanted,
                    names.join(", ")
                )
            })
    }
}

/// Everything the user controls about the current view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub sort_order: SortOrder,
    pub search_field: SearchField,
    pub search_query: String,
}

impl QueryState {
    pub fn new(search_field: SearchField, sort_order: SortOrder) -> Self {
        Self {
            sort_order,
            search_field,
            search_query: String::new(),
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
        assert_eq!(SortOrder::Asc.toggled().toggled(), SortOrder::Asc);
    }

    #[test]
    fn toggle_label_names_next_direction() {
        assert_eq!(SortOrder::Asc.toggle_label(), "Sort Z-A");
        assert_eq!(SortOrder::Desc.toggle_label(), "Sort A-Z");
    }

    #[test]
    fn parses_fields_case_insensitively() {
        assert_eq!("Company".parse::<SearchField>().unwrap(), SearchField::Company);
        assert_eq!(" id ".parse::<SearchField>().unwrap(), SearchField::Id);
        let err = "zip".parse::<SearchField>().unwrap_err().to_string();
        assert!(err.contains("Unknown search field"));
        assert!(err.contains("website"));
    }

    #[test]
    fn parses_sort_order() {
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!("up".parse::<SortOrder>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        for field in SearchField::ALL {
            assert_eq!(field.to_string().parse::<SearchField>().unwrap(), field);
        }
    }

    #[test]
    fn default_state() {
        let q = QueryState::default();
        assert_eq!(q.sort_order, SortOrder::Asc);
        assert_eq!(q.search_field, SearchField::Name);
        assert!(q.search_query.is_empty());
    }

    #[test]
    fn deserializes_from_lowercase_words() {
        #[derive(Deserialize)]
        struct View {
            field: SearchField,
            order: SortOrder,
        }
        let v: View = toml::from_str("field = \"address\"\norder = \"desc\"").unwrap();
        assert_eq!(v.field, SearchField::Address);
        assert_eq!(v.order, SortOrder::Desc);
    }
}
