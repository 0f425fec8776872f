//! Text and JSON rendering for the contact list and the detail overlay.
//!
//! Everything here returns a `String`; callers decide where it goes
//! (stdout for the CLI, the session's writer for `browse`).

use anyhow::Result;
use serde::Serialize;

use crate::models::Contact;
use crate::pipeline::ContactGroup;
use crate::query::{QueryState, SearchField};

pub const LOADING_MESSAGE: &str = "Loading...";
pub const EMPTY_MESSAGE: &str = "The contact book is empty.";

const RULE: &str = "----------------------------------------";

/// Which collapsible sections of the detail overlay are expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailSections {
    pub company: bool,
    pub address: bool,
}

/// Toolbar line: current field, query, and the sort control.
pub fn render_header(query: &QueryState) -> String {
    format!(
        "Contacts  |  field: {}  |  search: \"{}\"  |  [{}]",
        query.search_field.label(),
        query.search_query,
        query.sort_order.toggle_label()
    )
}

/// Compact card: id and name.
pub fn render_card(contact: &Contact) -> String {
    format!("  [{:>3}] {}", contact.id, contact.name)
}

/// The sectioned list, or the loading/empty message.
pub fn render_groups(groups: &[ContactGroup], loading: bool) -> String {
    if loading {
        return format!("{}\n", LOADING_MESSAGE);
    }
    if groups.is_empty() {
        return format!("{}\n", EMPTY_MESSAGE);
    }

    let sections: Vec<String> = groups
        .iter()
        .map(|group| {
            let mut section = format!("{}\n", group.letter);
            for contact in &group.contacts {
                section.push_str(&render_card(contact));
                section.push('\n');
            }
            section
        })
        .collect();
    sections.join("\n")
}

/// The field selector, marking `selected`.
pub fn render_fields(selected: SearchField) -> String {
    SearchField::ALL
        .iter()
        .map(|&field| {
            let marker = if field == selected { '*' } else { ' ' };
            format!("{} {:<10} {}\n", marker, field.as_str(), field.label())
        })
        .collect()
}

fn section_toggle(label: &str, expanded: bool) -> String {
    if expanded {
        format!("[Hide {}]", label)
    } else {
        format!("[View {}]", label)
    }
}

/// Full detail overlay for one contact.
pub fn render_detail(contact: &Contact, sections: DetailSections) -> String {
    let mut lines = vec![contact.name.clone(), format!("ID: {}", contact.id)];
    for row in [
        format!("Username: {}", contact.username),
        format!("Email: {}", contact.email),
        format!("Phone: {}", contact.phone),
        format!("Website: {}", contact.website),
    ] {
        lines.push(RULE.to_string());
        lines.push(row);
    }
    lines.push(RULE.to_string());

    lines.push(String::new());
    lines.push(section_toggle("Company", sections.company));
    if sections.company {
        let c = &contact.company;
        lines.push(format!("  Company Name: {}", c.name));
        lines.push(format!("  Company Catchphrase: {}", c.catch_phrase));
        lines.push(format!("  Business Summary: {}", c.bs));
    }

    lines.push(String::new());
    lines.push(section_toggle("Address", sections.address));
    if sections.address {
        let a = &contact.address;
        lines.push(format!("  {}, {}", a.suite, a.street));
        lines.push(format!("  {}, {}", a.city, a.zipcode));
        lines.push(format!("  Latitude: {}", a.geo.lat));
        lines.push(format!("  Longitude: {}", a.geo.lng));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// JSON output for `list --json`.
pub fn groups_json(groups: &[ContactGroup]) -> Result<String> {
    Ok(serde_json::to_string_pretty(groups)?)
}

#[derive(Serialize)]
struct DetailJson<'a> {
    #[serde(flatten)]
    contact: &'a Contact,
    company_expanded: bool,
    address_expanded: bool,
}

/// JSON output for `show --json`.
pub fn detail_json(contact: &Contact, sections: DetailSections) -> Result<String> {
    Ok(serde_json::to_string_pretty(&DetailJson {
        contact,
        company_expanded: sections.company,
        address_expanded: sections.address,
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::contact;
    use crate::pipeline::group_by_initial;
    use crate::query::SortOrder;

    #[test]
    fn loading_wins_over_empty() {
        assert_eq!(render_groups(&[], true), "Loading...\n");
        assert_eq!(render_groups(&[], false), "The contact book is empty.\n");
    }

    #[test]
    fn renders_sections_in_order() {
        let groups = group_by_initial(vec![
            contact(1, "Alice"),
            contact(2, "alice-clone"),
            contact(3, "Bob"),
        ]);
        let out = render_groups(&groups, false);
        assert_eq!(
            out,
            "A\n  [  1] Alice\n  [  2] alice-clone\n\nB\n  [  3] Bob\n"
        );
    }

    #[test]
    fn header_shows_next_sort_direction() {
        let mut q = QueryState::new(SearchField::Id, SortOrder::Asc).with_query("7");
        assert!(render_header(&q).contains("ID (exact match)"));
        assert!(render_header(&q).contains("\"7\""));
        assert!(render_header(&q).contains("[Sort Z-A]"));
        q.sort_order = SortOrder::Desc;
        assert!(render_header(&q).contains("[Sort A-Z]"));
    }

    #[test]
    fn field_selector_marks_selection() {
        let out = render_fields(SearchField::Company);
        assert_eq!(out.lines().count(), 8);
        assert!(out.lines().any(|l| l.starts_with("* company")));
        assert!(out.lines().any(|l| l.starts_with("  name")));
    }

    #[test]
    fn detail_rules_separate_contact_rows() {
        let out = render_detail(&contact(7, "Kurtis Weissnat"), DetailSections::default());
        let head: Vec<&str> = out.lines().take(11).collect();
        assert_eq!(
            head,
            vec![
                "Kurtis Weissnat",
                "ID: 7",
                RULE,
                "Username: kurtis.weissnat_7",
                RULE,
                "Email: kurtis.weissnat@example.org",
                RULE,
                "Phone: 555-0107",
                RULE,
                "Website: kurtis.weissnat.example.org",
                RULE,
            ]
        );
        assert!(out.ends_with("[View Address]\n"));
    }

    #[test]
    fn collapsed_detail_hides_nested_records() {
        let c = contact(4, "Patricia Lebsack");
        let out = render_detail(&c, DetailSections::default());
        assert!(out.starts_with("Patricia Lebsack\nID: 4\n"));
        assert!(out.contains("[View Company]"));
        assert!(out.contains("[View Address]"));
        assert!(!out.contains("Company Name"));
        assert!(!out.contains("Latitude"));
    }

    #[test]
    fn sections_expand_independently() {
        let c = contact(4, "Patricia Lebsack");
        let out = render_detail(
            &c,
            DetailSections {
                company: true,
                address: false,
            },
        );
        assert!(out.contains("[Hide Company]"));
        assert!(out.contains("Company Catchphrase: Widgets for everyone"));
        assert!(out.contains("[View Address]"));
        assert!(!out.contains("Longitude"));

        let out = render_detail(
            &c,
            DetailSections {
                company: false,
                address: true,
            },
        );
        assert!(out.contains("  Suite 4, Main Street\n"));
        assert!(out.contains("  Springfield, 00000\n"));
        assert!(out.contains("Latitude: 0.0"));
        assert!(!out.contains("Business Summary"));
    }

    #[test]
    fn json_groups_carry_letter_and_contacts() {
        let groups = group_by_initial(vec![contact(1, "Alice")]);
        let v: serde_json::Value = serde_json::from_str(&groups_json(&groups).unwrap()).unwrap();
        assert_eq!(v[0]["letter"], "A");
        assert_eq!(v[0]["contacts"][0]["id"], 1);
        assert_eq!(v[0]["contacts"][0]["company"]["catchPhrase"], "Widgets for everyone");
    }

    #[test]
    fn detail_json_flattens_contact() {
        let c = contact(9, "Glenna Reichert");
        let v: serde_json::Value =
            serde_json::from_str(&detail_json(&c, DetailSections::default()).unwrap()).unwrap();
        assert_eq!(v["name"], "Glenna Reichert");
        assert_eq!(v["company_expanded"], false);
    }
}
