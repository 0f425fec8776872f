//! Core data models used throughout Contact Harness.
//!
//! These types mirror the JSON returned by the contact endpoint. They are
//! deserialized once at startup and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// One directory entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: Address,
    pub company: Company,
}

/// Postal address of a contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Geographic coordinates, kept as the strings the endpoint sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

/// Employer of a contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    pub bs: String,
}

/// Depth-first visit over the string leaves of a nested record.
///
/// `visit` returns `true` to stop the walk; the method returns whether any
/// call did. Nested records delegate to their children, so `Address` reaches
/// `Geo` without any runtime type inspection.
pub trait NestedFields {
    fn any_leaf(&self, visit: &mut dyn FnMut(&str) -> bool) -> bool;
}

impl NestedFields for Geo {
    fn any_leaf(&self, visit: &mut dyn FnMut(&str) -> bool) -> bool {
        visit(&self.lat) || visit(&self.lng)
    }
}

impl NestedFields for Address {
    fn any_leaf(&self, visit: &mut dyn FnMut(&str) -> bool) -> bool {
        visit(&self.street)
            || visit(&self.suite)
            || visit(&self.city)
            || visit(&self.zipcode)
            || self.geo.any_leaf(visit)
    }
}

impl NestedFields for Company {
    fn any_leaf(&self, visit: &mut dyn FnMut(&str) -> bool) -> bool {
        visit(&self.name) || visit(&self.catch_phrase) || visit(&self.bs)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Build a contact whose nested records are derived from `name`.
    pub fn contact(id: u64, name: &str) -> Contact {
        let slug = name.to_lowercase().replace(' ', ".");
        Contact {
            id,
            name: name.to_string(),
            username: format!("{}_{}", slug, id),
            email: format!("{}@example.org", slug),
            phone: format!("555-01{:02}", id),
            website: format!("{}.example.org", slug),
            address: Address {
                street: "Main Street".to_string(),
                suite: format!("Suite {}", id),
                city: "Springfield".to_string(),
                zipcode: "00000".to_string(),
                geo: Geo {
                    lat: "0.0".to_string(),
                    lng: "0.0".to_string(),
                },
            },
            company: Company {
                name: "Acme".to_string(),
                catch_phrase: "Widgets for everyone".to_string(),
                bs: "synergize supply chains".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    }"#;

    #[test]
    fn deserializes_endpoint_shape() {
        let c: Contact = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(c.id, 1);
        assert_eq!(c.company.catch_phrase, "Multi-layered client-server neural-net");
        assert_eq!(c.address.geo.lng, "81.1496");
    }

    #[test]
    fn serializes_catch_phrase_in_camel_case() {
        let c: Contact = serde_json::from_str(SAMPLE).unwrap();
        let json = serde_json::to_value(&c).unwrap();
        assert!(json["company"]["catchPhrase"].is_string());
        assert!(json["company"].get("catch_phrase").is_none());
    }

    #[test]
    fn missing_nested_record_is_rejected() {
        let broken = r#"{"id": 2, "name": "No Address", "username": "x",
            "email": "x", "phone": "x", "website": "x",
            "company": {"name": "a", "catchPhrase": "b", "bs": "c"}}"#;
        assert!(serde_json::from_str::<Contact>(broken).is_err());
    }

    #[test]
    fn address_walk_reaches_geo() {
        let c: Contact = serde_json::from_str(SAMPLE).unwrap();
        let mut seen = Vec::new();
        let hit = c.address.any_leaf(&mut |leaf: &str| {
            seen.push(leaf.to_string());
            false
        });
        assert!(!hit);
        assert_eq!(
            seen,
            vec!["Kulas Light", "Apt. 556", "Gwenborough", "92998-3874", "-37.3159", "81.1496"]
        );
    }

    #[test]
    fn walk_stops_at_first_hit() {
        let c: Contact = serde_json::from_str(SAMPLE).unwrap();
        let mut visited = 0;
        let hit = c.company.any_leaf(&mut |leaf: &str| {
            visited += 1;
            leaf.starts_with("Romaguera")
        });
        assert!(hit);
        assert_eq!(visited, 1);
    }
}
