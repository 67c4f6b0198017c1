//! Types shared by every resource

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Navigation link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Target URL
    pub href: String,
    /// Content type of the target, e.g. `application/hal+json`
    #[serde(rename = "type")]
    pub content_type: String,
}

/// An entity's `_links` map.
///
/// Keys vary per resource and per state (a payment only has `checkout`
/// while it is open). Links the API sends as `null` are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Option<Link>>")]
pub struct Links(BTreeMap<String, Link>);

impl From<BTreeMap<String, Option<Link>>> for Links {
    fn from(map: BTreeMap<String, Option<Link>>) -> Self {
        Self(
            map.into_iter()
                .filter_map(|(name, link)| link.map(|link| (name, link)))
                .collect(),
        )
    }
}

impl Links {
    /// Get a link by name
    pub fn get(&self, name: &str) -> Option<&Link> {
        self.0.get(name)
    }

    /// The entity's own API URL
    pub fn self_link(&self) -> Option<&Link> {
        self.get("self")
    }

    /// Hosted checkout URL
    pub fn checkout(&self) -> Option<&Link> {
        self.get("checkout")
    }

    /// Dashboard URL
    pub fn dashboard(&self) -> Option<&Link> {
        self.get("dashboard")
    }

    /// API documentation URL
    pub fn documentation(&self) -> Option<&Link> {
        self.get("documentation")
    }

    /// Iterate over all present links
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Link)> {
        self.0.iter().map(|(name, link)| (name.as_str(), link))
    }

    /// Number of present links
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no links are present
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Cursor pagination parameters for list endpoints.
///
/// Unset fields are omitted from the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    /// Id of the first entity to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Maximum number of entities to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ListParams {
    /// Empty parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at the given entity id
    pub fn from(mut self, id: impl Into<String>) -> Self {
        self.from = Some(id.into());
        self
    }

    /// Limit the page size
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Navigation links of a list response.
///
/// `next` and `previous` are ready-made URLs; the client never follows them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListLinks {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<Link>,
}

/// Metadata attached to every list response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMetadata {
    /// Number of entities in this page
    #[serde(default)]
    pub count: u32,
    /// Navigation links
    #[serde(rename = "_links", default)]
    pub links: ListLinks,
}

impl ListMetadata {
    /// Check if a following page exists
    pub fn has_next(&self) -> bool {
        self.links.next.is_some()
    }
}

/// Postal and contact details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_and_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_additional: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// ISO 3166-1 alpha-2 country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Live or test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Live,
    Test,
}

/// Position of a payment in a recurring sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceType {
    Oneoff,
    First,
    Recurring,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_query() {
        let params = ListParams::new().from("ord_kEn1PlbGa").limit(1);
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, serde_json::json!({"from": "ord_kEn1PlbGa", "limit": 1}));

        let empty = serde_json::to_value(ListParams::new()).unwrap();
        assert_eq!(empty, serde_json::json!({}));
    }

    #[test]
    fn test_links_drop_nulls() {
        let links: Links = serde_json::from_value(serde_json::json!({
            "self": {"href": "https://api.mollie.com/v2/payments/tr_1", "type": "application/hal+json"},
            "checkout": null,
            "documentation": {"href": "https://docs.mollie.com", "type": "text/html"}
        }))
        .unwrap();

        assert_eq!(links.len(), 2);
        assert!(links.checkout().is_none());
        assert_eq!(
            links.self_link().unwrap().href,
            "https://api.mollie.com/v2/payments/tr_1"
        );
        assert_eq!(links.documentation().unwrap().content_type, "text/html");
    }

    #[test]
    fn test_list_metadata() {
        let meta: ListMetadata = serde_json::from_value(serde_json::json!({
            "count": 1,
            "_links": {
                "self": {"href": "https://api.mollie.com/v2/orders?limit=1", "type": "application/hal+json"},
                "previous": null,
                "next": {"href": "https://api.mollie.com/v2/orders?from=ord_2&limit=1", "type": "application/hal+json"}
            }
        }))
        .unwrap();

        assert_eq!(meta.count, 1);
        assert!(meta.has_next());
        assert!(meta.links.previous.is_none());
    }

    #[test]
    fn test_address_omits_unset_fields() {
        let address = Address {
            city: Some("Riverville".to_string()),
            country: Some("AU".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&address).unwrap(),
            serde_json::json!({"city": "Riverville", "country": "AU"})
        );
    }

    #[test]
    fn test_mode_and_sequence_type() {
        assert_eq!(serde_json::to_value(Mode::Test).unwrap(), "test");
        assert_eq!(serde_json::to_value(SequenceType::Oneoff).unwrap(), "oneoff");
    }
}
