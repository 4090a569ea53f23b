use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Body of `POST /databases/{id}/query`, filtering on an exact match of the
/// `Email` property.
#[derive(Debug, Serialize)]
pub struct QueryRequest<'a> {
    pub filter: EmailFilter<'a>,
}

#[derive(Debug, Serialize)]
pub struct EmailFilter<'a> {
    pub property: &'a str,
    pub email: EmailCondition<'a>,
}

#[derive(Debug, Serialize)]
pub struct EmailCondition<'a> {
    pub equals: &'a str,
}

impl<'a> QueryRequest<'a> {
    pub const EMAIL_PROPERTY: &'static str = "Email";

    pub fn email_equals(email: &'a str) -> Self {
        Self {
            filter: EmailFilter {
                property: Self::EMAIL_PROPERTY,
                email: EmailCondition { equals: email },
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<Record>,
}

/// One database row. Only the properties map is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

/// A property of any type. Non-select properties deserialize with
/// `select: None` and are never picked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyValue {
    #[serde(default)]
    pub select: Option<SelectOption>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub name: Option<String>,
}

impl PropertyValue {
    pub fn select_name(&self) -> Option<&str> {
        self.select
            .as_ref()
            .and_then(|select| select.name.as_deref())
            .filter(|name| !name.is_empty())
    }
}

impl Record {
    /// Name of the first populated select among `candidates`, in order.
    pub fn first_select(&self, candidates: &[&str]) -> Option<&str> {
        candidates
            .iter()
            .filter_map(|name| self.properties.get(*name))
            .find_map(PropertyValue::select_name)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const CANDIDATES: [&str; 2] = ["Tier", "Rank"];

    fn record(properties: serde_json::Value) -> Record {
        serde_json::from_value(json!({ "object": "page", "properties": properties })).unwrap()
    }

    #[test]
    fn query_body_shape() {
        let body = serde_json::to_value(QueryRequest::email_equals("creator@example.com")).unwrap();
        assert_eq!(
            body,
            json!({ "filter": { "property": "Email", "email": { "equals": "creator@example.com" } } })
        );
    }

    #[test]
    fn tier_wins_over_rank() {
        let record = record(json!({
            "Tier": { "type": "select", "select": { "id": "x", "name": "Gold", "color": "yellow" } },
            "Rank": { "type": "select", "select": { "name": "Bronze" } },
        }));
        assert_eq!(record.first_select(&CANDIDATES), Some("Gold"));
    }

    #[test]
    fn rank_is_used_when_tier_is_absent() {
        let record = record(json!({ "Rank": { "select": { "name": "Silver" } } }));
        assert_eq!(record.first_select(&CANDIDATES), Some("Silver"));
    }

    #[test]
    fn empty_tier_falls_through_to_rank() {
        let record = record(json!({
            "Tier": { "type": "select", "select": null },
            "Rank": { "type": "select", "select": { "name": "Platinum" } },
        }));
        assert_eq!(record.first_select(&CANDIDATES), Some("Platinum"));
    }

    #[test]
    fn nothing_usable() {
        let record = record(json!({
            "Email": { "type": "email", "email": "creator@example.com" },
            "Tier": { "type": "rich_text", "rich_text": [] },
            "Rank": { "type": "select", "select": { "name": "" } },
        }));
        assert_eq!(record.first_select(&CANDIDATES), None);
    }

    #[test]
    fn whitespace_name_is_kept_verbatim() {
        let record = record(json!({
            "Tier": { "type": "select", "select": { "name": "  " } },
            "Rank": { "type": "select", "select": { "name": "Gold" } },
        }));
        assert_eq!(record.first_select(&CANDIDATES), Some("  "));
    }

    #[test]
    fn missing_results_is_empty() {
        let response: QueryResponse = serde_json::from_str(r#"{"object":"list"}"#).unwrap();
        assert!(response.results.is_empty());
    }
}
