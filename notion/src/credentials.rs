use std::fmt::Display;

use extra::Redacted;

/// Database identifier as used in the request path. Copy-pasted ids come
/// in both dashed and undashed forms; the API wants neither dashes nor
/// stray whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseId(String);

impl DatabaseId {
    /// `None` when nothing is left after normalization.
    pub fn parse(raw: &str) -> Option<Self> {
        let id: String = raw
            .chars()
            .filter(|c| *c != '-' && !c.is_whitespace())
            .collect();

        match id.is_empty() {
            true => None,
            false => Some(Self(id)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DatabaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: Redacted<String>,
    pub database_id: DatabaseId,
}

impl Credentials {
    /// Both halves are required; a blank value counts as missing.
    pub fn from_parts(api_key: Option<String>, database_id: Option<String>) -> Option<Self> {
        let api_key = api_key.filter(|key| !key.trim().is_empty())?;
        let database_id = DatabaseId::parse(database_id.as_deref()?)?;

        Some(Self {
            api_key: Redacted::from(api_key),
            database_id,
        })
    }
}
