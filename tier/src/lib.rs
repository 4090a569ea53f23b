mod style;

pub use style::TierStyle;

use std::fmt::Display;

/// A membership level label as stored upstream. The set is open-ended:
/// anything that isn't one of the known tiers is still a valid tier.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tier(String);

impl Tier {
    pub const UNKNOWN: &'static str = "Unknown";

    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Badge text. The label is shown verbatim, only upper-cased.
    pub fn label(&self) -> String {
        self.0.to_uppercase()
    }

    pub fn style(&self) -> &'static TierStyle {
        TierStyle::of(&self.0)
    }
}

impl From<String> for Tier {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Tier {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
