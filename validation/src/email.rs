use std::{fmt::Display, str::FromStr, sync::LazyLock};

use compiletime::regex;
use regex::Regex;

const MSG: &str = "Please enter a valid email address";

/// `local@domain.tld` where no part contains whitespace or a second `@`.
/// The browser form and the lookup endpoint must agree on this pattern.
///
/// Whitespace is the ECMAScript `\s` set, spelled out: it includes U+FEFF
/// and excludes U+0085, unlike the Unicode class behind the regex crate's `\s`.
static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    regex!(
        r#"^[^\t\n\x0B\x0C\r \u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}@]+@[^\t\n\x0B\x0C\r \u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}@]+\.[^\t\n\x0B\x0C\r \u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}@]+$"#
    )
});

pub fn is_valid_email(value: &str) -> bool {
    RE_EMAIL.is_match(value)
}

pub fn validate_email(value: String) -> Result<String, &'static str> {
    match is_valid_email(&value) {
        true => Ok(value),
        false => Err(MSG),
    }
}

/// An address that passed [`is_valid_email`]. The original casing is kept
/// for display; lookups go through [`Email::lookup_key`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased form used for the case-insensitive match upstream.
    pub fn lookup_key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl TryFrom<String> for Email {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_email(value).map(Self)
    }
}

impl FromStr for Email {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Email({})", self.0)
    }
}
