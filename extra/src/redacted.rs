use std::fmt::{Debug, Display};

/// Holds a secret that must never reach a log line. Both `Debug` and
/// `Display` print a placeholder; the value is only reachable via `reveal*`.
#[derive(Clone)]
pub struct Redacted<T>(T);

impl<T: Clone> Redacted<T> {
    pub fn reveal(&self) -> T {
        self.0.clone()
    }
}

impl<T> Redacted<T> {
    pub fn reveal_ref(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Redacted<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Debug for Redacted<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", redacted::<T>())
    }
}

impl<T> Display for Redacted<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", redacted::<T>())
    }
}

fn redacted<T>() -> String {
    format!("<REDACTED {}>", std::any::type_name::<T>())
}
