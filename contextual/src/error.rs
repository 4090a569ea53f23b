use std::fmt::Display;

/// A source error tagged with what was being attempted when it happened.
#[derive(Debug)]
pub struct Error<E> {
    context: String,
    source: E,
}

impl<E> Error<E> {
    pub fn new(context: impl ToString, source: E) -> Self {
        Self {
            context: context.to_string(),
            source,
        }
    }

    #[inline]
    pub fn context(&self) -> &str {
        &self.context
    }
}

impl<E: std::error::Error + 'static> std::error::Error for Error<E> {
    #[inline]
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl<E: Display> Display for Error<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} :: {}", self.context, self.source)
    }
}
