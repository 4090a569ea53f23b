#[derive(thiserror::Error, Debug)]
pub enum QueryError {
    /// The API answered with a non-success status. `body` is a truncated
    /// preview for operator diagnosis and must not be shown to visitors.
    #[error("status {status} :: {body}")]
    Status { status: u16, body: String },

    #[error("transport :: {0}")]
    Transport(String),

    #[error("decode :: {0}")]
    Decode(String),
}

impl QueryError {
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("reqwest :: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("query url :: {0}")]
    Url(#[from] url::ParseError),
}
