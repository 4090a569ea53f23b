/// JSON body of every non-2xx response the lookup endpoint produces.
///
/// Only `error` is part of the client contract; `datetime` helps match a
/// report from a visitor with the server logs.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
}

impl<E: std::error::Error> From<E> for ErrorResponse {
    fn from(error: E) -> Self {
        Self {
            error: error.to_string(),
            datetime: time::OffsetDateTime::now_utc()
                .format(&time::macros::format_description!(
                    "[year]-[month]-[day]T[hour]:[minute]:[second]Z"
                ))
                .ok(),
        }
    }
}
