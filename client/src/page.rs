use serde_json::Value;
use tier::Tier;

pub const CONNECTION_ERROR: &str = "Failed to connect. Please try again.";
pub const FALLBACK_ERROR: &str = "An error occurred";

/// What the result modal shows: the tier paired with the address that was
/// submitted, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankResult {
    pub tier: Tier,
    pub email: String,
}

/// Request state of the page. At most one lookup is in flight; the form is
/// disabled while [`RankPage::is_loading`] holds.
#[derive(Debug, Default)]
pub struct RankPage {
    pending: Option<String>,
    error: Option<String>,
    result: Option<RankResult>,
    show_result: bool,
}

impl RankPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&RankResult> {
        self.result.as_ref()
    }

    pub fn show_result(&self) -> bool {
        self.show_result && self.result.is_some()
    }

    /// Starts a lookup for `email`. Returns `false` (and changes nothing)
    /// if one is already running.
    pub fn begin(&mut self, email: impl Into<String>) -> bool {
        if self.is_loading() {
            return false;
        }

        self.error = None;
        self.result = None;
        self.pending = Some(email.into());
        true
    }

    /// The request never produced a readable response.
    pub fn fail(&mut self) {
        if self.pending.take().is_some() {
            self.set_error(CONNECTION_ERROR.to_string());
        }
    }

    /// Feeds the endpoint's answer back in. A body that isn't JSON, or a
    /// success without a string `tier`, counts as a failed connection.
    pub fn complete(&mut self, status: u16, body: &str) {
        let Some(email) = self.pending.take() else {
            return;
        };

        let Ok(body) = serde_json::from_str::<Value>(body) else {
            return self.set_error(CONNECTION_ERROR.to_string());
        };

        if !(200..300).contains(&status) {
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .filter(|message| !message.is_empty())
                .unwrap_or(FALLBACK_ERROR);
            return self.set_error(message.to_string());
        }

        match body.get("tier").and_then(Value::as_str) {
            Some(tier) => {
                self.result = Some(RankResult {
                    tier: Tier::from(tier),
                    email,
                });
                self.show_result = true;
            }
            None => self.set_error(CONNECTION_ERROR.to_string()),
        }
    }

    /// Called once the result modal has finished closing.
    pub fn dismiss(&mut self) {
        self.show_result = false;
    }

    fn set_error(&mut self, message: String) {
        self.error = Some(message);
        self.show_result = false;
    }
}
