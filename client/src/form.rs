use validation::is_valid_email;

pub const SUBMIT_LABEL: &str = "See My Rank";
pub const PENDING_LABEL: &str = "Checking...";

#[derive(Debug, Default, Clone)]
pub struct EmailForm {
    email: String,
}

impl EmailForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn is_valid(&self) -> bool {
        is_valid_email(&self.email)
    }

    pub fn can_submit(&self, is_loading: bool) -> bool {
        !is_loading && !self.email.trim().is_empty() && self.is_valid()
    }

    /// The value to hand to the submission callback, or `None` when the
    /// submit control is disabled. The input is forwarded as typed.
    pub fn submit(&self, is_loading: bool) -> Option<String> {
        self.can_submit(is_loading).then(|| self.email.clone())
    }

    pub fn button_label(is_loading: bool) -> &'static str {
        match is_loading {
            true => PENDING_LABEL,
            false => SUBMIT_LABEL,
        }
    }
}
