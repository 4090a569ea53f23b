mod email;

pub use email::{Email, is_valid_email, validate_email};
