mod context;
mod error;

pub use context::Context;
pub use error::Error;
