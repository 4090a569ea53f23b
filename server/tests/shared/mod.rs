pub mod macros;
pub mod records;
pub mod request;
pub mod setup;
