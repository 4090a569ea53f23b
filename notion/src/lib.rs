//! Read-only access to a hosted Notion database holding one record per
//! creator, keyed by email.

mod client;
mod credentials;
mod error;
mod model;
mod source;

pub use client::{DEFAULT_BASE_URL, NOTION_VERSION, NotionClient};
pub use credentials::{Credentials, DatabaseId};
pub use error::{ClientError, QueryError};
pub use model::{EmailCondition, EmailFilter, PropertyValue, QueryRequest, QueryResponse, Record, SelectOption};
pub use source::RecordSource;
