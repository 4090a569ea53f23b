#[cfg(feature = "leaked-5xx")]
mod leaked_5xx;
#[cfg(feature = "leaked-5xx")]
pub use leaked_5xx::mw_handle_leaked_5xx;

#[cfg(feature = "latency")]
mod latency;
#[cfg(feature = "latency")]
pub use latency::latency_ms;

#[cfg(feature = "client-ip")]
mod client_ip;
#[cfg(feature = "client-ip")]
pub use client_ip::{ClientIp, mw_client_ip};
