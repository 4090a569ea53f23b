//! Browser-side behaviour of the rank check page, kept free of any DOM or
//! network code so it runs the same natively and in wasm.
//!
//! The page shell owns the `fetch` and the timers; these types decide what
//! to show.

pub mod form;
pub mod modal;
pub mod page;

pub use form::EmailForm;
pub use modal::{CLOSE_DELAY, CloseTimer, ModalPhase, ResultModal};
pub use page::{RankPage, RankResult};
