//! Owned UI state machines driven by page events.

pub mod dark_mode;
pub mod visibility;
