//! Utility helpers shared by the controllers and the browser entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser glue (`browser`, the shortcut listener in `view_source`) is gated
//! behind `hydrate`; the string helpers build and test natively.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod cookie;
pub mod view_source;
