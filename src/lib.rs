//! # theme-runtime
//!
//! Browser-side theme glue for a documentation site, compiled to WASM.
//!
//! - `state::dark_mode`: tri-state dark mode preference persisted in the
//!   `fastn-dark-mode` cookie and applied as a `dark` class on `<body>`.
//! - `state::visibility`: main/fallback pane switch and translation-diff
//!   toggle mirrored into the host framework's variable store.
//! - `util::view_source`: `.` jumps to the page's `-/view-src/` rendering.
//!
//! Controllers are generic over the traits in [`host`], so everything except
//! the `hydrate`-only browser bindings runs natively in tests.

pub mod bridge;
pub mod config;
pub mod error;
pub mod host;
#[cfg(feature = "hydrate")]
pub mod runtime;
pub mod state;
pub mod util;
