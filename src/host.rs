//! Capability seams between the theme controllers and their environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers in `state` never touch `web_sys` directly. They are generic
//! over these traits; `util::browser` implements them against the DOM under
//! the `hydrate` feature and [`memory`] implements them with plain owned
//! values for tests and server-side callers.

pub use crate::bridge::HostBridge;

/// Read/write access to named cookies.
pub trait CookieJar {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&mut self, name: &str, value: &str, path: &str);
}

/// Element whose class list carries the theme hook.
pub trait ClassTarget {
    fn has_class(&self, class: &str) -> bool;
    fn set_class(&mut self, class: &str, present: bool);
}

/// The platform "prefers dark color scheme" signal.
pub trait SystemPreference {
    /// Current value; `false` when the platform cannot answer.
    fn prefers_dark(&self) -> bool;
}

/// Show/hide switch for content panes addressed by element id.
pub trait ContentPanes {
    /// Returns `false` when no pane with `id` exists.
    fn set_visible(&mut self, id: &str, visible: bool) -> bool;
}

pub mod memory {
    use std::collections::HashMap;

    use super::{ClassTarget, ContentPanes, CookieJar, SystemPreference};
    use crate::util::cookie;

    /// Cookie jar backed by a `document.cookie`-style header string.
    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    pub struct MemoryCookies {
        header: String,
        writes: usize,
    }

    impl MemoryCookies {
        pub fn with_header(header: impl Into<String>) -> Self {
            Self { header: header.into(), writes: 0 }
        }

        pub fn header(&self) -> &str {
            &self.header
        }

        /// Number of writes since creation.
        pub fn writes(&self) -> usize {
            self.writes
        }
    }

    impl CookieJar for MemoryCookies {
        fn get(&self, name: &str) -> Option<String> {
            cookie::find(&self.header, name).map(str::to_owned)
        }

        fn set(&mut self, name: &str, value: &str, _path: &str) {
            self.header = cookie::upsert(&self.header, name, value);
            self.writes += 1;
        }
    }

    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    pub struct MemoryClassList {
        classes: Vec<String>,
        mutations: usize,
    }

    impl MemoryClassList {
        pub fn classes(&self) -> &[String] {
            &self.classes
        }

        /// Number of actual add/remove operations applied.
        pub fn mutations(&self) -> usize {
            self.mutations
        }
    }

    impl ClassTarget for MemoryClassList {
        fn has_class(&self, class: &str) -> bool {
            self.classes.iter().any(|c| c == class)
        }

        fn set_class(&mut self, class: &str, present: bool) {
            let existing = self.classes.iter().position(|c| c == class);
            match (existing, present) {
                (None, true) => self.classes.push(class.to_owned()),
                (Some(idx), false) => {
                    self.classes.remove(idx);
                }
                _ => return,
            }
            self.mutations += 1;
        }
    }

    /// System signal with a settable value; `set` simulates an OS change.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct FixedSystem {
        pub dark: bool,
    }

    impl FixedSystem {
        pub fn dark() -> Self {
            Self { dark: true }
        }

        pub fn light() -> Self {
            Self { dark: false }
        }

        pub fn set(&mut self, dark: bool) {
            self.dark = dark;
        }
    }

    impl SystemPreference for FixedSystem {
        fn prefers_dark(&self) -> bool {
            self.dark
        }
    }

    /// Pane visibility keyed by element id. Unknown ids are treated as missing.
    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    pub struct MemoryPanes {
        panes: HashMap<String, bool>,
    }

    impl MemoryPanes {
        pub fn with_panes<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
            Self { panes: ids.into_iter().map(|id| (id.to_owned(), true)).collect() }
        }

        pub fn is_visible(&self, id: &str) -> Option<bool> {
            self.panes.get(id).copied()
        }
    }

    impl ContentPanes for MemoryPanes {
        fn set_visible(&mut self, id: &str, visible: bool) -> bool {
            match self.panes.get_mut(id) {
                Some(slot) => {
                    *slot = visible;
                    true
                }
                None => false,
            }
        }
    }
}
