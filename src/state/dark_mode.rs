//! Dark mode preference store.
//!
//! DESIGN
//! ======
//! The user's intent (follow system, explicit light, explicit dark) and the
//! last observed system signal are persisted jointly in one cookie drawn from
//! four literals. [`DarkMode`] owns that state and keeps three things equal
//! after every operation: the cookie, the `dark` class on `<body>`, and the
//! booleans mirrored into the host variable store.
//!
//! ERROR HANDLING
//! ==============
//! An unrecognized cookie value is the only failure. It is logged and then
//! corrected by switching to follow-system, which rewrites the cookie.

use std::fmt;
use std::str::FromStr;

use leptos::logging::warn;

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::host::{ClassTarget, CookieJar, HostBridge, SystemPreference};

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

// =============================================================================
// TYPES
// =============================================================================

/// Which theme-following behavior is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Intent {
    #[default]
    FollowSystem,
    ExplicitLight,
    ExplicitDark,
}

/// The four literals the preference cookie may hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoredPreference {
    SystemLight,
    SystemDark,
    Light,
    Dark,
}

impl StoredPreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SystemLight => "system-light",
            Self::SystemDark => "system-dark",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn intent(self) -> Intent {
        match self {
            Self::SystemLight | Self::SystemDark => Intent::FollowSystem,
            Self::Light => Intent::ExplicitLight,
            Self::Dark => Intent::ExplicitDark,
        }
    }
}

impl FromStr for StoredPreference {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system-light" => Ok(Self::SystemLight),
            "system-dark" => Ok(Self::SystemDark),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::InvalidStoredPreference { value: other.to_owned() }),
        }
    }
}

impl fmt::Display for StoredPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DarkModePreference {
    pub intent: Intent,
    /// System signal at last evaluation. Only visible while following system.
    pub system_is_dark: bool,
}

impl DarkModePreference {
    pub fn effective_dark(self) -> bool {
        match self.intent {
            Intent::ExplicitDark => true,
            Intent::ExplicitLight => false,
            Intent::FollowSystem => self.system_is_dark,
        }
    }

    pub fn stored(self) -> StoredPreference {
        match self.intent {
            Intent::ExplicitDark => StoredPreference::Dark,
            Intent::ExplicitLight => StoredPreference::Light,
            Intent::FollowSystem if self.system_is_dark => StoredPreference::SystemDark,
            Intent::FollowSystem => StoredPreference::SystemLight,
        }
    }
}

/// Values last pushed through the host bridge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Published {
    dark: bool,
    system_dark: bool,
    follow_system: bool,
}

// =============================================================================
// CONTROLLER
// =============================================================================

pub struct DarkMode<C, T, S, B> {
    config: ThemeConfig,
    preference: DarkModePreference,
    published: Option<Published>,
    cookies: C,
    target: T,
    system: S,
    bridge: B,
}

impl<C, T, S, B> DarkMode<C, T, S, B>
where
    C: CookieJar,
    T: ClassTarget,
    S: SystemPreference,
    B: HostBridge,
{
    /// Build a controller. Nothing is applied until the first operation;
    /// call [`Self::refresh_from_cookie`] on page load.
    pub fn new(config: ThemeConfig, cookies: C, target: T, system: S, bridge: B) -> Self {
        Self {
            config,
            preference: DarkModePreference::default(),
            published: None,
            cookies,
            target,
            system,
            bridge,
        }
    }

    pub fn preference(&self) -> DarkModePreference {
        self.preference
    }

    pub fn is_dark(&self) -> bool {
        self.preference.effective_dark()
    }

    pub fn cookies(&self) -> &C {
        &self.cookies
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn system_mut(&mut self) -> &mut S {
        &mut self.system
    }

    /// Ignore the system preference and render dark.
    pub fn enable_dark(&mut self) {
        self.transition(Intent::ExplicitDark);
    }

    /// Ignore the system preference and render light.
    pub fn enable_light(&mut self) {
        self.transition(Intent::ExplicitLight);
    }

    /// Follow the system preference. Idempotent for a given system value.
    pub fn enable_system(&mut self) {
        self.transition(Intent::FollowSystem);
    }

    /// Restore the persisted intent. A missing cookie counts as `system-light`.
    pub fn refresh_from_cookie(&mut self) -> Intent {
        let intent = self.stored_intent();
        self.transition(intent);
        intent
    }

    /// Handler for the system preference change notification.
    ///
    /// Re-reads the cookie so a choice saved by another tab wins. An explicit
    /// intent already in effect only refreshes the system bookkeeping.
    pub fn on_system_change(&mut self) {
        let intent = self.stored_intent();
        if intent != Intent::FollowSystem && intent == self.preference.intent {
            self.preference.system_is_dark = self.system.prefers_dark();
            self.publish();
        } else {
            self.transition(intent);
        }
    }

    fn stored_intent(&self) -> Intent {
        let raw = self.cookies.get(&self.config.cookie_name);
        let parsed = raw
            .as_deref()
            .map_or(Ok(StoredPreference::SystemLight), str::parse::<StoredPreference>);
        match parsed {
            Ok(stored) => stored.intent(),
            Err(err) => {
                warn!("dark mode cookie {}: {err}", self.config.cookie_name);
                Intent::FollowSystem
            }
        }
    }

    fn transition(&mut self, intent: Intent) {
        self.preference = DarkModePreference { intent, system_is_dark: self.system.prefers_dark() };

        let dark = self.preference.effective_dark();
        if self.target.has_class(&self.config.dark_class) != dark {
            self.target.set_class(&self.config.dark_class, dark);
        }
        self.cookies.set(
            &self.config.cookie_name,
            self.preference.stored().as_str(),
            &self.config.cookie_path,
        );
        self.publish();
    }

    fn publish(&mut self) {
        let next = Published {
            dark: self.preference.effective_dark(),
            system_dark: self.preference.system_is_dark,
            follow_system: self.preference.intent == Intent::FollowSystem,
        };
        let prev = self.published;
        let names = &self.config.variables;
        let changed = |pick: fn(&Published) -> bool| prev.map_or(true, |p| pick(&p) != pick(&next));

        if changed(|p| p.follow_system) {
            self.bridge.publish(&names.follow_system_dark_mode, next.follow_system);
        }
        if changed(|p| p.system_dark) {
            self.bridge.publish(&names.system_dark_mode, next.system_dark);
        }
        if changed(|p| p.dark) {
            self.bridge.publish(&names.dark_mode, next.dark);
        }
        self.published = Some(next);
    }
}
