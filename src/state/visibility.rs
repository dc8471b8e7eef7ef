//! Main/fallback pane switch and translation-diff panel toggle.
//!
//! Both flags are mirrored into the host variable store so templates can
//! react; the pane switch also flips `display` on the two pane elements.

use leptos::logging::warn;

use crate::config::ThemeConfig;
use crate::host::{ContentPanes, HostBridge};

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

pub struct Visibility<P, B> {
    config: ThemeConfig,
    is_fallback: bool,
    translation_diff_open: bool,
    panes: P,
    bridge: B,
}

impl<P, B> Visibility<P, B>
where
    P: ContentPanes,
    B: HostBridge,
{
    pub fn new(config: ThemeConfig, panes: P, bridge: B) -> Self {
        Self { config, is_fallback: false, translation_diff_open: false, panes, bridge }
    }

    pub fn is_fallback(&self) -> bool {
        self.is_fallback
    }

    pub fn translation_diff_open(&self) -> bool {
        self.translation_diff_open
    }

    pub fn panes(&self) -> &P {
        &self.panes
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn show_main(&mut self) {
        self.switch(false);
    }

    pub fn show_fallback(&mut self) {
        self.switch(true);
    }

    /// Flip the translation-diff panel and return the new state.
    pub fn toggle_translation_diff(&mut self) -> bool {
        self.translation_diff_open = !self.translation_diff_open;
        self.bridge
            .publish(&self.config.variables.translation_diff_open, self.translation_diff_open);
        self.translation_diff_open
    }

    fn switch(&mut self, fallback: bool) {
        for (id, visible) in [
            (&self.config.main_pane_id, !fallback),
            (&self.config.fallback_pane_id, fallback),
        ] {
            if !self.panes.set_visible(id, visible) {
                warn!("content pane #{id} not found");
            }
        }
        self.is_fallback = fallback;
        self.bridge.publish(&self.config.variables.is_fallback, fallback);
    }
}
