//! Browser entry point exported to the page script.
//!
//! DESIGN
//! ======
//! The page owns one [`ThemeRuntime`] handle and forwards its button
//! handlers (`enable_dark_mode`, `show_fallback`, ...) to it. The only other
//! holder of the dark-mode controller is the media-query change listener.
//!
//! Controllers publish into a [`PendingPublishes`] queue. The queue is
//! delivered to `window.ftd` only after the controller borrow is dropped, so
//! host callbacks may call back into the runtime.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::logging::log;
use wasm_bindgen::prelude::*;

use crate::bridge::PendingPublishes;
use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::state::dark_mode::DarkMode;
use crate::state::visibility::Visibility;
use crate::util::browser::{BodyClassList, DocumentCookies, DocumentPanes, FtdBridge, MediaQuery};
use crate::util::view_source;

type BrowserDarkMode = DarkMode<DocumentCookies, BodyClassList, MediaQuery, PendingPublishes>;
type BrowserVisibility = Visibility<DocumentPanes, PendingPublishes>;

#[wasm_bindgen]
pub struct ThemeRuntime {
    dark_mode: Rc<RefCell<BrowserDarkMode>>,
    visibility: RefCell<BrowserVisibility>,
    pending: PendingPublishes,
    ftd: FtdBridge,
}

#[wasm_bindgen]
impl ThemeRuntime {
    /// Restore the stored preference, start following the system signal and
    /// install the view-source shortcut. `config_json` overrides defaults.
    pub fn start(config_json: Option<String>) -> Result<ThemeRuntime, JsValue> {
        console_error_panic_hook::set_once();
        Ok(Self::boot(config_json.as_deref())?)
    }

    pub fn enable_dark_mode(&self) {
        self.dark_mode.borrow_mut().enable_dark();
        self.flush();
    }

    pub fn enable_light_mode(&self) {
        self.dark_mode.borrow_mut().enable_light();
        self.flush();
    }

    pub fn enable_system_mode(&self) {
        self.dark_mode.borrow_mut().enable_system();
        self.flush();
    }

    pub fn is_dark(&self) -> bool {
        self.dark_mode.borrow().is_dark()
    }

    pub fn show_main(&self) {
        self.visibility.borrow_mut().show_main();
        self.flush();
    }

    pub fn show_fallback(&self) {
        self.visibility.borrow_mut().show_fallback();
        self.flush();
    }

    pub fn toggle_translation_diff(&self) -> bool {
        let open = self.visibility.borrow_mut().toggle_translation_diff();
        self.flush();
        open
    }
}

impl ThemeRuntime {
    fn boot(config_json: Option<&str>) -> Result<Self, ThemeError> {
        let config = match config_json {
            Some(raw) => ThemeConfig::from_json(raw)?,
            None => ThemeConfig::default(),
        };
        let window = web_sys::window().ok_or_else(|| ThemeError::Browser("no window".to_owned()))?;
        let document = window
            .document()
            .ok_or_else(|| ThemeError::Browser("no document".to_owned()))?;

        let pending = PendingPublishes::default();
        let ftd = FtdBridge::new(&window);
        let system = MediaQuery::new(&window, &config.media_query);
        let dark_mode = Rc::new(RefCell::new(DarkMode::new(
            config.clone(),
            DocumentCookies::new(&document)?,
            BodyClassList::new(&document)?,
            system.clone(),
            pending.clone(),
        )));
        let visibility = RefCell::new(Visibility::new(
            config.clone(),
            DocumentPanes::new(&document),
            pending.clone(),
        ));

        // Listeners are leaked for the page lifetime; install them only once
        // nothing else can fail.
        view_source::install(&config)?;

        let intent = dark_mode.borrow_mut().refresh_from_cookie();
        deliver(&pending, &ftd);

        let listener = Rc::clone(&dark_mode);
        let listener_pending = pending.clone();
        let listener_ftd = ftd.clone();
        system.subscribe(move || {
            listener.borrow_mut().on_system_change();
            deliver(&listener_pending, &listener_ftd);
        });

        log!("theme runtime started: intent={intent:?}");
        Ok(Self { dark_mode, visibility, pending, ftd })
    }

    fn flush(&self) {
        deliver(&self.pending, &self.ftd);
    }
}

/// Send queued values to the host. Runs with no controller borrowed.
fn deliver(pending: &PendingPublishes, ftd: &FtdBridge) {
    for (name, value) in pending.drain() {
        ftd.send(&name, value);
    }
}
