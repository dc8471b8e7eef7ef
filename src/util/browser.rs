//! `web_sys` implementations of the host capability traits.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled only with the `hydrate` feature. Every DOM call here is treated
//! as infallible by the controllers: failures are swallowed or logged, never
//! propagated past construction.

use std::cell::Cell;
use std::rc::Rc;

use js_sys::{Function, Reflect};
use leptos::logging::warn;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, HtmlDocument, HtmlElement, MediaQueryList, Window};

use crate::error::ThemeError;
use crate::host::{ClassTarget, ContentPanes, CookieJar, SystemPreference};
use crate::util::cookie;

/// `document.cookie`.
pub struct DocumentCookies {
    document: HtmlDocument,
}

impl DocumentCookies {
    pub fn new(document: &Document) -> Result<Self, ThemeError> {
        let document = document
            .clone()
            .dyn_into::<HtmlDocument>()
            .map_err(|_| ThemeError::Browser("document is not an HTML document".to_owned()))?;
        Ok(Self { document })
    }
}

impl CookieJar for DocumentCookies {
    fn get(&self, name: &str) -> Option<String> {
        let header = self.document.cookie().ok()?;
        cookie::find(&header, name).map(str::to_owned)
    }

    fn set(&mut self, name: &str, value: &str, path: &str) {
        let _ = self.document.set_cookie(&cookie::directive(name, value, path));
    }
}

/// `document.body.classList`.
pub struct BodyClassList {
    body: HtmlElement,
}

impl BodyClassList {
    pub fn new(document: &Document) -> Result<Self, ThemeError> {
        let body = document
            .body()
            .ok_or_else(|| ThemeError::Browser("document has no body".to_owned()))?;
        Ok(Self { body })
    }
}

impl ClassTarget for BodyClassList {
    fn has_class(&self, class: &str) -> bool {
        self.body.class_list().contains(class)
    }

    fn set_class(&mut self, class: &str, present: bool) {
        let class_list = self.body.class_list();
        if present {
            let _ = class_list.add_1(class);
        } else {
            let _ = class_list.remove_1(class);
        }
    }
}

/// `matchMedia(query)`; absent support reads as light.
#[derive(Clone)]
pub struct MediaQuery {
    list: Option<MediaQueryList>,
}

impl MediaQuery {
    pub fn new(window: &Window, query: &str) -> Self {
        Self { list: window.match_media(query).ok().flatten() }
    }

    /// Call `on_change` on every change notification for the page lifetime.
    pub fn subscribe<F>(&self, mut on_change: F)
    where
        F: FnMut() + 'static,
    {
        let Some(list) = &self.list else {
            return;
        };
        let cb = Closure::wrap(Box::new(move |_ev: web_sys::Event| on_change())
            as Box<dyn FnMut(web_sys::Event)>);
        if list
            .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
            .is_ok()
        {
            cb.forget();
        }
    }
}

impl SystemPreference for MediaQuery {
    fn prefers_dark(&self) -> bool {
        self.list.as_ref().map_or(false, MediaQueryList::matches)
    }
}

/// Pane elements looked up by id on every switch.
pub struct DocumentPanes {
    document: Document,
}

impl DocumentPanes {
    pub fn new(document: &Document) -> Self {
        Self { document: document.clone() }
    }
}

impl ContentPanes for DocumentPanes {
    fn set_visible(&mut self, id: &str, visible: bool) -> bool {
        let Some(el) = self
            .document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return false;
        };
        let _ = el
            .style()
            .set_property("display", if visible { "block" } else { "none" });
        true
    }
}

/// `window.ftd.set_bool_for_all(name, value)` from the host framework.
///
/// Fed from a `PendingPublishes` queue once controller borrows are released.
#[derive(Clone)]
pub struct FtdBridge {
    window: Window,
    warned: Rc<Cell<bool>>,
}

impl FtdBridge {
    pub fn new(window: &Window) -> Self {
        Self { window: window.clone(), warned: Rc::new(Cell::new(false)) }
    }

    /// Deliver one value. Takes `&self` so the host may re-enter the runtime.
    pub fn send(&self, name: &str, value: bool) {
        let Some((ftd, setter)) = self.setter() else {
            if !self.warned.replace(true) {
                warn!("window.ftd.set_bool_for_all unavailable; skipping {name}");
            }
            return;
        };
        if let Err(e) = setter.call2(&ftd, &JsValue::from_str(name), &JsValue::from_bool(value)) {
            warn!("ftd.set_bool_for_all({name}) failed: {e:?}");
        }
    }

    fn setter(&self) -> Option<(JsValue, Function)> {
        let ftd = Reflect::get(&self.window, &JsValue::from_str("ftd")).ok()?;
        if ftd.is_undefined() || ftd.is_null() {
            return None;
        }
        let setter = Reflect::get(&ftd, &JsValue::from_str("set_bool_for_all"))
            .ok()?
            .dyn_into::<Function>()
            .ok()?;
        Some((ftd, setter))
    }
}
