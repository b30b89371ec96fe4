use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    js_sys::Function, Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior,
    ScrollToOptions, Window,
};

use crate::config::Config;
use crate::enhancer::Enhancer;
use crate::page::{Page, Rect};

/// The live document behind `window`.
#[derive(Clone)]
pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    pub fn current() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window`"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Page for DomPage {
    type Node = Element;

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .filter(|h| *h > 0.0)
            .or_else(|| {
                self.document
                    .document_element()
                    .map(|root| root.client_height() as f64)
            })
            .unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            warn!("Invalid selector '{}'", selector);
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn has_marker(&self, node: &Element, marker: &str) -> bool {
        node.class_list().contains(marker)
    }

    fn set_marker(&self, node: &Element, marker: &str, on: bool) {
        let classes = node.class_list();
        let result = if on {
            classes.add_1(marker)
        } else {
            classes.remove_1(marker)
        };
        if let Err(err) = result {
            warn!("Could not update class '{}': {:?}", marker, err);
        }
    }

    fn bounding_rect(&self, node: &Element) -> Rect {
        let rect = node.get_bounding_client_rect();
        Rect {
            top: rect.top(),
            bottom: rect.bottom(),
        }
    }

    fn offset_top(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>()
            .map_or(0.0, |el| el.offset_top() as f64)
    }

    fn offset_height(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>()
            .map_or(0.0, |el| el.offset_height() as f64)
    }

    fn append_to_body(&self, id: &str, text: &str) -> Option<Element> {
        let body = self.document.body()?;
        let el = self.document.create_element("div").ok()?;
        el.set_id(id);
        el.set_text_content(Some(text));
        if let Err(err) = body.append_child(&el) {
            warn!("Could not append #{}: {:?}", id, err);
            return None;
        }
        Some(el)
    }

    fn install_stylesheet(&self, id: &str, css: &str) {
        if let Some(existing) = self.document.get_element_by_id(id) {
            existing.set_text_content(Some(css));
            return;
        }
        let Some(head) = self.document.head() else {
            warn!("Document has no <head>, stylesheet not installed");
            return;
        };
        if let Ok(style) = self.document.create_element("style") {
            style.set_id(id);
            style.set_text_content(Some(css));
            let _ = head.append_child(&style);
        }
    }
}

/// An event listener that unbinds itself when dropped.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn bind<F>(target: EventTarget, kind: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target,
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

thread_local! {
    static LISTENERS: RefCell<Vec<Listener>> = RefCell::new(Vec::new());
    // DOMContentLoaded handler of an `attach_when_ready` that has not fired yet
    static PENDING: RefCell<Option<(Document, Function)>> = RefCell::new(None);
}

/// Unbinds everything a previous `attach` bound and cancels a pending deferred attach.
pub fn detach() {
    if let Some((document, deferred)) = PENDING.with(|slot| slot.borrow_mut().take()) {
        let _ = document.remove_event_listener_with_callback("DOMContentLoaded", &deferred);
        info!("Cancelled pending initialization");
    }
    let previous = LISTENERS.with(|slot| std::mem::take(&mut *slot.borrow_mut()));
    if !previous.is_empty() {
        info!("Detaching {} listener(s)", previous.len());
    }
}

/// Whether initialization has to wait for `DOMContentLoaded`.
pub fn should_defer(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Enhances the current document right now, replacing any earlier binding.
pub fn attach(config: Config) -> Result<Rc<Enhancer<DomPage>>, JsValue> {
    detach();
    let page = DomPage::current()?;
    let window = page.window.clone();
    let enhancer = Rc::new(Enhancer::new(page, config));
    let elements = enhancer.elements();
    let mut listeners = Vec::new();

    if let Some(button) = elements.menu_button.clone() {
        let enhancer = enhancer.clone();
        listeners.push(Listener::bind(button.into(), "click", move |_| {
            enhancer.on_menu_click()
        })?);
    }

    for item in elements.nav_items.iter().cloned() {
        let enhancer = enhancer.clone();
        let link = item.clone();
        listeners.push(Listener::bind(item.into(), "click", move |event: Event| {
            let href = link.get_attribute("href").unwrap_or_default();
            if enhancer.on_link_click(&href) {
                event.prevent_default();
            }
        })?);
    }

    if let Some(button) = elements.scroll_button.clone() {
        let enhancer = enhancer.clone();
        listeners.push(Listener::bind(button.into(), "click", move |_| {
            enhancer.on_scroll_button_click()
        })?);
    }

    {
        let enhancer = enhancer.clone();
        listeners.push(Listener::bind(window.into(), "scroll", move |_| {
            enhancer.on_scroll()
        })?);
    }

    enhancer.start();
    LISTENERS.with(|slot| *slot.borrow_mut() = listeners);
    Ok(enhancer)
}

/// Attaches now if the document is parsed, otherwise once `DOMContentLoaded` fires.
pub fn attach_when_ready(config: Config) -> Result<(), JsValue> {
    let page = DomPage::current()?;
    if !should_defer(&page.document.ready_state()) {
        return attach(config).map(|_| ());
    }
    attach_on_content_loaded(config)
}

/// Attaches when the document next fires `DOMContentLoaded`. Replaces any earlier
/// binding or pending attach; `detach` cancels it.
pub fn attach_on_content_loaded(config: Config) -> Result<(), JsValue> {
    detach();
    let page = DomPage::current()?;
    let deferred: Closure<dyn FnMut()> = Closure::once(move || {
        if let Err(err) = attach(config) {
            warn!("Deferred initialization failed: {:?}", err);
        }
    });
    let handler: Function = deferred.as_ref().unchecked_ref::<Function>().clone();
    page.document
        .add_event_listener_with_callback("DOMContentLoaded", &handler)?;
    // Fires at most once; `detach` unbinds it if it never does.
    deferred.forget();
    PENDING.with(|slot| *slot.borrow_mut() = Some((page.document.clone(), handler)));
    Ok(())
}
