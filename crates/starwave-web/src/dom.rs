use starwave_core::backing_size;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub fn create_element(
    document: &web::Document,
    tag: &str,
    class: Option<&str>,
) -> anyhow::Result<web::Element> {
    let el = document.create_element(tag).map_err(js_err)?;
    if let Some(class) = class {
        el.set_class_name(class);
    }
    Ok(el)
}

/// Match the canvas backing store to its CSS size times the clamped device pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let rect = canvas.get_bounding_client_rect();
        let (w_px, h_px) = backing_size(rect.width(), rect.height(), w.device_pixel_ratio());
        if canvas.width() != w_px || canvas.height() != h_px {
            canvas.set_width(w_px);
            canvas.set_height(h_px);
        }
    }
}

pub fn set_css_var(el: &web::Element, name: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        if let Err(e) = html.style().set_property(name, value) {
            log::warn!("set {} failed: {:?}", name, e);
        }
    }
}

/// An element this crate inserted into the page, removed again on drop.
pub struct OwnedElement(web::Element);

impl OwnedElement {
    pub fn new(el: web::Element) -> Self {
        Self(el)
    }
}

impl Drop for OwnedElement {
    fn drop(&mut self) {
        self.0.remove();
    }
}

/// Registered DOM event listener, removed again when dropped.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
