use crate::dom::{self, EventListener};
use starwave_core::constants::CUT_CSS_VAR;
use starwave_core::{client_to_ndc, PointerSmoother, ScrollCutoff};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_canvas_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<EventListener> {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    EventListener::new(window, "resize", move |_ev| {
        dom::sync_canvas_backing_size(&canvas_resize);
    })
}

/// Feed pointer moves anywhere on the page into the wave's pointer target.
pub fn wire_pointer(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    pointer: Rc<RefCell<PointerSmoother>>,
) -> anyhow::Result<EventListener> {
    let canvas = canvas.clone();
    EventListener::new(window, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let rect = canvas.get_bounding_client_rect();
        let ndc = client_to_ndc(
            [ev.client_x() as f32, ev.client_y() as f32],
            [rect.left() as f32, rect.top() as f32],
            [rect.width() as f32, rect.height() as f32],
        );
        if let (Some([x, y]), Ok(mut p)) = (ndc, pointer.try_borrow_mut()) {
            p.set_target_ndc(x, y);
        }
    })
}

fn apply_cut(document: &web::Document, cutoff: &mut ScrollCutoff, force: bool) {
    let Some(window) = web::window() else {
        return;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    if !cutoff.update(scroll_y, viewport_h) && !force {
        return;
    }
    let value = cutoff.css_value();
    if let Some(root) = document.document_element() {
        dom::set_css_var(&root, CUT_CSS_VAR, &value);
    }
    if let Ok(Some(el)) = document.query_selector(".cutoff-text") {
        dom::set_css_var(&el, CUT_CSS_VAR, &value);
    }
}

/// Mirror the scroll fraction into `--cut` now and on every scroll event.
pub fn wire_scroll_cutoff(
    window: &web::Window,
    document: &web::Document,
) -> anyhow::Result<EventListener> {
    let mut cutoff = ScrollCutoff::default();
    apply_cut(document, &mut cutoff, true);

    let document = document.clone();
    EventListener::new(window, "scroll", move |_ev| {
        apply_cut(&document, &mut cutoff, false);
    })
}
