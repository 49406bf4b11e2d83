use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct LoopInner {
    running: Cell<bool>,
    handle: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl LoopInner {
    fn schedule(&self) {
        let Some(window) = web::window() else {
            self.running.set(false);
            return;
        };
        let tick = self.tick.borrow();
        let Some(cb) = tick.as_ref() else {
            self.running.set(false);
            return;
        };
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.handle.set(Some(id)),
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                self.running.set(false);
            }
        }
    }

    fn cancel(&self) {
        self.running.set(false);
        if let Some(id) = self.handle.take() {
            if let Some(window) = web::window() {
                _ = window.cancel_animation_frame(id);
            }
        }
    }
}

/// A `requestAnimationFrame` loop owned by this handle.
///
/// `step` runs once per displayed frame and returns whether to keep going.
/// Dropping the handle cancels the pending frame and frees the callback, so
/// nothing it captured can run afterwards.
pub struct AnimationLoop {
    inner: Rc<LoopInner>,
}

impl AnimationLoop {
    pub fn start(mut step: impl FnMut(f64) -> bool + 'static) -> Self {
        let inner = Rc::new(LoopInner {
            running: Cell::new(true),
            handle: Cell::new(None),
            tick: RefCell::new(None),
        });
        // The callback only holds a weak reference so the handle stays the sole owner
        let weak = Rc::downgrade(&inner);
        let closure = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.handle.set(None);
            if !inner.running.get() {
                return;
            }
            if step(timestamp) && inner.running.get() {
                inner.schedule();
            } else {
                inner.running.set(false);
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.tick.borrow_mut() = Some(closure);
        inner.schedule();
        Self { inner }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.inner.cancel();
    }
}
