#![cfg(target_arch = "wasm32")]
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use starwave_core::{
    generate_starfield, generate_wave_grid, Camera, GalaxyConfig, GalaxyMotion, MountGate,
    MountOutcome, MountRequest, MountTicket, PointerSmoother, SceneConfig, WaveUniformState,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod animation;
mod chrome;
mod dom;
mod events;
mod frame;
mod render;

const CANVAS_ID: &str = "scene-canvas";

/// Everything a mounted page owns. Dropping it tears the page back down.
struct Scene {
    // Field order is drop order: stop the frame loop before the listeners feeding it
    _frame_loop: Option<animation::AnimationLoop>,
    _listeners: Vec<dom::EventListener>,
    _chrome: chrome::Chrome,
    // Only set when the canvas was created here rather than supplied by the page
    _canvas: Option<dom::OwnedElement>,
}

thread_local! {
    static SCENE: RefCell<Option<Scene>> = const { RefCell::new(None) };
    static GATE: RefCell<MountGate> = RefCell::new(MountGate::default());
}

// Test builds mount nothing on load so DOM tests start from a clean page
#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starwave-web starting");
    mount();
    Ok(())
}

/// Mount the scene if it is not already mounted.
#[wasm_bindgen]
pub fn mount() {
    match GATE.with(|g| g.borrow_mut().request_mount()) {
        MountRequest::Start(ticket) => spawn_mount(ticket),
        MountRequest::Busy => log::info!("mount already in progress"),
        MountRequest::Mounted => log::info!("scene already mounted"),
    }
}

/// Stop all per-frame callbacks, detach listeners and chrome, and release GPU resources.
#[wasm_bindgen]
pub fn unmount() {
    let was_mounted = GATE.with(|g| g.borrow_mut().unmount());
    let scene = SCENE.with(|s| s.borrow_mut().take());
    drop(scene);
    if was_mounted {
        log::info!("scene unmounted");
    }
}

fn spawn_mount(ticket: MountTicket) {
    spawn_local(async move {
        let next = match mount_scene(ticket).await {
            Ok(next) => next,
            Err(e) => {
                log::error!("mount error: {:?}", e);
                GATE.with(|g| g.borrow_mut().fail(ticket))
            }
        };
        if let Some(next) = next {
            spawn_mount(next);
        }
    });
}

fn load_config(window: &web::Window) -> SceneConfig {
    let query = window.location().search().unwrap_or_default();
    let (config, errors) = SceneConfig::from_query_with(&query, |raw| {
        js_sys::decode_uri_component(raw).ok().map(String::from)
    });
    for e in &errors {
        log::warn!("[config] {}; using default", e);
    }
    config
}

fn find_or_create_canvas(
    document: &web::Document,
) -> anyhow::Result<(web::HtmlCanvasElement, Option<dom::OwnedElement>)> {
    let (el, owned) = match document.get_element_by_id(CANVAS_ID) {
        Some(el) => (el, None),
        None => {
            let el = dom::create_element(document, "canvas", Some("canvas"))?;
            el.set_id(CANVAS_ID);
            let body = document
                .body()
                .ok_or_else(|| anyhow::anyhow!("no document body"))?;
            body.prepend_with_node_1(&el).map_err(dom::js_err)?;
            (el.clone(), Some(dom::OwnedElement::new(el)))
        }
    };
    let canvas = el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    Ok((canvas, owned))
}

/// Build the scene for `ticket`. Returns a follow-up ticket when a newer mount
/// request arrived while this one was initialising.
async fn mount_scene(ticket: MountTicket) -> anyhow::Result<Option<MountTicket>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = load_config(&window);
    log::info!(
        "[config] wave={:?} labels={} seed={:?}",
        config.wave,
        config.nav_labels.len(),
        config.seed
    );

    let (canvas, owned_canvas) = find_or_create_canvas(&document)?;
    let mut listeners = vec![events::wire_canvas_resize(&window, &canvas)?];

    let chrome = chrome::mount(&document, &config)?;
    listeners.push(events::wire_scroll_cutoff(&window, &document)?);

    let pointer = Rc::new(RefCell::new(PointerSmoother::default()));
    listeners.push(events::wire_pointer(&window, &canvas, pointer.clone())?);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let stars = generate_starfield(&GalaxyConfig::default(), &mut rng);
    let grid = generate_wave_grid(&config.wave.grid(), &mut rng);

    // A failed GPU init leaves the chrome up over a plain background
    let frame_ctx = match render::GpuState::new(&canvas, &stars, &grid).await {
        Ok(gpu) => {
            let ctx = frame::FrameContext {
                gpu,
                canvas: canvas.clone(),
                pointer,
                camera: Camera::default(),
                galaxy: GalaxyMotion::default(),
                wave: WaveUniformState::new(config.wave.detail()),
                started: Instant::now(),
            };
            Some(ctx)
        }
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    };

    match GATE.with(|g| g.borrow_mut().finish(ticket)) {
        MountOutcome::Install => {
            let scene = Scene {
                _frame_loop: frame_ctx.map(frame::start_loop),
                _listeners: listeners,
                _chrome: chrome,
                _canvas: owned_canvas,
            };
            SCENE.with(|s| *s.borrow_mut() = Some(scene));
            Ok(None)
        }
        // Everything built above drops on return, before any follow-up mount runs
        MountOutcome::Discard => {
            log::info!("unmounted during init; discarding scene");
            Ok(None)
        }
        MountOutcome::Restart(next) => {
            log::info!("remounted during init; rebuilding scene");
            Ok(Some(next))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> web::Document {
        web::window()
            .and_then(|w| w.document())
            .expect("browser document")
    }

    #[wasm_bindgen_test]
    fn created_canvas_is_removed_with_its_owner() {
        let doc = document();
        if let Some(stale) = doc.get_element_by_id(CANVAS_ID) {
            stale.remove();
        }
        let (_canvas, owned) = find_or_create_canvas(&doc).expect("canvas");
        assert!(owned.is_some());
        assert!(doc.get_element_by_id(CANVAS_ID).is_some());
        drop(owned);
        assert!(doc.get_element_by_id(CANVAS_ID).is_none());
    }

    #[wasm_bindgen_test]
    fn page_supplied_canvas_is_left_in_place() {
        let doc = document();
        let el = doc.create_element("canvas").expect("create canvas");
        el.set_id(CANVAS_ID);
        doc.body().expect("body").append_child(&el).expect("append");

        let (canvas, owned) = find_or_create_canvas(&doc).expect("canvas");
        assert!(owned.is_none());
        drop(owned);
        assert!(doc.get_element_by_id(CANVAS_ID).is_some());
        canvas.remove();
    }
}
