//! Page chrome layered over the canvas: header logo, scrambling nav,
//! hero block and the `--cut` reveal text.

use crate::animation::AnimationLoop;
use crate::dom::{self, js_err, EventListener};
use rand::rngs::StdRng;
use rand::SeedableRng;
use starwave_core::constants::LOGO_ALT;
use starwave_core::{NavLabels, SceneConfig, ScrambleStep, ScrambleToken};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

const HERO_BUTTON: &str = "Start Today";
const HERO_SUBTITLE: &str = "Building the future of medicine with AI";
const CUT_TEXT: &str = "Brand / Logo";
const ARROW_SVG: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2"><path d="M12 5v14M19 12l-7 7-7-7" /></svg>"#;

struct NavView {
    labels: RefCell<NavLabels>,
    spans: Vec<web::Element>,
    scrambles: RefCell<Vec<Option<AnimationLoop>>>,
    rng: RefCell<StdRng>,
}

impl NavView {
    fn set_text(&self, index: usize, text: &str) {
        if let Some(span) = self.spans.get(index) {
            span.set_text_content(Some(text));
        }
    }

    fn enter(self: &Rc<Self>, index: usize) {
        let begun = {
            let mut rng = self.rng.borrow_mut();
            self.labels.borrow_mut().begin(index, &mut *rng)
        };
        let Some((token, first)) = begun else {
            return;
        };
        let scramble = match first {
            ScrambleStep::Running(text) => {
                self.set_text(index, &text);
                Some(AnimationLoop::start(scramble_step(Rc::downgrade(self), token)))
            }
            ScrambleStep::Done(text) => {
                self.set_text(index, &text);
                None
            }
            ScrambleStep::Stale => None,
        };
        if let Some(slot) = self.scrambles.borrow_mut().get_mut(index) {
            // Replacing the slot cancels any previous run for this item
            *slot = scramble;
        }
    }

    fn leave(&self, index: usize) {
        if let Some(slot) = self.scrambles.borrow_mut().get_mut(index) {
            *slot = None;
        }
        let restored = self.labels.borrow_mut().leave(index).map(str::to_string);
        if let Some(text) = restored {
            self.set_text(index, &text);
        }
    }
}

fn scramble_step(view: Weak<NavView>, token: ScrambleToken) -> impl FnMut(f64) -> bool {
    move |_ts| {
        let Some(view) = view.upgrade() else {
            return false;
        };
        let step = {
            let mut rng = view.rng.borrow_mut();
            view.labels.borrow_mut().advance(token, &mut *rng)
        };
        match step {
            ScrambleStep::Running(text) => {
                view.set_text(token.index(), &text);
                true
            }
            ScrambleStep::Done(text) => {
                view.set_text(token.index(), &text);
                false
            }
            ScrambleStep::Stale => false,
        }
    }
}

/// Mounted chrome nodes and their listeners. Dropping removes both.
pub struct Chrome {
    nodes: Vec<web::Element>,
    _listeners: Vec<EventListener>,
    _nav: Rc<NavView>,
}

impl Drop for Chrome {
    fn drop(&mut self) {
        for node in &self.nodes {
            node.remove();
        }
    }
}

fn append(parent: &web::Node, child: &web::Element) -> anyhow::Result<()> {
    parent.append_child(child).map_err(js_err)?;
    Ok(())
}

fn build_header(document: &web::Document, logo_url: &str) -> anyhow::Result<web::Element> {
    let header = dom::create_element(document, "header", Some("site-header"))?;
    let logo = dom::create_element(document, "div", Some("logo"))?;
    let img = dom::create_element(document, "img", Some("logo-image"))?
        .dyn_into::<web::HtmlImageElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_src(logo_url);
    img.set_alt(LOGO_ALT);
    append(&logo, &img)?;
    append(&header, &logo)?;
    Ok(header)
}

fn build_hero(document: &web::Document) -> anyhow::Result<web::Element> {
    let hero = dom::create_element(document, "div", Some("hero-section"))?;
    let text = dom::create_element(document, "div", Some("hero-text"))?;
    let button = dom::create_element(document, "button", Some("hero-button"))?;
    button.set_text_content(Some(HERO_BUTTON));
    let subtitle = dom::create_element(document, "p", Some("hero-subtitle"))?;
    subtitle.set_text_content(Some(HERO_SUBTITLE));
    append(&text, &button)?;
    append(&text, &subtitle)?;
    let arrow = dom::create_element(document, "div", Some("hero-arrow"))?;
    arrow.set_inner_html(ARROW_SVG);
    append(&hero, &text)?;
    append(&hero, &arrow)?;
    Ok(hero)
}

fn build_cutoff(document: &web::Document) -> anyhow::Result<web::Element> {
    let cutoff = dom::create_element(document, "div", Some("cutoff-text"))?;
    let heading = dom::create_element(document, "h2", Some("cut-text"))?;
    heading.set_text_content(Some(CUT_TEXT));
    append(&cutoff, &heading)?;
    Ok(cutoff)
}

fn build_nav(
    document: &web::Document,
    labels: &[String],
    seed: Option<u64>,
) -> anyhow::Result<(web::Element, Rc<NavView>, Vec<web::Element>)> {
    let nav = dom::create_element(document, "nav", Some("site-nav"))?;
    let list = dom::create_element(document, "ul", None)?;
    let mut items = Vec::with_capacity(labels.len());
    let mut spans = Vec::with_capacity(labels.len());
    for label in labels {
        let li = dom::create_element(document, "li", Some("site-nav-item"))?;
        let span = dom::create_element(document, "span", None)?;
        span.set_text_content(Some(label));
        append(&li, &span)?;
        append(&list, &li)?;
        items.push(li);
        spans.push(span);
    }
    append(&nav, &list)?;

    let rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let view = Rc::new(NavView {
        labels: RefCell::new(NavLabels::new(labels.iter().cloned())),
        scrambles: RefCell::new((0..labels.len()).map(|_| None).collect()),
        spans,
        rng: RefCell::new(rng),
    });
    Ok((nav, view, items))
}

pub fn mount(document: &web::Document, config: &SceneConfig) -> anyhow::Result<Chrome> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no document body"))?;

    let header = build_header(document, &config.logo_url)?;
    let (nav, view, items) = build_nav(document, &config.nav_labels, config.seed)?;
    let hero = build_hero(document)?;
    let cutoff = build_cutoff(document)?;

    let mut listeners = Vec::with_capacity(items.len() * 2);
    for (i, li) in items.iter().enumerate() {
        let on_enter = view.clone();
        listeners.push(EventListener::new(li, "mouseenter", move |_ev| {
            on_enter.enter(i);
        })?);
        let on_leave = view.clone();
        listeners.push(EventListener::new(li, "mouseleave", move |_ev| {
            on_leave.leave(i);
        })?);
    }

    let nodes = vec![header, nav, hero, cutoff];
    for node in &nodes {
        append(&body, node)?;
    }
    log::info!("[chrome] mounted nav with {} items", items.len());
    Ok(Chrome {
        nodes,
        _listeners: listeners,
        _nav: view,
    })
}
