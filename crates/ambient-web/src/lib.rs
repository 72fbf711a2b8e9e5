#![cfg(target_arch = "wasm32")]
use ambient_core::{log_level_from_attr, Animator, BackdropConfig, FrameLoop, Variant};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod dom;
mod frame;
mod overlay;
mod theme;

use canvas::CanvasSurface;
use frame::{FrameCallback, RafHost, WebLoop};
use theme::DocumentTheme;

// Element the start hook mounts into when the page provides one
const AUTO_MOUNT_ID: &str = "ambient-backdrop";

thread_local! {
    static AUTO_MOUNTED: RefCell<Option<BackdropHandle>> = const { RefCell::new(None) };
}

/// Everything a live backdrop owns; tearing it down stops the loop and
/// removes its DOM.
struct Mounted {
    frame_loop: Rc<RefCell<WebLoop>>,
    frame_cb: FrameCallback,
    layer: web::Element,
}

impl Mounted {
    fn teardown(&mut self) {
        self.frame_loop.borrow_mut().stop();
        self.layer.remove();
        self.frame_cb.borrow_mut().take();
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// JS-side handle to a mounted backdrop.
#[wasm_bindgen]
pub struct BackdropHandle {
    inner: Option<Mounted>,
}

#[wasm_bindgen]
impl BackdropHandle {
    /// Cancel the pending frame, drop the resize listener and remove the layer.
    pub fn stop(&mut self) {
        if self.inner.take().is_some() {
            log::info!("ambient backdrop stopped");
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.inner
            .as_ref()
            .map(|m| m.frame_loop.borrow().is_running())
            .unwrap_or(false)
    }
}

/// Mount a backdrop into the element with id `container_id`. Returns nothing
/// when the container is missing or the canvas has no 2D context.
#[wasm_bindgen(js_name = mountBackdrop)]
pub fn mount_backdrop(container_id: &str, variant: Option<String>) -> Option<BackdropHandle> {
    let variant = Variant::from_id(variant.as_deref().unwrap_or("")).unwrap_or_else(|e| {
        log::warn!("{}; using {}", e, Variant::Classic.id());
        Variant::Classic
    });
    match mount(container_id, &BackdropConfig::for_variant(variant)) {
        Ok(Some(m)) => {
            log::info!("ambient backdrop mounted ({})", variant.id());
            Some(BackdropHandle { inner: Some(m) })
        }
        Ok(None) => None,
        Err(e) => {
            log::error!("mount error: {:?}", e);
            None
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let auto_el = dom::window_document()
        .and_then(|d| d.get_element_by_id(AUTO_MOUNT_ID));
    let level = auto_el
        .as_ref()
        .and_then(|el| el.get_attribute("data-log-level"));
    console_log::init_with_level(log_level_from_attr(level.as_deref())).ok();
    log::info!("ambient-web starting");

    if let Some(el) = auto_el {
        let variant = el.get_attribute("data-variant");
        if let Some(handle) = mount_backdrop(AUTO_MOUNT_ID, variant) {
            AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(handle));
        }
    }
    Ok(())
}

fn mount(container_id: &str, config: &BackdropConfig) -> anyhow::Result<Option<Mounted>> {
    config.validate()?;
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", container_id))?;

    let layer = dom::create_styled(&document, "div", dom::LAYER_STYLE)?;
    _ = layer.set_attribute("aria-hidden", "true");
    let canvas = dom::create_canvas(&document)?;
    dom::append(&layer, &canvas)?;
    dom::append(&container, &layer)?;

    // Anything short of a running backdrop leaves the container as it was
    let mounted = attach(&window, document, &layer, canvas, config);
    if !matches!(mounted, Ok(Some(_))) {
        layer.remove();
    }
    mounted
}

fn attach(
    window: &web::Window,
    document: web::Document,
    layer: &web::Element,
    canvas: web::HtmlCanvasElement,
    config: &BackdropConfig,
) -> anyhow::Result<Option<Mounted>> {
    // Decorative only: without a 2D context do nothing more
    let surface = match CanvasSurface::acquire(canvas) {
        Ok(s) => s,
        Err(e) => {
            log::debug!("{}; backdrop disabled", e);
            return Ok(None);
        }
    };
    overlay::insert(&document, layer, &config.overlay)?;

    let viewport = dom::window_viewport(window);
    let animator = Animator::spawn(
        config,
        viewport,
        &mut rand::thread_rng(),
        surface,
        DocumentTheme::new(document),
    )?;
    let frame_cb: FrameCallback = Rc::new(RefCell::new(None));
    let host = RafHost::new(window.clone(), frame_cb.clone());
    let frame_loop = Rc::new(RefCell::new(FrameLoop::new(host, animator)));
    let mounted = Mounted {
        frame_loop: frame_loop.clone(),
        frame_cb: frame_cb.clone(),
        layer: layer.clone(),
    };
    frame::start_loop(window, &frame_loop, &frame_cb)?;
    Ok(Some(mounted))
}
