use crate::canvas::CanvasSurface;
use crate::dom;
use crate::theme::DocumentTheme;
use ambient_core::{FrameHost, FrameLoop};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebLoop = FrameLoop<RafHost, CanvasSurface, DocumentTheme>;
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` scheduler plus the window resize subscription.
pub struct RafHost {
    window: web::Window,
    frame_cb: FrameCallback,
    resize_cb: Option<Closure<dyn FnMut()>>,
}

impl RafHost {
    pub fn new(window: web::Window, frame_cb: FrameCallback) -> Self {
        Self {
            window,
            frame_cb,
            resize_cb: None,
        }
    }
}

impl FrameHost for RafHost {
    type Token = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let cb = self.frame_cb.borrow();
        let cb = cb.as_ref()?;
        match self
            .window
            .request_animation_frame(cb.as_ref().unchecked_ref())
        {
            Ok(id) => Some(id),
            Err(e) => {
                log::debug!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, token: i32) {
        _ = self.window.cancel_animation_frame(token);
    }

    fn detach_resize(&mut self) {
        if let Some(cb) = self.resize_cb.take() {
            _ = self
                .window
                .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
        }
    }
}

/// Install the frame and resize callbacks for `frame_loop` and request the
/// first frame. Both callbacks hold the loop weakly.
pub fn start_loop(
    window: &web::Window,
    frame_loop: &Rc<RefCell<WebLoop>>,
    frame_cb: &FrameCallback,
) -> anyhow::Result<()> {
    let weak: Weak<RefCell<WebLoop>> = Rc::downgrade(frame_loop);
    *frame_cb.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(l) = weak.upgrade() {
            l.borrow_mut().tick();
        }
    }) as Box<dyn FnMut()>));

    let weak = Rc::downgrade(frame_loop);
    let window_resize = window.clone();
    let resize_cb = Closure::wrap(Box::new(move || {
        if let Some(l) = weak.upgrade() {
            l.borrow_mut().resize(dom::window_viewport(&window_resize));
        }
    }) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("resize listener: {:?}", e))?;

    let mut l = frame_loop.borrow_mut();
    l.host_mut().resize_cb = Some(resize_cb);
    l.start();
    Ok(())
}
