//! Cancellable per-frame driver around an [`Animator`].
//!
//! The host supplies the display-refresh scheduler through [`FrameHost`]. On
//! the web that is `requestAnimationFrame` plus a window resize listener; in
//! tests it is a spy that counts requests.

use crate::animator::Animator;
use crate::orb::Viewport;
use crate::stats::FrameStats;
use crate::surface::Surface;
use crate::theme::ThemeSource;
use instant::Instant;

pub trait FrameHost {
    type Token;

    /// Ask for one more callback before the next repaint.
    fn request_frame(&mut self) -> Option<Self::Token>;
    fn cancel_frame(&mut self, token: Self::Token);
    /// Stop delivering resize notifications.
    fn detach_resize(&mut self);
}

pub struct FrameLoop<H: FrameHost, S: Surface, T: ThemeSource> {
    host: H,
    animator: Animator<S, T>,
    pending: Option<H::Token>,
    stats: FrameStats,
}

impl<H: FrameHost, S: Surface, T: ThemeSource> FrameLoop<H, S, T> {
    pub fn new(host: H, animator: Animator<S, T>) -> Self {
        Self {
            host,
            animator,
            pending: None,
            stats: FrameStats::default(),
        }
    }

    pub fn animator(&self) -> &Animator<S, T> {
        &self.animator
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn is_running(&self) -> bool {
        self.animator.is_running()
    }

    /// Schedule the first frame. Does nothing after `stop` or if a frame is already pending.
    pub fn start(&mut self) {
        if self.animator.is_running() && self.pending.is_none() {
            self.pending = self.host.request_frame();
        }
    }

    /// Frame callback: draw, then schedule the next one.
    pub fn tick(&mut self) {
        self.pending = None;
        if !self.animator.frame() {
            return;
        }
        // debug level: the page opts in with data-log-level="debug"
        if let Some(mean) = self.stats.tick(Instant::now()) {
            log::debug!("[loop] mean frame interval {:.2} ms", mean.as_secs_f64() * 1000.0);
        }
        self.pending = self.host.request_frame();
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.animator.resize(viewport);
    }

    /// Cancel the outstanding frame, drop the resize subscription and stop the
    /// animator. Safe to call more than once.
    pub fn stop(&mut self) {
        if !self.animator.is_running() {
            return;
        }
        if let Some(token) = self.pending.take() {
            self.host.cancel_frame(token);
        }
        self.host.detach_resize();
        self.animator.stop();
    }
}
