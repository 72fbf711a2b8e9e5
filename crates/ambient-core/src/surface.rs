//! Drawing seam between the animator and whatever actually puts pixels on screen.
//!
//! The web front-end implements [`Surface`] on a 2D canvas context; the
//! [`RecordingSurface`] here keeps a log of calls so the animator can run
//! headless on the host.

use crate::orb::Viewport;
use crate::palette::Rgba;
use glam::Vec2;

/// A filled disc shaded with a radial gradient: `color` at the centre,
/// fully transparent at `radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbPaint {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

pub trait Surface {
    fn resize(&mut self, viewport: Viewport);
    fn clear(&mut self);
    fn fill_orb(&mut self, paint: &OrbPaint);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Resize(Viewport),
    Clear,
    FillOrb(OrbPaint),
}

#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub viewport: Viewport,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            calls: Vec::new(),
        }
    }

    /// Paints issued since the most recent clear, i.e. the current frame.
    pub fn last_frame(&self) -> Vec<OrbPaint> {
        let start = self
            .calls
            .iter()
            .rposition(|c| matches!(c, DrawCall::Clear))
            .map_or(0, |i| i + 1);
        self.calls[start..]
            .iter()
            .filter_map(|c| match c {
                DrawCall::FillOrb(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    pub fn clear_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Clear))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.calls.push(DrawCall::Resize(viewport));
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_orb(&mut self, paint: &OrbPaint) {
        self.calls.push(DrawCall::FillOrb(*paint));
    }
}
