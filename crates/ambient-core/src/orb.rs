use glam::Vec2;

/// Drawable area in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

/// One drifting gradient disc. Velocity and radius are fixed at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Orb {
    position: Vec2,
    velocity: Vec2,
    radius: f32,
    color_slot: usize,
}

impl Orb {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, color_slot: usize) -> Self {
        Self {
            position,
            velocity,
            radius,
            color_slot,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn color_slot(&self) -> usize {
        self.color_slot
    }

    /// Advance one frame, then wrap each axis onto the opposite edge once the
    /// disc has fully left the viewport.
    pub fn step(&mut self, viewport: Viewport) {
        let p = self.position + self.velocity;
        self.position = Vec2::new(
            wrap_axis(p.x, self.velocity.x, viewport.width, self.radius),
            wrap_axis(p.y, self.velocity.y, viewport.height, self.radius),
        );
    }

    /// `-radius <= p < extent + radius` on both axes.
    pub fn within_wrap_bounds(&self, viewport: Viewport) -> bool {
        let r = self.radius;
        let p = self.position;
        p.x >= -r && p.x < viewport.width + r && p.y >= -r && p.y < viewport.height + r
    }
}

// An orb that crossed a seam during this step carries its overshoot to the
// other side; one already further out than a single step (e.g. after the
// viewport shrank) lands exactly on the opposite bound. Either way the result
// stays in [-r, extent + r).
#[inline]
fn wrap_axis(p: f32, v: f32, extent: f32, r: f32) -> f32 {
    let lo = -r;
    let hi = extent + r;
    let span = extent + 2.0 * r;
    if p < lo {
        let carried = p + span;
        if lo - p <= v.abs() && carried >= lo && carried < hi {
            carried
        } else {
            just_below(hi).max(lo)
        }
    } else if p >= hi {
        let carried = p - span;
        if p - hi < v.abs() && carried >= lo && carried < hi {
            carried
        } else {
            lo
        }
    } else {
        p
    }
}

// Largest value the half-open upper bound admits, to within a few ulps.
#[inline]
fn just_below(hi: f32) -> f32 {
    hi - f32::EPSILON * hi.abs().max(1.0)
}
