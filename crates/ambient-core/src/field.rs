use crate::config::BackdropConfig;
use crate::constants::MAX_ORBS;
use crate::error::BackdropError;
use crate::orb::{Orb, Viewport};
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

pub type OrbSet = SmallVec<[Orb; MAX_ORBS]>;

/// The fixed set of orbs plus the bounds they wrap within.
///
/// Orbs are created together and dropped together; nothing adds or removes
/// one individually.
#[derive(Clone, Debug)]
pub struct OrbField {
    orbs: OrbSet,
    viewport: Viewport,
}

impl OrbField {
    /// Scatter `config.orb_count` orbs uniformly over the viewport. Colour
    /// slots are assigned round-robin by index.
    pub fn spawn<R: Rng + ?Sized>(
        config: &BackdropConfig,
        viewport: Viewport,
        rng: &mut R,
    ) -> Result<Self, BackdropError> {
        config.validate()?;
        let orbs = (0..config.orb_count)
            .map(|i| {
                let position = Vec2::new(
                    rng.gen::<f32>() * viewport.width,
                    rng.gen::<f32>() * viewport.height,
                );
                let velocity = Vec2::new(
                    (rng.gen::<f32>() - 0.5) * config.speed,
                    (rng.gen::<f32>() - 0.5) * config.speed,
                );
                let radius = config.radius_min + rng.gen::<f32>() * config.radius_span;
                Orb::new(position, velocity, radius, i % config.palette.len())
            })
            .collect::<OrbSet>();
        log::debug!(
            "[field] spawned {} orbs in {}x{}",
            orbs.len(),
            viewport.width,
            viewport.height
        );
        Ok(Self { orbs, viewport })
    }

    pub fn from_orbs(orbs: impl IntoIterator<Item = Orb>, viewport: Viewport) -> Self {
        Self {
            orbs: orbs.into_iter().collect(),
            viewport,
        }
    }

    pub fn orbs(&self) -> &[Orb] {
        &self.orbs
    }

    pub fn len(&self) -> usize {
        self.orbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orbs.is_empty()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// New bounds only; orbs keep their positions and wrap on their next crossing.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn step(&mut self) {
        let viewport = self.viewport;
        for orb in &mut self.orbs {
            orb.step(viewport);
        }
    }

    /// Step orbs in index order, handing each one to `visit` right after it moves.
    pub fn step_each(&mut self, mut visit: impl FnMut(&Orb)) {
        let viewport = self.viewport;
        for orb in &mut self.orbs {
            orb.step(viewport);
            visit(orb);
        }
    }
}
