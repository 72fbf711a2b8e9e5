use crate::config::BackdropConfig;
use crate::error::BackdropError;
use crate::field::OrbField;
use crate::orb::Viewport;
use crate::palette::Palette;
use crate::surface::{OrbPaint, Surface};
use crate::theme::ThemeSource;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Running,
    Stopped,
}

/// Steps the orb field and repaints it once per frame.
///
/// Starts `Running`; `stop` moves it to `Stopped` for good. A fresh mount
/// builds a fresh animator.
pub struct Animator<S: Surface, T: ThemeSource> {
    field: OrbField,
    palette: Palette,
    surface: S,
    theme: T,
    state: State,
}

impl<S: Surface, T: ThemeSource> Animator<S, T> {
    pub fn new(field: OrbField, palette: Palette, mut surface: S, theme: T) -> Self {
        surface.resize(field.viewport());
        Self {
            field,
            palette,
            surface,
            theme,
            state: State::Running,
        }
    }

    /// Spawn a field for `config` and wrap it in a running animator.
    pub fn spawn<R: Rng + ?Sized>(
        config: &BackdropConfig,
        viewport: Viewport,
        rng: &mut R,
        surface: S,
        theme: T,
    ) -> Result<Self, BackdropError> {
        let field = OrbField::spawn(config, viewport, rng)?;
        Ok(Self::new(field, config.palette.clone(), surface, theme))
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    pub fn field(&self) -> &OrbField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Draw the next frame. Returns `false` without touching anything once stopped.
    pub fn frame(&mut self) -> bool {
        if self.state == State::Stopped {
            return false;
        }
        let theme = self.theme.current();
        self.surface.clear();
        let palette = &self.palette;
        let surface = &mut self.surface;
        self.field.step_each(|orb| {
            surface.fill_orb(&OrbPaint {
                center: orb.position(),
                radius: orb.radius(),
                color: palette.color(orb.color_slot(), theme),
            });
        });
        true
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if self.state == State::Stopped {
            return;
        }
        log::debug!("[animator] resize {}x{}", viewport.width, viewport.height);
        self.surface.resize(viewport);
        self.field.resize(viewport);
    }

    pub fn stop(&mut self) {
        if self.state == State::Running {
            log::debug!("[animator] stopped");
        }
        self.state = State::Stopped;
    }
}
