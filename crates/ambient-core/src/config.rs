use crate::constants::*;
use crate::error::BackdropError;
use crate::overlay::OverlayLayer;
use crate::palette::Palette;

/// The two shipped looks. Classic is the default when nothing is requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Classic,
    Paired,
}

impl Variant {
    pub fn all() -> &'static [Variant] {
        &[Variant::Classic, Variant::Paired]
    }

    pub fn id(self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Paired => "paired",
        }
    }

    pub fn from_id(id: &str) -> Result<Self, BackdropError> {
        match id.trim().to_ascii_lowercase().as_str() {
            "" | "classic" => Ok(Variant::Classic),
            "paired" => Ok(Variant::Paired),
            other => Err(BackdropError::UnknownVariant(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BackdropConfig {
    pub orb_count: usize,
    /// Width of the symmetric range each velocity component is drawn from.
    pub speed: f32,
    pub radius_min: f32,
    pub radius_span: f32,
    pub palette: Palette,
    pub overlay: OverlayLayer,
}

impl BackdropConfig {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Self {
                orb_count: CLASSIC_ORB_COUNT,
                speed: ORB_SPEED,
                radius_min: ORB_RADIUS_MIN,
                radius_span: ORB_RADIUS_SPAN,
                palette: Palette::classic(),
                overlay: OverlayLayer::noise(),
            },
            Variant::Paired => Self {
                orb_count: PAIRED_ORB_COUNT,
                speed: ORB_SPEED,
                radius_min: ORB_RADIUS_MIN,
                radius_span: ORB_RADIUS_SPAN,
                palette: Palette::paired(),
                overlay: OverlayLayer::glyphs(),
            },
        }
    }

    pub fn validate(&self) -> Result<(), BackdropError> {
        if self.orb_count == 0 || self.orb_count > MAX_ORBS {
            return Err(BackdropError::InvalidConfig(format!(
                "orb_count must be in 1..={MAX_ORBS}, got {}",
                self.orb_count
            )));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(BackdropError::InvalidConfig(format!(
                "speed must be finite and non-negative, got {}",
                self.speed
            )));
        }
        if !self.radius_min.is_finite() || self.radius_min <= 0.0 {
            return Err(BackdropError::InvalidConfig(format!(
                "radius_min must be positive, got {}",
                self.radius_min
            )));
        }
        if !self.radius_span.is_finite() || self.radius_span < 0.0 {
            return Err(BackdropError::InvalidConfig(format!(
                "radius_span must be non-negative, got {}",
                self.radius_span
            )));
        }
        if !self.palette.is_well_formed() {
            return Err(BackdropError::InvalidConfig(
                "palette needs matching, non-empty dark and light lists".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self::for_variant(Variant::Classic)
    }
}

/// Console log level from a `data-log-level` style attribute (`"debug"`,
/// `"warn"`, ...). Missing or unrecognised values give `Info`.
pub fn log_level_from_attr(attr: Option<&str>) -> log::Level {
    attr.and_then(|s| s.trim().parse().ok())
        .unwrap_or(log::Level::Info)
}
