use crate::theme::Theme;
use smallvec::SmallVec;

/// Straight (non-premultiplied) colour with an 8-bit RGB triple and float alpha,
/// the shape CSS colour strings take.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0.0)
    }

    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

// Single translucent colour per slot, identical in both themes
pub const CLASSIC_COLORS: [Rgba; 3] = [
    Rgba::new(59, 130, 246, 0.03),  // blue
    Rgba::new(139, 92, 246, 0.03),  // violet
    Rgba::new(236, 72, 153, 0.03),  // pink
];

pub const PAIRED_DARK_COLORS: [Rgba; 4] = [
    Rgba::new(129, 140, 248, 0.10), // indigo
    Rgba::new(167, 139, 250, 0.09), // violet
    Rgba::new(244, 114, 182, 0.08), // pink
    Rgba::new(34, 211, 238, 0.07),  // cyan
];

pub const PAIRED_LIGHT_COLORS: [Rgba; 4] = [
    Rgba::new(99, 102, 241, 0.06),
    Rgba::new(139, 92, 246, 0.05),
    Rgba::new(236, 72, 153, 0.05),
    Rgba::new(14, 165, 233, 0.05),
];

/// Parallel dark/light colour lists indexed by orb slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    dark: SmallVec<[Rgba; 4]>,
    light: SmallVec<[Rgba; 4]>,
}

impl Palette {
    /// Both lists must be non-empty and of equal length; see `is_well_formed`.
    pub fn new(dark: &[Rgba], light: &[Rgba]) -> Self {
        Self {
            dark: SmallVec::from_slice(dark),
            light: SmallVec::from_slice(light),
        }
    }

    pub fn uniform(colors: &[Rgba]) -> Self {
        Self::new(colors, colors)
    }

    pub fn classic() -> Self {
        Self::uniform(&CLASSIC_COLORS)
    }

    pub fn paired() -> Self {
        Self::new(&PAIRED_DARK_COLORS, &PAIRED_LIGHT_COLORS)
    }

    pub fn len(&self) -> usize {
        self.dark.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dark.is_empty()
    }

    pub fn is_well_formed(&self) -> bool {
        !self.dark.is_empty() && self.dark.len() == self.light.len()
    }

    /// Colour for an orb slot under `theme`; slots past the end wrap round-robin.
    pub fn color(&self, slot: usize, theme: Theme) -> Rgba {
        let list = match theme {
            Theme::Dark => &self.dark,
            Theme::Light => &self.light,
        };
        if list.is_empty() {
            return Rgba::transparent();
        }
        list[slot % list.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}
