// Shared tuning constants for the backdrop, used by the core and the web front-end.

// Orb set
pub const CLASSIC_ORB_COUNT: usize = 3;
pub const PAIRED_ORB_COUNT: usize = 4;
pub const MAX_ORBS: usize = 4; // inline capacity of the orb set

// Motion: each velocity component is drawn from [-ORB_SPEED / 2, ORB_SPEED / 2) px per frame
pub const ORB_SPEED: f32 = 0.3;

// Radius band: [ORB_RADIUS_MIN, ORB_RADIUS_MIN + ORB_RADIUS_SPAN)
pub const ORB_RADIUS_MIN: f32 = 200.0;
pub const ORB_RADIUS_SPAN: f32 = 300.0;

// Overlay opacity per theme
pub const NOISE_OPACITY_LIGHT: f32 = 0.015;
pub const NOISE_OPACITY_DARK: f32 = 0.02;
pub const GLYPH_OPACITY_LIGHT: f32 = 0.2;
pub const GLYPH_OPACITY_DARK: f32 = 0.1;

// Glyph grid tile
pub const GLYPH_TILE_PX: u32 = 50; // grid pitch
pub const GLYPH_TILE_CELLS: u32 = 4; // tile is CELLS x CELLS grid squares
pub const GLYPHS: [&str; 9] = ["</>", "{}", "[]", "fn()", "const", "var", "let", "if", "for"];

// Class toggled on <html> by the theme switcher
pub const DARK_CLASS: &str = "dark";

// Frames per frame-statistics log line (~10 s at 60 Hz)
pub const STATS_WINDOW: u32 = 600;
