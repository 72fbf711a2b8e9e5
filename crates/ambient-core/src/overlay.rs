//! Static texture drawn over the orbs.
//!
//! The layer is emitted once as CSS; a `html.dark` rule swaps its opacity so
//! theme changes never need a redraw.

use crate::constants::*;
use crate::theme::Theme;
use std::fmt::Write;

// Fractal-noise tile (feTurbulence, baseFrequency 0.9, 4 octaves), already URL-encoded
pub const NOISE_DATA_URI: &str = "data:image/svg+xml,%3Csvg viewBox='0 0 200 200' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='noiseFilter'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.9' numOctaves='4' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23noiseFilter)'/%3E%3C/svg%3E";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayPattern {
    Noise,
    Glyphs,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverlayLayer {
    pub pattern: OverlayPattern,
    pub light_opacity: f32,
    pub dark_opacity: f32,
}

impl OverlayLayer {
    pub fn noise() -> Self {
        Self {
            pattern: OverlayPattern::Noise,
            light_opacity: NOISE_OPACITY_LIGHT,
            dark_opacity: NOISE_OPACITY_DARK,
        }
    }

    pub fn glyphs() -> Self {
        Self {
            pattern: OverlayPattern::Glyphs,
            light_opacity: GLYPH_OPACITY_LIGHT,
            dark_opacity: GLYPH_OPACITY_DARK,
        }
    }

    pub fn opacity(&self, theme: Theme) -> f32 {
        match theme {
            Theme::Light => self.light_opacity,
            Theme::Dark => self.dark_opacity,
        }
    }

    pub fn data_uri(&self) -> String {
        match self.pattern {
            OverlayPattern::Noise => NOISE_DATA_URI.to_string(),
            OverlayPattern::Glyphs => svg_data_uri(&glyph_tile_svg()),
        }
    }

    /// CSS `background-image` value.
    pub fn background_image(&self) -> String {
        format!("url(\"{}\")", self.data_uri())
    }

    /// Rules for an element carrying `class`, light opacity by default and
    /// dark opacity under `html.dark`.
    pub fn stylesheet(&self, class: &str) -> String {
        let mut css = String::new();
        _ = write!(
            css,
            ".{class}{{position:absolute;inset:0;pointer-events:none;background-image:{};opacity:{};",
            self.background_image(),
            self.light_opacity
        );
        if self.pattern == OverlayPattern::Glyphs {
            let tile = GLYPH_TILE_PX * GLYPH_TILE_CELLS;
            _ = write!(css, "background-size:{tile}px {tile}px;");
        }
        css.push('}');
        _ = write!(css, "html.{DARK_CLASS} .{class}{{opacity:{};}}", self.dark_opacity);
        css
    }
}

/// Square tile of faint grid lines with a code glyph in every other cell.
/// Placement is a fixed function of the cell index so the tile repeats seamlessly.
pub fn glyph_tile_svg() -> String {
    let cell = GLYPH_TILE_PX;
    let size = cell * GLYPH_TILE_CELLS;
    let mut svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{size}' height='{size}' viewBox='0 0 {size} {size}'>"
    );
    svg.push_str("<g stroke='rgba(59,130,246,0.1)' stroke-width='1'>");
    for i in 0..GLYPH_TILE_CELLS {
        let o = i * cell;
        _ = write!(svg, "<line x1='{o}' y1='0' x2='{o}' y2='{size}'/>");
        _ = write!(svg, "<line x1='0' y1='{o}' x2='{size}' y2='{o}'/>");
    }
    svg.push_str("</g>");
    svg.push_str(
        "<g fill='rgb(99,102,241)' font-family='monospace' font-size='10' text-anchor='middle'>",
    );
    for row in 0..GLYPH_TILE_CELLS {
        for col in 0..GLYPH_TILE_CELLS {
            if (row + col) % 2 != 0 {
                continue;
            }
            let glyph = GLYPHS[((row * 3 + col * 5) as usize) % GLYPHS.len()];
            let x = col * cell + cell / 2;
            let y = row * cell + cell / 2 + 3;
            _ = write!(svg, "<text x='{x}' y='{y}'>{}</text>", xml_escape(glyph));
        }
    }
    svg.push_str("</g></svg>");
    svg
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode the characters that break an SVG inside a CSS `url("...")`.
pub fn svg_data_uri(svg: &str) -> String {
    let mut out = String::from("data:image/svg+xml,");
    for c in svg.chars() {
        match c {
            '%' => out.push_str("%25"),
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            '#' => out.push_str("%23"),
            '"' => out.push_str("%22"),
            '&' => out.push_str("%26"),
            '{' => out.push_str("%7B"),
            '}' => out.push_str("%7D"),
            '\n' => {}
            _ => out.push(c),
        }
    }
    out
}
