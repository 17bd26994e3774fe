//! Render model for the heatmap drawn over an analyzed image.
//!
//! The grid is stretched over the image's natural size. Faint cells are
//! skipped; the rest become red rectangles whose opacity and lightness
//! follow the intensity.

use serde::Serialize;

use deepauth_core::Heatmap;

/// Cells at or below this intensity are not drawn.
pub const RENDER_THRESHOLD: f64 = 0.3;

const ALPHA_SCALE: f64 = 0.6;
const ALPHA_CAP: f64 = 0.7;

/// CSS-style `hsla()` colour.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Hsla {
    pub hue: f64,
    /// Percent.
    pub saturation: f64,
    /// Percent.
    pub lightness: f64,
    pub alpha: f64,
}

impl core::fmt::Display for Hsla {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// Colour for one intensity, or `None` if the cell is too faint to draw.
///
/// Intensities above 1.0 come out darker with the alpha already capped.
pub fn cell_color(intensity: f64) -> Option<Hsla> {
    if intensity.is_nan() || intensity <= RENDER_THRESHOLD {
        return None;
    }
    Some(Hsla {
        hue: 0.0,
        saturation: 100.0,
        lightness: 50.0 + (1.0 - intensity) * 20.0,
        alpha: (intensity * ALPHA_SCALE).min(ALPHA_CAP),
    })
}

/// One drawable rectangle, in image pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayCell {
    pub row: usize,
    pub col: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub intensity: f64,
    pub color: Hsla,
}

/// Drawable cells for `heatmap` laid over an image of the given natural size.
pub fn overlay_cells(heatmap: &Heatmap, image_width: f64, image_height: f64) -> Vec<OverlayCell> {
    let size = heatmap.size();
    if size == 0 {
        return Vec::new();
    }
    let cell_w = image_width / size as f64;
    let cell_h = image_height / size as f64;

    heatmap
        .cells()
        .filter_map(|(row, col, intensity)| {
            cell_color(intensity).map(|color| OverlayCell {
                row,
                col,
                x: col as f64 * cell_w,
                y: row as f64 * cell_h,
                width: cell_w,
                height: cell_h,
                intensity,
                color,
            })
        })
        .collect()
}
