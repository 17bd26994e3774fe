//! Heatmap generation for image results.
//!
//! Radial falloff from the grid centre, plus noise, scaled by the score. A
//! random 30% of cells are then amplified by 1.5 *after* clamping, so some
//! cells end up above 1.0. Renderers only care about the 0.3 threshold and
//! tolerate values above 1; the overshoot is kept as-is.

use rand::Rng;

use deepauth_core::{HEATMAP_GRID_SIZE, Heatmap};

/// Half-width of the uniform noise added to each cell.
const NOISE_AMPLITUDE: f64 = 0.2;

const AMPLIFY_PROBABILITY: f64 = 0.3;
const AMPLIFY_FACTOR: f64 = 1.5;

/// Build the 20×20 intensity grid for an image scored `score` (0–100).
pub fn generate_heatmap<R: Rng>(score: f64, rng: &mut R) -> Heatmap {
    let center = HEATMAP_GRID_SIZE as f64 / 2.0;
    let max_distance = center.hypot(center);
    let multiplier = score / 100.0;

    Heatmap::from_fn(|row, col| {
        let distance = (col as f64 - center).hypot(row as f64 - center);
        let base = 1.0 - distance / max_distance;
        let noise = rng.gen_range(-NOISE_AMPLITUDE..NOISE_AMPLITUDE);

        let mut intensity = ((base + noise) * multiplier).clamp(0.0, 1.0);
        if rng.gen_bool(AMPLIFY_PROBABILITY) {
            intensity *= AMPLIFY_FACTOR;
        }
        intensity
    })
}
