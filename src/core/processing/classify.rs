//! HSV threshold classification of reduced pixels into terrain categories.
//!
//! Hue is kept on the half-degree scale (0..180) with saturation and value in
//! 0..255, so the threshold bands read the same as the common 8-bit HSV
//! convention used by imaging toolkits.
use ndarray::Array2;

use crate::types::{Category, Rgb};

/// 8-bit HSV triple, hue on the half-degree scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

const WATER_LOWER: Hsv = Hsv { h: 100, s: 50, v: 50 };
const WATER_UPPER: Hsv = Hsv { h: 140, s: 255, v: 255 };
const LAND_LOWER: Hsv = Hsv { h: 40, s: 40, v: 40 };
const LAND_UPPER: Hsv = Hsv { h: 80, s: 255, v: 255 };

/// Convert an RGB pixel to 8-bit HSV.
pub fn rgb_to_hsv(px: Rgb) -> Hsv {
    let r = px[0] as f32;
    let g = px[1] as f32;
    let b = px[2] as f32;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max * 255.0 };

    let hue_deg = if delta == 0.0 {
        0.0
    } else if max == r {
        let h = 60.0 * (g - b) / delta;
        if h < 0.0 { h + 360.0 } else { h }
    } else if max == g {
        120.0 + 60.0 * (b - r) / delta
    } else {
        240.0 + 60.0 * (r - g) / delta
    };

    Hsv {
        h: ((hue_deg / 2.0).round() as u16 % 180) as u8,
        s: s.round() as u8,
        v: max as u8,
    }
}

fn in_band(hsv: Hsv, lower: Hsv, upper: Hsv) -> bool {
    (lower.h..=upper.h).contains(&hsv.h)
        && (lower.s..=upper.s).contains(&hsv.s)
        && (lower.v..=upper.v).contains(&hsv.v)
}

/// Assign a single reduced pixel to exactly one category.
///
/// Water is checked before land; if the bands are ever widened to overlap,
/// water keeps precedence. Anything outside both bands is `Other`.
pub fn classify_pixel(px: Rgb) -> Category {
    let hsv = rgb_to_hsv(px);
    if in_band(hsv, WATER_LOWER, WATER_UPPER) {
        Category::Water
    } else if in_band(hsv, LAND_LOWER, LAND_UPPER) {
        Category::Land
    } else {
        Category::Other
    }
}

/// Per-category cell tallies of a classified grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCounts {
    pub water: usize,
    pub land: usize,
    pub other: usize,
}

impl CategoryCounts {
    pub fn total(&self) -> usize {
        self.water + self.land + self.other
    }
}

/// Downscaled grid where every cell holds exactly one category.
/// Derived once from the reduced raster and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ClassifiedGrid {
    cells: Array2<Category>,
}

impl ClassifiedGrid {
    /// Classify every pixel of the reduced raster in a single pass.
    pub fn classify(reduced: &Array2<Rgb>) -> Self {
        Self {
            cells: reduced.map(|&px| classify_pixel(px)),
        }
    }

    pub fn width(&self) -> usize {
        self.cells.dim().1
    }

    pub fn height(&self) -> usize {
        self.cells.dim().0
    }

    /// Row-major cells, indexed `[y, x]`.
    pub fn cells(&self) -> &Array2<Category> {
        &self.cells
    }

    pub fn counts(&self) -> CategoryCounts {
        let mut counts = CategoryCounts {
            water: 0,
            land: 0,
            other: 0,
        };
        for cat in self.cells.iter() {
            match cat {
                Category::Water => counts.water += 1,
                Category::Land => counts.land += 1,
                Category::Other => counts.other += 1,
            }
        }
        counts
    }
}
