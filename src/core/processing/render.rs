//! Preview rendering: paints each classified cell with its fixed display
//! color and upsamples back to the source resolution with hard edges.
use tracing::info;

use crate::core::processing::classify::ClassifiedGrid;
use crate::types::{Category, Rgb};

pub const WATER_COLOR: Rgb = [0, 0, 255];
pub const LAND_COLOR: Rgb = [0, 255, 0];
pub const OTHER_COLOR: Rgb = [165, 42, 42];

/// Fixed display color for a category. Injective: distinct categories map to
/// distinct colors, so a preview can be read back at block granularity.
pub fn display_color(category: Category) -> Rgb {
    match category {
        Category::Water => WATER_COLOR,
        Category::Land => LAND_COLOR,
        Category::Other => OTHER_COLOR,
    }
}

/// Inverse of [`display_color`], for consumers inspecting a preview.
pub fn category_for_color(px: Rgb) -> Option<Category> {
    match px {
        WATER_COLOR => Some(Category::Water),
        LAND_COLOR => Some(Category::Land),
        OTHER_COLOR => Some(Category::Other),
        _ => None,
    }
}

/// Render the grid at `out_w` x `out_h` as interleaved RGB bytes.
///
/// Upsampling is nearest-neighbor, never interpolated, so category
/// boundaries stay crisp rectangular blocks matching the resampling cell
/// size. The preview is a diagnostic artifact only.
pub fn render_preview(grid: &ClassifiedGrid, out_w: usize, out_h: usize) -> Vec<u8> {
    let (down_w, down_h) = (grid.width(), grid.height());
    info!("Rendering preview {}x{} from {}x{} grid", out_w, out_h, down_w, down_h);

    let cells = grid.cells();
    let mut rgb_data = Vec::with_capacity(out_w * out_h * 3);
    for y in 0..out_h {
        let sy = (y * down_h / out_h).min(down_h - 1);
        for x in 0..out_w {
            let sx = (x * down_w / out_w).min(down_w - 1);
            let color = display_color(cells[[sy, sx]]);
            rgb_data.extend_from_slice(&color);
        }
    }
    rgb_data
}
