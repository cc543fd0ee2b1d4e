//! Budget-driven area-average downscaling.
//!
//! The downscale factor is derived from the source pixel count and the record
//! budget so that the reduced grid never produces more table rows than the
//! budget allows. Reduction uses a box filter: each destination cell is the
//! mean of every source pixel it covers. Averaging suppresses local texture
//! noise (wave ripples, shadow speckle) that a single-sample nearest-pixel
//! reduction would misclassify.
use ndarray::Array2;
use tracing::info;

use crate::error::ConfigError;
use crate::io::reader::RasterImage;
use crate::types::Rgb;

/// Reduced-resolution raster together with the factor it was reduced by.
#[derive(Debug, Clone)]
pub struct Resampled {
    pub scale_factor: usize,
    pub pixels: Array2<Rgb>,
}

/// `ceil(sqrt(width * height / budget))`, clamped to a minimum of 1.
pub fn compute_scale_factor(
    width: usize,
    height: usize,
    budget: usize,
) -> Result<usize, ConfigError> {
    if budget == 0 {
        return Err(ConfigError::ZeroBudget);
    }
    if width == 0 || height == 0 {
        return Err(ConfigError::EmptyRaster { width, height });
    }

    let total_pixels = (width * height) as f64;
    let factor = (total_pixels / budget as f64).sqrt().ceil() as usize;
    Ok(factor.max(1))
}

/// Downscaled dimensions for a given factor, floored but never below 1.
pub fn downscale_dimensions(width: usize, height: usize, scale_factor: usize) -> (usize, usize) {
    ((width / scale_factor).max(1), (height / scale_factor).max(1))
}

/// Reduce `raster` so the result holds at most roughly `budget` cells.
pub fn resample(raster: &RasterImage, budget: usize) -> Result<Resampled, ConfigError> {
    let (width, height) = (raster.width(), raster.height());
    let scale_factor = compute_scale_factor(width, height, budget)?;
    let (down_w, down_h) = downscale_dimensions(width, height, scale_factor);

    info!(
        "Original: {}x{}, downscaled: {}x{}, scale_factor={}",
        width, height, down_w, down_h, scale_factor
    );

    let src = raster.pixels();
    let pixels = Array2::from_shape_fn((down_h, down_w), |(dy, dx)| {
        // Integer window boundaries; together the windows cover every source
        // pixel exactly once.
        let x0 = dx * width / down_w;
        let x1 = (dx + 1) * width / down_w;
        let y0 = dy * height / down_h;
        let y1 = (dy + 1) * height / down_h;

        let mut sums = [0u64; 3];
        for y in y0..y1 {
            for x in x0..x1 {
                let p = src[[y, x]];
                sums[0] += p[0] as u64;
                sums[1] += p[1] as u64;
                sums[2] += p[2] as u64;
            }
        }
        let count = ((x1 - x0) * (y1 - y0)) as u64;
        [
            ((sums[0] + count / 2) / count) as u8,
            ((sums[1] + count / 2) / count) as u8,
            ((sums[2] + count / 2) / count) as u8,
        ]
    });

    Ok(Resampled {
        scale_factor,
        pixels,
    })
}
