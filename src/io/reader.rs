//! Raster input layer: decodes an encoded image file into an in-memory
//! `RasterImage` of RGB triples.
use std::path::{Path, PathBuf};

use image::ImageReader;
use ndarray::Array2;
use thiserror::Error;
use tracing::info;

use crate::types::Rgb;

/// Errors raised while opening or decoding the source raster.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot open image {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot decode image {path:?}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Source raster held fully in memory. Immutable once loaded.
///
/// Pixels are stored row-major as `[y, x]`, matching the downscaled grid
/// indexing used by the rest of the pipeline.
#[derive(Debug, Clone)]
pub struct RasterImage {
    width: usize,
    height: usize,
    pixels: Array2<Rgb>,
}

impl RasterImage {
    /// Decode the image at `path` into an RGB buffer. Alpha, palette, and
    /// grayscale sources are converted to RGB by the decoder.
    pub fn open(path: &Path) -> Result<Self, InputError> {
        let reader = ImageReader::open(path).map_err(|source| InputError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let decoded = reader.decode().map_err(|source| InputError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let rgb = decoded.to_rgb8();
        let (width, height) = (rgb.width() as usize, rgb.height() as usize);
        info!("Loaded raster {:?}: {}x{}", path, width, height);

        let pixels = Array2::from_shape_fn((height, width), |(y, x)| {
            let p = rgb.get_pixel(x as u32, y as u32);
            [p[0], p[1], p[2]]
        });

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a raster directly from a pixel buffer (`[y, x]` indexed).
    pub fn from_pixels(pixels: Array2<Rgb>) -> Self {
        let (height, width) = pixels.dim();
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &Array2<Rgb> {
        &self.pixels
    }
}
