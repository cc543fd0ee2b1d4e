//! I/O layer for decoding source rasters and writing run artifacts.
//! Provides the `reader` raster loader and `writers` for the preview
//! image and the land/water tables.
pub mod reader;
pub use reader::{InputError, RasterImage};

pub mod writers;
