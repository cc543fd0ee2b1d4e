//! Preview image writers: PNG (lossless, faithful three-color artifact)
//! and JPEG for quick visual checks.
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use jpeg_encoder::{ColorType, Encoder};

use crate::types::PreviewFormat;

pub fn write_rgb_png(
    output: &Path,
    cols: usize,
    rows: usize,
    rgb_data: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    image::save_buffer_with_format(
        output,
        rgb_data,
        cols as u32,
        rows as u32,
        image::ExtendedColorType::Rgb8,
        image::ImageFormat::Png,
    )?;
    Ok(())
}

pub fn write_rgb_jpeg(
    output: &Path,
    cols: usize,
    rows: usize,
    rgb_data: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, 100);
    encoder.encode(rgb_data, cols as u16, rows as u16, ColorType::Rgb)?;
    Ok(())
}

/// Encode the rendered preview in the configured format.
pub fn write_preview(
    output: &Path,
    format: PreviewFormat,
    cols: usize,
    rows: usize,
    rgb_data: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        PreviewFormat::PNG => write_rgb_png(output, cols, rows, rgb_data),
        PreviewFormat::JPEG => write_rgb_jpeg(output, cols, rows, rgb_data),
    }
}
