//! High-level, ergonomic library API: classify a raster to in-memory buffers,
//! or run the whole pipeline to output files. Prefer these entrypoints over
//! the low-level processing modules when embedding TERRAMAP.
use std::path::Path;

use tracing::info;

use crate::core::params::PipelineParams;
use crate::core::processing::attributes::AttributeSampler;
use crate::core::processing::classify::{CategoryCounts, ClassifiedGrid};
use crate::core::processing::render::render_preview;
use crate::core::processing::resample::resample;
use crate::error::{Error, Result};
use crate::io::reader::RasterImage;
use crate::io::writers::preview::write_preview;
use crate::io::writers::tables::write_terrain_tables;

/// Result of in-memory classification (no disk I/O beyond the input read)
#[derive(Debug, Clone)]
pub struct ClassifiedMap {
    pub source_width: usize,
    pub source_height: usize,
    pub scale_factor: usize,
    pub grid: ClassifiedGrid,
    /// Interleaved RGB preview at source resolution
    pub preview: Vec<u8>,
}

/// Summary of a completed run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub scale_factor: usize,
    pub grid_width: usize,
    pub grid_height: usize,
    pub counts: CategoryCounts,
    pub land_rows: usize,
    pub water_rows: usize,
}

/// Load, resample, classify, and render a raster entirely in memory.
pub fn classify_raster_to_buffer(input: &Path, params: &PipelineParams) -> Result<ClassifiedMap> {
    let raster = RasterImage::open(input)?;
    classify_raster(&raster, params)
}

/// Same as [`classify_raster_to_buffer`] for an already loaded raster.
pub fn classify_raster(raster: &RasterImage, params: &PipelineParams) -> Result<ClassifiedMap> {
    let reduced = resample(raster, params.record_budget)?;
    let grid = ClassifiedGrid::classify(&reduced.pixels);
    let preview = render_preview(&grid, raster.width(), raster.height());

    Ok(ClassifiedMap {
        source_width: raster.width(),
        source_height: raster.height(),
        scale_factor: reduced.scale_factor,
        grid,
        preview,
    })
}

/// Run the full pipeline: input raster in, preview image and both tables out.
///
/// Classification and rendering complete in memory before any output file is
/// created, so a failed run never leaves a partial mix of stale and fresh
/// artifacts.
pub fn process_raster_to_path(
    input: &Path,
    preview_out: &Path,
    land_out: &Path,
    water_out: &Path,
    params: &PipelineParams,
) -> Result<PipelineReport> {
    let map = classify_raster_to_buffer(input, params)?;

    write_preview(
        preview_out,
        params.preview_format,
        map.source_width,
        map.source_height,
        &map.preview,
    )
    .map_err(Error::encode)?;

    let mut sampler = AttributeSampler::new(params.seed);
    let (land_rows, water_rows) = write_terrain_tables(&map.grid, &mut sampler, land_out, water_out)?;

    let counts = map.grid.counts();
    info!(
        "Classified {}x{} grid: {} water, {} land, {} other",
        map.grid.width(),
        map.grid.height(),
        counts.water,
        counts.land,
        counts.other
    );

    Ok(PipelineReport {
        scale_factor: map.scale_factor,
        grid_width: map.grid.width(),
        grid_height: map.grid.height(),
        counts,
        land_rows,
        water_rows,
    })
}
