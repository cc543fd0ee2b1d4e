#![doc = r#"
TERRAMAP — a satellite raster to terrain map and table processor.

This crate turns a raster image of terrain into a coarse three-color
categorical map (water, land, other) plus flat tabular records for each
categorized grid cell, ready for downstream simulation and reporting tools.
It powers the TERRAMAP CLI and can be embedded in your own Rust applications.

The pipeline is strictly sequential and single-pass: load raster → compute a
downscale factor bounded by a record budget → area-average downscale →
HSV-threshold classification → render a verification preview → emit one row
per water cell and one row (with seeded synthetic soil attributes) per land
cell. Cells classified as other terrain appear in the preview but produce no
table row.

Quick start: process a raster to files
--------------------------------------
```rust,no_run
use std::path::Path;
use terramap::{process_raster_to_path, PipelineParams, PreviewFormat};

fn main() -> terramap::Result<()> {
    let params = PipelineParams {
        record_budget: 10_000,
        seed: 42,
        preview_format: PreviewFormat::PNG,
    };

    let report = process_raster_to_path(
        Path::new("map_satellite.jpg"),
        Path::new("map_3color.png"),
        Path::new("land.csv"),
        Path::new("water.csv"),
        &params,
    )?;

    println!(
        "grid {}x{}: {} water, {} land, {} other",
        report.grid_width,
        report.grid_height,
        report.counts.water,
        report.counts.land,
        report.counts.other
    );
    Ok(())
}
```

Classify in-memory to `ClassifiedMap`
-------------------------------------
```rust,no_run
use std::path::Path;
use terramap::{classify_raster_to_buffer, PipelineParams};

fn main() -> terramap::Result<()> {
    let map = classify_raster_to_buffer(Path::new("map_satellite.jpg"), &PipelineParams::default())?;
    // Inspect `map.grid` cells or reuse `map.preview` RGB bytes in your pipeline.
    Ok(())
}
```

Error handling
--------------
All public functions return `terramap::Result<T>`; match on `terramap::Error`
to handle specific cases. Input failures (`InputError`) and parameter
failures (`ConfigError`) abort before any output file is written, so a failed
run never leaves a partial mix of artifacts.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — enums and core types (`Category`, `PreviewFormat`).
- [`io`] — raster reader and preview/table writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::PipelineParams;
pub use crate::core::processing::classify::{CategoryCounts, ClassifiedGrid};
pub use error::{ConfigError, Error, Result};
pub use types::{Category, PreviewFormat, Rgb};

// Readers
pub use io::reader::{InputError, RasterImage};

// High-level API re-exports
pub use api::{
    ClassifiedMap, PipelineReport, classify_raster, classify_raster_to_buffer,
    process_raster_to_path,
};
