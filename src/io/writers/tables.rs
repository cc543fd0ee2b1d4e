//! Tabular emitters: one water table and one land table per run.
//!
//! Headers are written unconditionally so downstream consumers can rely on
//! the declared schema even when a category has zero cells. Coordinates are
//! zero-based grid indices with no gaps inside the downscaled bounds, which
//! downstream tools join on.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::core::processing::attributes::{AttributeSampler, LAND_ATTRIBUTE_COUNT};
use crate::core::processing::classify::ClassifiedGrid;
use crate::types::Category;

pub const LAND_TABLE_HEADER: &str =
    "x,y,soilBaseQuality,sunlight,nutrients,pH,organicMatter,compaction,salinity";
pub const WATER_TABLE_HEADER: &str = "x,y";

/// One land cell: grid coordinates plus seven sampled soil attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct LandRecord {
    pub x: usize,
    pub y: usize,
    pub attributes: [f64; LAND_ATTRIBUTE_COUNT],
}

impl LandRecord {
    fn write_row<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{},{}", self.x, self.y)?;
        for value in self.attributes {
            write!(out, ",{:.3}", value)?;
        }
        writeln!(out)
    }
}

/// One water cell: grid coordinates only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaterRecord {
    pub x: usize,
    pub y: usize,
}

impl WaterRecord {
    fn write_row<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{},{}", self.x, self.y)
    }
}

/// Walk the grid row-major (y outer, x inner) and write both tables.
/// Cells classified `Other` contribute no row to either output.
/// Returns the number of land and water rows written.
pub fn write_terrain_tables(
    grid: &ClassifiedGrid,
    sampler: &mut AttributeSampler,
    land_path: &Path,
    water_path: &Path,
) -> std::io::Result<(usize, usize)> {
    let mut land = BufWriter::new(File::create(land_path)?);
    let mut water = BufWriter::new(File::create(water_path)?);

    writeln!(land, "{}", LAND_TABLE_HEADER)?;
    writeln!(water, "{}", WATER_TABLE_HEADER)?;

    let mut land_rows = 0usize;
    let mut water_rows = 0usize;
    for ((y, x), &category) in grid.cells().indexed_iter() {
        match category {
            Category::Water => {
                WaterRecord { x, y }.write_row(&mut water)?;
                water_rows += 1;
            }
            Category::Land => {
                let record = LandRecord {
                    x,
                    y,
                    attributes: sampler.sample_land_attributes(),
                };
                record.write_row(&mut land)?;
                land_rows += 1;
            }
            Category::Other => {}
        }
    }

    land.flush()?;
    water.flush()?;

    info!(
        "Tables written: {} land rows -> {:?}, {} water rows -> {:?}",
        land_rows, land_path, water_rows, water_path
    );
    Ok((land_rows, water_rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::processing::classify::ClassifiedGrid;
    use ndarray::Array2;

    fn classified(pixels: Array2<[u8; 3]>) -> ClassifiedGrid {
        ClassifiedGrid::classify(&pixels)
    }

    #[test]
    fn headers_survive_empty_tables() {
        // All cells classify as Other; both tables are header-only.
        let grid = classified(Array2::from_elem((2, 2), [255u8, 255, 255]));
        let dir = tempfile::tempdir().unwrap();
        let land_path = dir.path().join("land.csv");
        let water_path = dir.path().join("water.csv");

        let mut sampler = AttributeSampler::new(0);
        let (land_rows, water_rows) =
            write_terrain_tables(&grid, &mut sampler, &land_path, &water_path).unwrap();
        assert_eq!((land_rows, water_rows), (0, 0));

        assert_eq!(
            std::fs::read_to_string(&land_path).unwrap(),
            format!("{}\n", LAND_TABLE_HEADER)
        );
        assert_eq!(
            std::fs::read_to_string(&water_path).unwrap(),
            format!("{}\n", WATER_TABLE_HEADER)
        );
    }

    #[test]
    fn rows_follow_row_major_order() {
        // Top row water-hue, bottom row land-hue.
        let grid = classified(Array2::from_shape_fn((2, 2), |(y, _)| {
            if y == 0 { [0u8, 0, 255] } else { [0u8, 255, 0] }
        }));
        let dir = tempfile::tempdir().unwrap();
        let land_path = dir.path().join("land.csv");
        let water_path = dir.path().join("water.csv");

        let mut sampler = AttributeSampler::new(99);
        let (land_rows, water_rows) =
            write_terrain_tables(&grid, &mut sampler, &land_path, &water_path).unwrap();
        assert_eq!((land_rows, water_rows), (2, 2));

        let water = std::fs::read_to_string(&water_path).unwrap();
        let lines: Vec<&str> = water.lines().collect();
        assert_eq!(lines, vec![WATER_TABLE_HEADER, "0,0", "1,0"]);

        let land = std::fs::read_to_string(&land_path).unwrap();
        let lines: Vec<&str> = land.lines().collect();
        assert_eq!(lines[0], LAND_TABLE_HEADER);
        assert!(lines[1].starts_with("0,1,"));
        assert!(lines[2].starts_with("1,1,"));
    }

    #[test]
    fn land_rows_carry_seven_unit_interval_attributes() {
        let grid = classified(Array2::from_elem((1, 3), [0u8, 255, 0]));
        let dir = tempfile::tempdir().unwrap();
        let land_path = dir.path().join("land.csv");
        let water_path = dir.path().join("water.csv");

        let mut sampler = AttributeSampler::new(5);
        write_terrain_tables(&grid, &mut sampler, &land_path, &water_path).unwrap();

        let land = std::fs::read_to_string(&land_path).unwrap();
        for line in land.lines().skip(1) {
            let fields: Vec<&str> = line.split(',').collect();
            assert_eq!(fields.len(), 2 + LAND_ATTRIBUTE_COUNT);
            for field in &fields[2..] {
                let value: f64 = field.parse().unwrap();
                assert!((0.0..=1.0).contains(&value));
            }
        }
    }

    #[test]
    fn same_seed_writes_identical_land_tables() {
        let grid = classified(Array2::from_elem((4, 4), [0u8, 255, 0]));
        let dir = tempfile::tempdir().unwrap();

        let mut first = String::new();
        for name in ["a.csv", "b.csv"] {
            let land_path = dir.path().join(name);
            let water_path = dir.path().join(format!("w_{}", name));
            let mut sampler = AttributeSampler::new(1234);
            write_terrain_tables(&grid, &mut sampler, &land_path, &water_path).unwrap();
            let contents = std::fs::read_to_string(&land_path).unwrap();
            if first.is_empty() {
                first = contents;
            } else {
                assert_eq!(first, contents);
            }
        }
    }
}
