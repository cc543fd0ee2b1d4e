//! Shared types and enums used across TERRAMAP.
//! Includes the terrain `Category` and the `PreviewFormat` selector.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Pixel triple in RGB channel order.
pub type Rgb = [u8; 3];

/// Terrain category of a downscaled grid cell. Every cell holds exactly one.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Category {
    Water,
    Land,
    Other,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Category::Water => "Water",
            Category::Land => "Land",
            Category::Other => "Other",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum PreviewFormat {
    PNG,
    JPEG, // Lossy; PNG is the faithful three-color artifact
}

impl std::fmt::Display for PreviewFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreviewFormat::PNG => write!(f, "PNG"),
            PreviewFormat::JPEG => write!(f, "JPEG"),
        }
    }
}
