//! Core layer: pipeline parameters and the processing primitives.
pub mod params;
pub mod processing;
