//! Core processing building blocks: budget-driven resampling, HSV threshold
//! classification, preview rendering, and attribute sampling. These are
//! internal primitives consumed by the high-level `api` module.
pub mod attributes;
pub mod classify;
pub mod render;
pub mod resample;
