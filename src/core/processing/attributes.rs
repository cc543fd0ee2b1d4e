//! Seeded sampling of synthetic land attributes.
//!
//! Land records carry placeholder soil/terrain properties drawn uniformly
//! from [0, 1). The generator takes an explicit seed so a run can be
//! reproduced exactly.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const LAND_ATTRIBUTE_COUNT: usize = 7;

pub struct AttributeSampler {
    rng: StdRng,
}

impl AttributeSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seven independent uniform samples, one per land attribute column.
    pub fn sample_land_attributes(&mut self) -> [f64; LAND_ATTRIBUTE_COUNT] {
        std::array::from_fn(|_| self.rng.gen_range(0.0..1.0))
    }
}
