//! Seeded random instances shaped like the drawing canvas: start near the
//! bottom-right corner, end near the top-right, stops scattered in between.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};
use tspp_core::{InputError, Point, PointSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub start: Point,
    pub end: Point,
    /// Inclusive coordinate range for intermediate points, on both axes.
    pub min_coord: i64,
    pub max_coord: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start: Point::new(550, 550),
            end: Point::new(550, 50),
            min_coord: 100,
            max_coord: 500,
        }
    }
}

pub struct InstanceGenerator {
    config: GeneratorConfig,
    rng: Xoshiro256PlusPlus,
}

impl InstanceGenerator {
    pub fn new(config: GeneratorConfig, seed: u64) -> Self {
        Self { config, rng: Xoshiro256PlusPlus::seed_from_u64(seed) }
    }

    /// A set of `num_points` points in total, start and end included.
    pub fn generate(&mut self, num_points: usize) -> Result<PointSet, InputError> {
        if num_points < 2 {
            return Err(InputError::TooFewPoints(num_points));
        }
        self.generate_intermediates(num_points - 2)
    }

    /// A set with exactly `n` intermediate points.
    pub fn generate_intermediates(&mut self, n: usize) -> Result<PointSet, InputError> {
        let (lo, hi) = (self.config.min_coord, self.config.max_coord.max(self.config.min_coord));
        let intermediates = (0..n)
            .map(|_| Point::new(self.rng.gen_range(lo..=hi), self.rng.gen_range(lo..=hi)))
            .collect();
        PointSet::new(self.config.start, self.config.end, intermediates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_instances() {
        let mut a = InstanceGenerator::new(GeneratorConfig::default(), 11);
        let mut b = InstanceGenerator::new(GeneratorConfig::default(), 11);
        for n in [2, 5, 9] {
            assert_eq!(a.generate(n).unwrap(), b.generate(n).unwrap());
        }
    }

    #[test]
    fn respects_box_and_endpoints() {
        let mut generator = InstanceGenerator::new(GeneratorConfig::default(), 3);
        let set = generator.generate(12).unwrap();
        assert_eq!(set.len(), 10);
        assert_eq!(*set.start(), Point::new(550, 550));
        assert_eq!(*set.end(), Point::new(550, 50));
        for p in set.intermediates() {
            assert!((100..=500).contains(&p.x) && (100..=500).contains(&p.y));
        }
    }

    #[test]
    fn rejects_fewer_than_two_points() {
        let mut generator = InstanceGenerator::new(GeneratorConfig::default(), 0);
        assert_eq!(generator.generate(1), Err(InputError::TooFewPoints(1)));
        assert!(generator.generate(2).unwrap().is_empty());
    }
}
