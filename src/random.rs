use rand::Rng;
use std::ops::RangeInclusive;

/// Method requirement: adopters decide how the number is produced.
pub trait GeneratesRandomNumbers {
    fn random(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OneThroughTen;

impl OneThroughTen {
    pub const RANGE: RangeInclusive<i64> = 1..=10;

    pub fn random_with<R: Rng>(&self, rng: &mut R) -> i64 {
        rng.gen_range(Self::RANGE)
    }
}

impl GeneratesRandomNumbers for OneThroughTen {
    fn random(&self) -> i64 {
        self.random_with(&mut rand::thread_rng())
    }
}
