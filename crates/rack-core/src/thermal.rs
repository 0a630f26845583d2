use crate::config::TemperatureRange;
use rand::prelude::*;

/// Random walk driving rack temperatures.
///
/// Initial readings are drawn uniformly from `[min, max)`; each step then moves
/// a reading by one degree up or down with equal probability and clamps it back
/// into `[min, max]`.
pub struct TemperatureWalk {
    range: TemperatureRange,
    rng: StdRng,
}

impl TemperatureWalk {
    pub fn new(range: TemperatureRange, seed: u64) -> Self {
        Self {
            range,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy(range: TemperatureRange) -> Self {
        Self {
            range,
            rng: StdRng::from_entropy(),
        }
    }

    #[inline]
    pub fn range(&self) -> TemperatureRange {
        self.range
    }

    pub fn initial(&mut self) -> i32 {
        self.rng.gen_range(self.range.min..self.range.max)
    }

    pub fn step(&mut self, current: i32) -> i32 {
        let change = if self.rng.gen_bool(0.5) { 1 } else { -1 };
        self.range.clamp(current + change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_values_exclude_the_upper_bound() {
        let mut walk = TemperatureWalk::new(TemperatureRange::default(), 3);
        for _ in 0..2000 {
            let t = walk.initial();
            assert!((20..40).contains(&t), "initial {t} out of [20,40)");
        }
    }

    #[test]
    fn step_moves_by_exactly_one_inside_the_range() {
        let mut walk = TemperatureWalk::new(TemperatureRange::default(), 11);
        for _ in 0..500 {
            let next = walk.step(30);
            assert_eq!((next - 30).abs(), 1);
        }
    }

    #[test]
    fn step_clamps_at_the_edges() {
        let mut walk = TemperatureWalk::new(TemperatureRange::default(), 5);
        for _ in 0..200 {
            assert!(matches!(walk.step(40), 39 | 40));
            assert!(matches!(walk.step(20), 20 | 21));
        }
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let mut a = TemperatureWalk::new(TemperatureRange::default(), 99);
        let mut b = TemperatureWalk::new(TemperatureRange::default(), 99);
        let xs: Vec<i32> = (0..32).map(|_| a.initial()).collect();
        let ys: Vec<i32> = (0..32).map(|_| b.initial()).collect();
        assert_eq!(xs, ys);
    }
}
