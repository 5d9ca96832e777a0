//! Random sampling for room placement
//!
//! The builder only ever asks for inclusive integer ranges, so that is the
//! single required operation of [`RoomRng`]. Production code uses a seeded
//! ChaCha RNG; tests can replay a fixed sequence with [`ScriptedRng`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::dungeon::Direction;

/// Rejected draws tolerated by [`RoomRng::random_direction`] before it
/// stops sampling.
const MAX_DIRECTION_DRAWS: usize = 64;

/// Uniform integer source used by the chain builder
pub trait RoomRng {
    /// Uniform integer in `min..=max`.
    ///
    /// Returns `min` when `max < min`.
    fn uniform_int(&mut self, min: i32, max: i32) -> i32;

    /// Uniform direction, resampled while it equals `exclude`.
    ///
    /// Only the given value is excluded, not its opposite.
    fn random_direction(&mut self, exclude: Option<Direction>) -> Direction {
        for _ in 0..MAX_DIRECTION_DRAWS {
            let direction = Direction::from_index(self.uniform_int(0, 3));
            if Some(direction) != exclude {
                return direction;
            }
        }
        // Only reachable with a scripted source stuck on the excluded value.
        exclude.map_or(Direction::Up, Direction::clockwise)
    }
}

impl<R: RoomRng + ?Sized> RoomRng for &mut R {
    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        (**self).uniform_int(min, max)
    }

    fn random_direction(&mut self, exclude: Option<Direction>) -> Direction {
        (**self).random_direction(exclude)
    }
}

/// Seeded generator for dungeon layouts
///
/// Wraps ChaCha8Rng so a seed fully determines the layout.
#[derive(Debug, Clone)]
pub struct DungeonRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl DungeonRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RoomRng for DungeonRng {
    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        if max < min {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}

/// Replays a fixed sequence of integers
///
/// Values are handed out in order and the sequence wraps around when it
/// runs out. Each value is clamped into the requested range, so any
/// script yields a valid (if uninteresting) layout. Every call consumes
/// one value, an empty range (`max < min`) included, so a script lines
/// up one-to-one with the sampling calls of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedRng {
    values: Vec<i32>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of values consumed so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RoomRng for ScriptedRng {
    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        if self.values.is_empty() {
            return min;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        if max < min { min } else { value.clamp(min, max) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_int_bounds() {
        let mut rng = DungeonRng::new(42);
        for _ in 0..1000 {
            let n = rng.uniform_int(3, 6);
            assert!((3..=6).contains(&n));
        }
    }

    #[test]
    fn test_uniform_int_covers_range() {
        let mut rng = DungeonRng::new(42);
        let mut seen = [false; 4];
        for _ in 0..1000 {
            seen[rng.uniform_int(2, 5) as usize - 2] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_uniform_int_degenerate_range() {
        let mut rng = DungeonRng::new(42);
        assert_eq!(rng.uniform_int(1, 0), 1);
        assert_eq!(rng.uniform_int(4, 4), 4);
    }

    #[test]
    fn test_reproducibility() {
        let mut rng1 = DungeonRng::new(42);
        let mut rng2 = DungeonRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.uniform_int(0, 100), rng2.uniform_int(0, 100));
        }
    }

    #[test]
    fn test_seed_is_recorded() {
        assert_eq!(DungeonRng::new(1234).seed(), 1234);
    }

    #[test]
    fn test_random_direction_never_excluded() {
        let mut rng = DungeonRng::new(9);
        for _ in 0..500 {
            assert_ne!(rng.random_direction(Some(Direction::Left)), Direction::Left);
        }
    }

    #[test]
    fn test_random_direction_rejection() {
        let mut rng = ScriptedRng::new([0, 0, 2]);
        assert_eq!(rng.random_direction(Some(Direction::Up)), Direction::Down);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_random_direction_allows_opposite() {
        let mut rng = ScriptedRng::new([2]);
        assert_eq!(rng.random_direction(Some(Direction::Up)), Direction::Down);
    }

    #[test]
    fn test_random_direction_unexcluded() {
        let mut rng = ScriptedRng::new([3]);
        assert_eq!(rng.random_direction(None), Direction::Left);
    }

    #[test]
    fn test_random_direction_stuck_script_terminates() {
        let mut rng = ScriptedRng::new([1]);
        assert_eq!(rng.random_direction(Some(Direction::Right)), Direction::Down);
        assert_eq!(rng.draws(), MAX_DIRECTION_DRAWS);
    }

    #[test]
    fn test_scripted_clamps_and_cycles() {
        let mut rng = ScriptedRng::new([10, -4]);
        assert_eq!(rng.uniform_int(3, 6), 6);
        assert_eq!(rng.uniform_int(3, 6), 3);
        assert_eq!(rng.uniform_int(0, 20), 10);
    }

    #[test]
    fn test_scripted_empty_range_consumes_value() {
        let mut rng = ScriptedRng::new([9, 4]);
        assert_eq!(rng.uniform_int(1, 0), 1);
        assert_eq!(rng.draws(), 1);
        assert_eq!(rng.uniform_int(0, 10), 4);
    }

    #[test]
    fn test_forwarding_through_mut_ref() {
        fn draw<R: RoomRng>(mut rng: R) -> i32 {
            rng.uniform_int(0, 9)
        }
        let mut rng = ScriptedRng::new([5, 6]);
        assert_eq!(draw(&mut rng), 5);
        assert_eq!(draw(&mut rng), 6);
    }
}
