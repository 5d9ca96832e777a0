//! Generation parameters
//!
//! The defaults reproduce the fixed constants of the classic generator:
//! origin (0,0), 8 rooms, interior width 3..=6, height 2..=5 and 25
//! retries per anchor.

use serde::{Deserialize, Serialize};

use crate::dungeon::Point;
use crate::error::ConfigError;

/// Smallest interior width that still leaves a door span on a horizontal wall.
pub const MIN_ROOM_WIDTH: u32 = 3;
/// Smallest interior height supported by the door sampler.
pub const MIN_ROOM_HEIGHT: u32 = 2;
/// Largest interior size accepted on either axis.
pub const MAX_ROOM_SIZE: u32 = 256;

/// Inclusive range of interior sizes along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionRange {
    pub min: u32,
    pub max: u32,
}

impl DimensionRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    fn validate(&self, axis: &'static str, floor: u32) -> Result<(), ConfigError> {
        if self.max > MAX_ROOM_SIZE {
            return Err(ConfigError::TooLarge {
                axis,
                max: self.max,
                ceiling: MAX_ROOM_SIZE,
            });
        }
        if self.min > self.max {
            return Err(ConfigError::EmptyRange {
                axis,
                min: self.min,
                max: self.max,
            });
        }
        if self.min < floor {
            return Err(ConfigError::TooSmall {
                axis,
                min: self.min,
                floor,
            });
        }
        Ok(())
    }
}

/// Parameters for one run of the chain builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Anchor of the first room
    pub origin: Point,
    /// Number of rooms to aim for; the chain may end up shorter
    pub target_rooms: usize,
    /// Interior width range
    pub width: DimensionRange,
    /// Interior height range
    pub height: DimensionRange,
    /// Extra placement attempts allowed at a single anchor
    pub retry_budget: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            origin: Point::ORIGIN,
            target_rooms: 8,
            width: DimensionRange::new(3, 6),
            height: DimensionRange::new(2, 5),
            retry_budget: 25,
        }
    }
}

impl GenerationConfig {
    /// Check the parameters before any room is sampled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_rooms == 0 {
            return Err(ConfigError::NoRooms);
        }
        self.width.validate("width", MIN_ROOM_WIDTH)?;
        self.height.validate("height", MIN_ROOM_HEIGHT)?;

        let reach = self.reach();
        let fits = |c: i32| {
            let c = i64::from(c);
            c.saturating_sub(reach) >= i64::from(i32::MIN)
                && c.saturating_add(reach) <= i64::from(i32::MAX)
        };
        if !fits(self.origin.x) || !fits(self.origin.y) {
            return Err(ConfigError::OriginOutOfRange {
                x: self.origin.x,
                y: self.origin.y,
                reach,
            });
        }
        Ok(())
    }

    /// Furthest any tile or anchor can land from the origin on one axis.
    ///
    /// Each room shifts the anchor by at most `size + 1` and its border
    /// reaches `size + 1` past its anchor.
    pub fn reach(&self) -> i64 {
        let size = i64::from(self.width.max.max(self.height.max)) + 2;
        i64::try_from(self.target_rooms)
            .unwrap_or(i64::MAX)
            .saturating_add(1)
            .saturating_mul(size)
    }

    /// Placement attempts allowed at one anchor, the first try included.
    pub fn attempts_per_anchor(&self) -> usize {
        self.retry_budget as usize + 1
    }

    /// Upper bound on builder iterations for the whole chain.
    pub fn max_steps(&self) -> usize {
        self.target_rooms.saturating_mul(self.attempts_per_anchor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GenerationConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.max_steps(), 8 * 26);
    }

    #[test]
    fn test_zero_rooms_rejected() {
        let config = GenerationConfig {
            target_rooms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoRooms));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let config = GenerationConfig {
            height: DimensionRange::new(5, 2),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyRange { axis: "height", .. })
        ));
    }

    #[test]
    fn test_narrow_width_rejected() {
        let config = GenerationConfig {
            width: DimensionRange::new(2, 6),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooSmall { axis: "width", floor: 3, .. })
        ));
    }

    #[test]
    fn test_oversized_range_rejected() {
        let config = GenerationConfig {
            width: DimensionRange::new(3, u32::MAX),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooLarge {
                axis: "width",
                max: u32::MAX,
                ceiling: MAX_ROOM_SIZE
            })
        );
        let config = GenerationConfig {
            height: DimensionRange::new(2, MAX_ROOM_SIZE),
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_origin_near_integer_edge_rejected() {
        let config = GenerationConfig {
            origin: Point::new(i32::MAX - 2, i32::MAX - 2),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OriginOutOfRange { reach: 72, .. })
        ));
        let config = GenerationConfig {
            origin: Point::new(0, i32::MIN),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_origin_at_reach_limit_accepted() {
        let config = GenerationConfig {
            origin: Point::new(i32::MAX - 72, i32::MIN + 72),
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_huge_target_rejected_by_reach() {
        let config = GenerationConfig {
            target_rooms: usize::MAX,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::OriginOutOfRange { .. })));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GenerationConfig =
            serde_json::from_str(r#"{ "target_rooms": 3, "retry_budget": 4 }"#).unwrap();
        assert_eq!(config.target_rooms, 3);
        assert_eq!(config.retry_budget, 4);
        assert_eq!(config.width, DimensionRange::new(3, 6));
        assert_eq!(config.origin, Point::ORIGIN);
    }
}
