use crate::constants::{
    CANVAS_HEIGHT, CANVAS_WIDTH, RACKS_PER_TOWER, TEMP_MAX, TEMP_MIN, TEMP_TICK_MS,
    TOWER_POSITIONS,
};
use crate::error::RoomError;
use glam::Vec2;
use std::time::Duration;

/// Inclusive temperature bounds in degrees C.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemperatureRange {
    pub min: i32,
    pub max: i32,
}

impl TemperatureRange {
    #[inline]
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }

    #[inline]
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for TemperatureRange {
    fn default() -> Self {
        Self {
            min: TEMP_MIN,
            max: TEMP_MAX,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RoomConfig {
    /// Tower footprints as (x, z) on the floor.
    pub towers: Vec<Vec2>,
    pub racks_per_tower: usize,
    pub temperature: TemperatureRange,
    pub tick_interval: Duration,
    pub canvas_size: (u32, u32),
    /// Fixed seed for the temperature walk; `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            towers: TOWER_POSITIONS
                .iter()
                .map(|[x, z]| Vec2::new(*x, *z))
                .collect(),
            racks_per_tower: RACKS_PER_TOWER,
            temperature: TemperatureRange::default(),
            tick_interval: Duration::from_millis(TEMP_TICK_MS as u64),
            canvas_size: (CANVAS_WIDTH, CANVAS_HEIGHT),
            seed: None,
        }
    }
}

impl RoomConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), RoomError> {
        let TemperatureRange { min, max } = self.temperature;
        if min >= max {
            return Err(RoomError::EmptyTemperatureRange { min, max });
        }
        if self.tick_interval.is_zero() {
            return Err(RoomError::ZeroTickInterval);
        }
        if self.racks_per_tower == 0 {
            return Err(RoomError::NoRacks);
        }
        if self.towers.is_empty() {
            return Err(RoomError::NoTowers);
        }
        Ok(())
    }
}
