//! Towers, racks and their temperatures.
//!
//! Rack identifiers come from a plain counter while the room is built, in
//! tower-then-slot order, and each rack stores its own temperature. Id and
//! reading therefore cannot drift apart however the timer interleaves with
//! construction.

use crate::config::{RoomConfig, TemperatureRange};
use crate::constants::{
    BORDER_COLORS_HEX, COMPONENTS_PER_RACK, COMPONENT_SIZE, COMPONENT_STEP_X, COMPONENT_X0,
    RACK_BASE_Y, RACK_SIZE, RACK_SPACING_Y, TOWER_SIZE,
};
use crate::error::RoomError;
use crate::geometry::Aabb;
use crate::thermal::TemperatureWalk;
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

pub type RackId = usize;

#[derive(Clone, Debug)]
pub struct Rack {
    pub id: RackId,
    pub tower: usize,
    pub slot: usize,
    pub temperature: i32,
    pub border_hex: u32,
    /// World-space body volume; also the picking volume.
    pub body: Aabb,
    pub components: SmallVec<[Aabb; COMPONENTS_PER_RACK]>,
}

impl Rack {
    /// One-based number shown to the user.
    #[inline]
    pub fn label(&self) -> usize {
        self.id + 1
    }
}

#[derive(Clone, Debug)]
pub struct Tower {
    pub position: Vec3,
    pub body: Aabb,
    pub racks: SmallVec<[RackId; 4]>,
}

pub struct ServerRoom {
    towers: Vec<Tower>,
    racks: Vec<Rack>,
    walk: TemperatureWalk,
    ticks: u64,
}

impl ServerRoom {
    pub fn new(config: &RoomConfig) -> Result<Self, RoomError> {
        config.validate()?;
        let walk = match config.seed {
            Some(seed) => TemperatureWalk::new(config.temperature, seed),
            None => TemperatureWalk::from_entropy(config.temperature),
        };
        Ok(Self::build(&config.towers, config.racks_per_tower, walk))
    }

    fn build(footprints: &[Vec2], racks_per_tower: usize, mut walk: TemperatureWalk) -> Self {
        let mut towers = Vec::with_capacity(footprints.len());
        let mut racks = Vec::with_capacity(footprints.len() * racks_per_tower);
        let mut next_id: RackId = 0;

        for (tower_index, footprint) in footprints.iter().enumerate() {
            let position = Vec3::new(footprint.x, 0.0, footprint.y);
            let mut tower = Tower {
                position,
                body: Aabb::from_center_size(position, Vec3::from(TOWER_SIZE)),
                racks: SmallVec::new(),
            };
            for slot in 0..racks_per_tower {
                let center = position + Vec3::Y * (RACK_BASE_Y + slot as f32 * RACK_SPACING_Y);
                let components = (0..COMPONENTS_PER_RACK)
                    .map(|j| {
                        let offset = Vec3::X * (COMPONENT_X0 + j as f32 * COMPONENT_STEP_X);
                        Aabb::from_center_size(center + offset, Vec3::from(COMPONENT_SIZE))
                    })
                    .collect();
                let id = next_id;
                next_id += 1;
                racks.push(Rack {
                    id,
                    tower: tower_index,
                    slot,
                    temperature: walk.initial(),
                    border_hex: BORDER_COLORS_HEX[slot % BORDER_COLORS_HEX.len()],
                    body: Aabb::from_center_size(center, Vec3::from(RACK_SIZE)),
                    components,
                });
                tower.racks.push(id);
            }
            towers.push(tower);
        }

        log::info!(
            "[room] built {} towers with {} racks",
            towers.len(),
            racks.len()
        );
        Self {
            towers,
            racks,
            walk,
            ticks: 0,
        }
    }

    #[inline]
    pub fn towers(&self) -> &[Tower] {
        &self.towers
    }

    #[inline]
    pub fn racks(&self) -> &[Rack] {
        &self.racks
    }

    #[inline]
    pub fn rack(&self, id: RackId) -> Option<&Rack> {
        self.racks.get(id)
    }

    #[inline]
    pub fn temperature(&self, id: RackId) -> Option<i32> {
        self.rack(id).map(|r| r.temperature)
    }

    pub fn temperatures(&self) -> Vec<i32> {
        self.racks.iter().map(|r| r.temperature).collect()
    }

    #[inline]
    pub fn temperature_range(&self) -> TemperatureRange {
        self.walk.range()
    }

    /// Number of timer ticks applied so far.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// One timer tick: every rack takes a +/-1 step, clamped to the range.
    pub fn tick_temperatures(&mut self) {
        for rack in &mut self.racks {
            rack.temperature = self.walk.step(rack.temperature);
        }
        self.ticks += 1;
        log::debug!("[room] tick {} temps={:?}", self.ticks, self.temperatures());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> ServerRoom {
        ServerRoom::new(&RoomConfig::default().with_seed(7)).unwrap()
    }

    #[test]
    fn ids_are_sequential_and_unique() {
        let room = room();
        let ids: Vec<RackId> = room.racks().iter().map(|r| r.id).collect();
        assert_eq!(ids, (0..12).collect::<Vec<_>>());
        let owned: Vec<RackId> = room
            .towers()
            .iter()
            .flat_map(|t| t.racks.iter().copied())
            .collect();
        assert_eq!(owned, ids);
    }

    #[test]
    fn racks_stack_inside_their_tower() {
        let room = room();
        for rack in room.racks() {
            let tower = &room.towers()[rack.tower];
            let expected_y = -1.5 + rack.slot as f32;
            assert!((rack.body.center().y - expected_y).abs() < 1e-6);
            assert!((rack.body.center().x - tower.position.x).abs() < 1e-6);
            assert!(tower.body.contains(rack.body.min) && tower.body.contains(rack.body.max));
            for c in &rack.components {
                assert!(rack.body.contains(c.min) && rack.body.contains(c.max));
            }
        }
    }

    #[test]
    fn border_colors_follow_slot() {
        let room = room();
        for rack in room.racks() {
            assert_eq!(rack.border_hex, BORDER_COLORS_HEX[rack.slot]);
        }
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = RoomConfig {
            towers: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(ServerRoom::new(&cfg), Err(RoomError::NoTowers)));
    }
}
