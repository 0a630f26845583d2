use crate::geometry::{ray_aabb, Ray};
use crate::room::{RackId, ServerRoom};

pub const HOVER_PROMPT: &str = "Hover over a rack to see its temperature";

/// Nearest rack whose body or components the ray hits, if any.
///
/// Components sit inside the body, so the body usually wins; they are still
/// tested so a rack is found whichever of its meshes is hit first.
pub fn pick_rack(room: &ServerRoom, ray: &Ray) -> Option<RackId> {
    let mut best = None::<(RackId, f32)>;
    for rack in room.racks() {
        let hits = std::iter::once(&rack.body)
            .chain(rack.components.iter())
            .filter_map(|aabb| ray_aabb(ray, aabb));
        for t in hits {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((rack.id, t)),
            }
        }
    }
    best.map(|(id, _)| id)
}

/// Identifier of the rack under the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    rack: Option<RackId>,
}

impl HoverState {
    #[inline]
    pub fn rack(&self) -> Option<RackId> {
        self.rack
    }

    /// Store a new pick result. Returns true if the hovered rack changed.
    pub fn set(&mut self, rack: Option<RackId>) -> bool {
        let changed = self.rack != rack;
        self.rack = rack;
        changed
    }

    pub fn clear(&mut self) -> bool {
        self.set(None)
    }

    /// Overlay line for the current hover state.
    pub fn overlay_text(&self, room: &ServerRoom) -> String {
        match self.rack.and_then(|id| room.rack(id)) {
            Some(rack) => format!("Rack {} Temperature: {}°C", rack.label(), rack.temperature),
            None => HOVER_PROMPT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoomConfig;
    use glam::Vec3;

    fn room() -> ServerRoom {
        ServerRoom::new(&RoomConfig::default().with_seed(1)).unwrap()
    }

    #[test]
    fn ray_through_rack_center_picks_it() {
        let room = room();
        for rack in room.racks() {
            let c = rack.body.center();
            let ray = Ray::new(c + Vec3::Z * 10.0, -Vec3::Z);
            assert_eq!(pick_rack(&room, &ray), Some(rack.id));
        }
    }

    #[test]
    fn nearest_rack_wins_along_the_ray() {
        let room = room();
        // looking down the x axis through the bottom row of every tower
        let ray = Ray::new(Vec3::new(-10.0, -1.5, 0.0), Vec3::X);
        assert_eq!(pick_rack(&room, &ray), Some(0));
        let ray = Ray::new(Vec3::new(10.0, -1.5, 0.0), -Vec3::X);
        assert_eq!(pick_rack(&room, &ray), Some(8));
    }

    #[test]
    fn gaps_between_racks_pick_nothing() {
        let room = room();
        // racks span y in [c - 0.4, c + 0.4]; the seam at y = -1.0 is empty
        let ray = Ray::new(Vec3::new(0.0, -1.0, 10.0), -Vec3::Z);
        assert_eq!(pick_rack(&room, &ray), None);
        let sky = Ray::new(Vec3::new(0.0, 10.0, 10.0), Vec3::Y);
        assert_eq!(pick_rack(&room, &sky), None);
    }

    #[test]
    fn overlay_text_formats() {
        let room = room();
        let mut hover = HoverState::default();
        assert_eq!(hover.overlay_text(&room), HOVER_PROMPT);
        assert!(hover.set(Some(4)));
        assert!(!hover.set(Some(4)));
        let t = room.temperature(4).unwrap();
        assert_eq!(hover.overlay_text(&room), format!("Rack 5 Temperature: {t}°C"));
        assert!(hover.clear());
        assert_eq!(hover.rack(), None);
    }
}
