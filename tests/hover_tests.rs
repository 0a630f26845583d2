use glam::{Vec2, Vec3};
use rack_core::{pick_rack, HoverState, OrbitCamera, RoomConfig, ServerRoom, HOVER_PROMPT};

fn room() -> ServerRoom {
    ServerRoom::new(&RoomConfig::default().with_seed(9)).unwrap()
}

fn project(cam: &OrbitCamera, p: Vec3) -> Vec2 {
    let clip = cam.view_proj() * p.extend(1.0);
    Vec2::new(clip.x / clip.w, clip.y / clip.w)
}

#[test]
fn pointer_over_each_rack_hovers_exactly_that_rack() {
    let room = room();
    let cam = OrbitCamera::for_canvas(800, 600);
    for rack in room.racks() {
        // the front face centre is never hidden behind another rack
        let front = rack.body.center() + Vec3::Z * (rack.body.size().z * 0.5);
        let ndc = project(&cam, front);
        let hit = pick_rack(&room, &cam.ray_from_ndc(ndc));
        assert_eq!(hit, Some(rack.id), "rack {}", rack.id);
    }
}

#[test]
fn pointer_over_empty_space_hovers_nothing() {
    let room = room();
    let cam = OrbitCamera::for_canvas(800, 600);
    for ndc in [
        Vec2::new(-0.95, 0.95),
        Vec2::new(0.95, 0.95),
        Vec2::new(0.0, 0.9),
        Vec2::new(-0.95, -0.95),
    ] {
        assert_eq!(pick_rack(&room, &cam.ray_from_ndc(ndc)), None, "{ndc:?}");
    }
}

#[test]
fn any_hit_is_a_valid_rack_id() {
    let room = room();
    let cam = OrbitCamera::for_canvas(800, 600);
    let mut hits = 0;
    for ix in 0..=40 {
        for iy in 0..=30 {
            let ndc = Vec2::new(ix as f32 / 20.0 - 1.0, iy as f32 / 15.0 - 1.0);
            if let Some(id) = pick_rack(&room, &cam.ray_from_ndc(ndc)) {
                assert!(room.rack(id).is_some());
                hits += 1;
            }
        }
    }
    assert!(hits > 0);
}

#[test]
fn overlay_follows_hover_and_temperature() {
    let mut room = room();
    let mut hover = HoverState::default();
    assert_eq!(hover.overlay_text(&room), HOVER_PROMPT);
    hover.set(Some(0));
    room.tick_temperatures();
    let t = room.temperature(0).unwrap();
    assert_eq!(hover.overlay_text(&room), format!("Rack 1 Temperature: {t}°C"));
    hover.set(Some(11));
    assert!(hover.overlay_text(&room).starts_with("Rack 12 "));
}
