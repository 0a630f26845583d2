use crate::input::DragState;
use glam::Vec2;
use rack_core::scene::{build_draw_list, DrawItem};
use rack_core::{pick_rack, HoverState, OrbitCamera, RoomConfig, RoomError, ServerRoom};

/// Everything the callbacks of one mounted view share.
pub struct RoomState {
    pub room: ServerRoom,
    pub hover: HoverState,
    pub camera: OrbitCamera,
    pub drag: DragState,
    pub draw_list: Vec<DrawItem>,
}

impl RoomState {
    pub fn new(config: &RoomConfig) -> Result<Self, RoomError> {
        let room = ServerRoom::new(config)?;
        let draw_list = build_draw_list(&room);
        let (w, h) = config.canvas_size;
        Ok(Self {
            room,
            hover: HoverState::default(),
            camera: OrbitCamera::for_canvas(w, h),
            drag: DragState::default(),
            draw_list,
        })
    }

    /// Re-pick under the pointer. Returns true if the hovered rack changed.
    pub fn hover_at(&mut self, ndc: Vec2) -> bool {
        let ray = self.camera.ray_from_ndc(ndc);
        let hit = pick_rack(&self.room, &ray);
        self.hover.set(hit)
    }

    pub fn overlay_text(&self) -> String {
        self.hover.overlay_text(&self.room)
    }
}
