use crate::constants::{BUTTON_MIDDLE, BUTTON_PRIMARY, BUTTON_SECONDARY};
use glam::Vec2;
use web_sys as web;

/// What a held pointer button does to the camera.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Rotate,
    Pan,
}

impl DragMode {
    /// Primary button orbits, middle and secondary pan.
    pub fn from_button(button: i16) -> Option<Self> {
        match button {
            BUTTON_PRIMARY => Some(Self::Rotate),
            BUTTON_MIDDLE | BUTTON_SECONDARY => Some(Self::Pan),
            _ => None,
        }
    }
}

#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub mode: Option<DragMode>,
    pub pointer_id: i32,
    pub last: Vec2,
}

impl DragState {
    pub fn begin(&mut self, mode: DragMode, pointer_id: i32, at: Vec2) {
        self.mode = Some(mode);
        self.pointer_id = pointer_id;
        self.last = at;
    }

    /// Movement since the previous sample for the dragging pointer.
    pub fn advance(&mut self, pointer_id: i32, at: Vec2) -> Option<(DragMode, Vec2)> {
        let mode = self.mode?;
        if pointer_id != self.pointer_id {
            return None;
        }
        let delta = at - self.last;
        self.last = at;
        Some((mode, delta))
    }

    /// Returns true if this pointer was dragging.
    pub fn end(&mut self, pointer_id: i32) -> bool {
        if self.mode.is_some() && pointer_id == self.pointer_id {
            self.mode = None;
            return true;
        }
        false
    }

    #[inline]
    pub fn active(&self) -> bool {
        self.mode.is_some()
    }
}

// ---------------- Pointer helpers ----------------
/// Pointer position in CSS pixels relative to the canvas' top-left corner,
/// with the canvas' CSS size.
#[inline]
pub fn pointer_css(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> (Vec2, Vec2) {
    let rect = canvas.get_bounding_client_rect();
    let pos = Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    );
    (pos, Vec2::new(rect.width() as f32, rect.height() as f32))
}
