use crate::constants::WHEEL_DEADZONE;
use crate::dom::EventListener;
use crate::input::{self, DragMode};
use crate::overlay::Overlay;
use crate::state::RoomState;
use rack_core::{pointer_to_ndc, AliveFlag};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub state: Rc<RefCell<RoomState>>,
    pub overlay: Rc<Overlay>,
    pub alive: AliveFlag,
}

impl InputWiring {
    fn target(&self) -> &web::EventTarget {
        self.canvas.as_ref()
    }
}

/// Attach every canvas handler. Dropping the returned listeners detaches them.
pub fn wire_input_handlers(w: &InputWiring) -> Vec<EventListener> {
    vec![
        wire_pointermove(w),
        wire_pointerdown(w),
        wire_pointerup(w, "pointerup"),
        wire_pointerup(w, "pointercancel"),
        wire_pointerleave(w),
        wire_wheel(w),
        wire_contextmenu(w),
    ]
}

fn wire_pointermove(w: &InputWiring) -> EventListener {
    let w2 = w.clone();
    EventListener::new(w.target(), "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if !w2.alive.is_alive() {
            return;
        }
        let (pos, size) = input::pointer_css(ev, &w2.canvas);
        let mut st = w2.state.borrow_mut();

        if let Some((mode, delta)) = st.drag.advance(ev.pointer_id(), pos) {
            match mode {
                DragMode::Rotate => st.camera.rotate(delta.x, delta.y, size.y),
                DragMode::Pan => st.camera.pan(delta.x, delta.y, size.y),
            }
        }

        let ndc = pointer_to_ndc(pos.x, pos.y, size.x, size.y);
        if st.hover_at(ndc) {
            log::debug!("[pointer] hover {:?}", st.hover.rack());
            w2.overlay.set_text(&st.overlay_text());
        }
    })
}

fn wire_pointerdown(w: &InputWiring) -> EventListener {
    let w2 = w.clone();
    EventListener::new(w.target(), "pointerdown", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let Some(mode) = DragMode::from_button(ev.button()) else {
            return;
        };
        let (pos, _) = input::pointer_css(ev, &w2.canvas);
        w2.state
            .borrow_mut()
            .drag
            .begin(mode, ev.pointer_id(), pos);
        _ = w2.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    })
}

fn wire_pointerup(w: &InputWiring, kind: &'static str) -> EventListener {
    let w2 = w.clone();
    EventListener::new(w.target(), kind, move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if w2.state.borrow_mut().drag.end(ev.pointer_id()) {
            _ = w2.canvas.release_pointer_capture(ev.pointer_id());
        }
    })
}

// Leaving the canvas leaves no rack under the pointer.
fn wire_pointerleave(w: &InputWiring) -> EventListener {
    let w2 = w.clone();
    EventListener::new(w.target(), "pointerleave", move |_| {
        if !w2.alive.is_alive() {
            return;
        }
        let mut st = w2.state.borrow_mut();
        if st.drag.active() {
            return;
        }
        if st.hover.clear() {
            w2.overlay.set_text(&st.overlay_text());
        }
    })
}

fn wire_wheel(w: &InputWiring) -> EventListener {
    let w2 = w.clone();
    EventListener::new(w.target(), "wheel", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::WheelEvent>() else {
            return;
        };
        let dy = ev.delta_y();
        if dy.abs() > WHEEL_DEADZONE {
            w2.state.borrow_mut().camera.zoom(dy as f32);
        }
        ev.prevent_default();
    })
}

fn wire_contextmenu(w: &InputWiring) -> EventListener {
    EventListener::new(w.target(), "contextmenu", |ev| ev.prevent_default())
}
