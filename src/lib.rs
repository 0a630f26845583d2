#![cfg(target_arch = "wasm32")]
use rack_core::{Lifecycle, RoomConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod state;
mod timer;

use overlay::Overlay;
use state::RoomState;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("rack-room loaded");
    Ok(())
}

/// Build the server room inside the element with id `container_id`.
///
/// A fixed `seed` makes the temperature walk reproducible.
#[wasm_bindgen]
pub async fn mount(container_id: String, seed: Option<u64>) -> Result<ServerRoomView, JsValue> {
    let mut config = RoomConfig::default();
    config.seed = seed;
    init(&container_id, config).await.map_err(|e| {
        log::error!("mount error: {:?}", e);
        JsValue::from_str(&format!("{e:#}"))
    })
}

/// Handle to a mounted room. Dropping or unmounting it tears the view down.
#[wasm_bindgen]
pub struct ServerRoomView {
    lifecycle: Lifecycle,
    state: Rc<RefCell<RoomState>>,
}

#[wasm_bindgen]
impl ServerRoomView {
    /// Release the render surface, stop the timer and remove the view's DOM.
    pub fn unmount(&mut self) {
        if self.lifecycle.unmount() {
            log::info!("[mount] unmounted");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.lifecycle.is_mounted()
    }

    #[wasm_bindgen(getter = hoveredRack)]
    pub fn hovered_rack(&self) -> Option<u32> {
        self.state.borrow().hover.rack().map(|id| id as u32)
    }

    pub fn temperatures(&self) -> Vec<i32> {
        self.state.borrow().room.temperatures()
    }
}

async fn init(container_id: &str, config: RoomConfig) -> anyhow::Result<ServerRoomView> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = dom::element_by_id(&document, container_id)?;

    let state = Rc::new(RefCell::new(RoomState::new(&config)?));
    let (css_w, css_h) = config.canvas_size;
    let canvas = dom::create_canvas(&document, &container, css_w, css_h)?;
    let overlay = match Overlay::create(&document, &container) {
        Ok(o) => Rc::new(o),
        Err(e) => {
            canvas.remove();
            return Err(e);
        }
    };
    overlay.set_text(&state.borrow().overlay_text());

    let mut lifecycle = Lifecycle::new();
    let alive = lifecycle.flag();
    {
        let canvas = canvas.clone();
        let overlay = overlay.clone();
        lifecycle.on_teardown("dom", move || {
            overlay.remove();
            canvas.remove();
        });
    }

    // Render surface and animation loop. A failed WebGPU init leaves the
    // canvas blank; hover and the timer keep working.
    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        state.clone(),
        gpu,
        canvas.clone(),
        alive.clone(),
    )));
    let animation = frame::start_loop(frame_ctx.clone());
    lifecycle.on_teardown("render surface", move || {
        drop(animation);
        frame_ctx.borrow_mut().release_gpu();
    });

    let interval = {
        let state = state.clone();
        let overlay = overlay.clone();
        let alive = alive.clone();
        timer::Interval::start(config.tick_interval, move || {
            if !alive.is_alive() {
                return;
            }
            let mut st = state.borrow_mut();
            st.room.tick_temperatures();
            if st.hover.rack().is_some() {
                overlay.set_text(&st.overlay_text());
            }
        })?
    };
    lifecycle.on_teardown("temperature timer", move || drop(interval));

    let wiring = events::InputWiring {
        canvas: canvas.clone(),
        state: state.clone(),
        overlay,
        alive,
    };
    let mut listeners = events::wire_input_handlers(&wiring);
    listeners.extend(dom::wire_canvas_resize(&canvas));
    lifecycle.on_teardown("input listeners", move || drop(listeners));

    log::info!(
        "[mount] #{} ready: {} racks, canvas {}x{}",
        container_id,
        state.borrow().room.racks().len(),
        canvas.width(),
        canvas.height()
    );
    Ok(ServerRoomView { lifecycle, state })
}
