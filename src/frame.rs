use crate::render;
use crate::state::RoomState;
use instant::Instant;
use rack_core::scene::plan_frame;
use rack_core::AliveFlag;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: Rc<RefCell<RoomState>>,
    pub gpu: Option<render::GpuState>,
    pub canvas: web::HtmlCanvasElement,
    pub alive: AliveFlag,
    pub last_instant: Instant,
    pub frames: u64,
}

impl FrameContext {
    pub fn new(
        state: Rc<RefCell<RoomState>>,
        gpu: Option<render::GpuState>,
        canvas: web::HtmlCanvasElement,
        alive: AliveFlag,
    ) -> Self {
        Self {
            state,
            gpu,
            canvas,
            alive,
            last_instant: Instant::now(),
            frames: 0,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        self.frames += 1;
        if dt.as_secs_f32() > 0.25 {
            log::debug!("[frame] long frame {} ms", dt.as_millis());
        }

        let plan = {
            let mut st = self.state.borrow_mut();
            st.camera.update();
            plan_frame(&st.draw_list, st.camera.eye())
        };

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let st = self.state.borrow();
            match g.render(&st.camera, &plan) {
                Ok(()) => {}
                // lost/outdated surfaces are reconfigured and retried next frame
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }

    /// Drop the GPU state, releasing the surface and every GPU resource.
    pub fn release_gpu(&mut self) {
        if self.gpu.take().is_some() {
            log::info!("[frame] render surface released after {} frames", self.frames);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame loop. Dropping it cancels the pending frame and frees
/// the callback.
pub struct AnimationLoop {
    tick: TickClosure,
    handle: Rc<Cell<Option<i32>>>,
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let (Some(w), Some(h)) = (web::window(), self.handle.take()) {
            _ = w.cancel_animation_frame(h);
        }
        // breaks the closure -> tick cycle
        self.tick.borrow_mut().take();
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> AnimationLoop {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let handle = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let handle_clone = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        handle_clone.set(None);
        if !frame_ctx.borrow().alive.is_alive() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        handle_clone.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));
    handle.set(request_frame(&tick));
    AnimationLoop { tick, handle }
}

fn request_frame(tick: &TickClosure) -> Option<i32> {
    let w = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}
