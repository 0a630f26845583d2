use crate::constants::{CANVAS_ID, CANVAS_STYLE, CONTAINER_STYLE};
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))
}

/// Create the fixed-size render canvas inside `container`.
pub fn create_canvas(
    document: &web::Document,
    container: &web::Element,
    css_width: u32,
    css_height: u32,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    canvas.set_id(CANVAS_ID);
    canvas
        .set_attribute(
            "style",
            &format!("{CANVAS_STYLE} width: {css_width}px; height: {css_height}px;"),
        )
        .map_err(js_err)?;
    if container.get_attribute("style").is_none() {
        _ = container.set_attribute("style", CONTAINER_STYLE);
    }
    container.append_child(&canvas).map_err(js_err)?;
    sync_canvas_backing_size(&canvas);
    Ok(canvas)
}

/// Keep the canvas' pixel size at its CSS size times devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Event listener that unregisters itself when dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    callback: js_sys::Function,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        // ownership moves to JS; it is collected once the listener is removed
        let callback: js_sys::Function = closure.into_js_value().unchecked_into();
        if let Err(e) = target.add_event_listener_with_callback(kind, &callback) {
            log::error!("[dom] could not listen for {}: {:?}", kind, e);
        }
        Self {
            target: target.clone(),
            kind,
            callback,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, &self.callback);
    }
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) -> Option<EventListener> {
    let window = web::window()?;
    let canvas = canvas.clone();
    Some(EventListener::new(window.as_ref(), "resize", move |_| {
        sync_canvas_backing_size(&canvas);
    }))
}
