use crate::dom::js_err;
use anyhow::anyhow;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `setInterval` registration, cleared on drop.
pub struct Interval {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn start(period: Duration, callback: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let millis = i32::try_from(period.as_millis()).unwrap_or(i32::MAX);
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis,
            )
            .map_err(js_err)?;
        log::info!("[timer] interval {} every {} ms", handle, millis);
        Ok(Self {
            handle,
            _callback: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.handle);
        }
    }
}
