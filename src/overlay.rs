use crate::constants::{OVERLAY_ID, OVERLAY_STYLE};
use crate::dom::js_err;
use web_sys as web;

/// Text box in the top-left corner of the view.
pub struct Overlay {
    root: web::Element,
    line: web::Element,
}

impl Overlay {
    pub fn create(document: &web::Document, container: &web::Element) -> anyhow::Result<Self> {
        let root = document.create_element("div").map_err(js_err)?;
        root.set_id(OVERLAY_ID);
        root.set_attribute("style", OVERLAY_STYLE).map_err(js_err)?;
        let line = document.create_element("p").map_err(js_err)?;
        _ = line.set_attribute("style", "margin: 0;");
        root.append_child(&line).map_err(js_err)?;
        container.append_child(&root).map_err(js_err)?;
        Ok(Self { root, line })
    }

    pub fn set_text(&self, text: &str) {
        if self.line.text_content().as_deref() != Some(text) {
            self.line.set_text_content(Some(text));
        }
    }

    #[inline]
    pub fn remove(&self) {
        self.root.remove();
    }
}
