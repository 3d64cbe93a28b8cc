use web_sys::{Element, HtmlElement};

use crate::state::Size;
use crate::viewer::Surface;

/// The map in the page: a clipping viewport and the layer inside it that
/// carries the transform.
pub struct DomSurface {
    viewport: Element,
    layer: HtmlElement,
}

impl DomSurface {
    #[must_use]
    pub fn new(viewport: Element, layer: HtmlElement) -> Self {
        Self { viewport, layer }
    }

    #[must_use]
    pub fn viewport(&self) -> &Element {
        &self.viewport
    }

    #[must_use]
    pub fn layer(&self) -> &HtmlElement {
        &self.layer
    }
}

impl Surface for DomSurface {
    fn container_size(&self) -> Size {
        Size::new(f64::from(self.viewport.client_width()), f64::from(self.viewport.client_height()))
    }

    // offsetWidth/Height ignore CSS transforms, so this is the unscaled size.
    fn content_size(&self) -> Size {
        Size::new(f64::from(self.layer.offset_width()), f64::from(self.layer.offset_height()))
    }

    fn write_transform(&mut self, css: &str) {
        if let Err(err) = self.layer.style().set_property("transform", css) {
            log::warn!("transform write failed: {err:?}");
        }
    }
}
