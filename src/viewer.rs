//! Pan/zoom viewer for the map layer.
//!
//! `PanZoomViewer` turns pointer and wheel input into a [`ViewState`] and
//! writes it to the content layer. It never touches the DOM directly: the
//! sizes it clamps against and the place it writes to are a [`Surface`], so
//! the gesture logic runs the same in the browser and in tests.
//!
//! Every write goes through [`PanZoomViewer::apply_transform`], the one place
//! translate is clamped.

use crate::config::{ViewerConfig, WheelAnchor};
use crate::state::camera::clamp_scale;
use crate::state::{ActivePointers, GestureSession, Point, Size, ViewState};

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

/// What the viewer needs from its host.
pub trait Surface {
    /// Visible viewport size, in CSS pixels.
    fn container_size(&self) -> Size;
    /// Untransformed layout size of the content layer, in CSS pixels.
    fn content_size(&self) -> Size;
    fn write_transform(&mut self, css: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
    Pen,
}

impl PointerKind {
    /// Maps a DOM `pointerType`.
    #[must_use]
    pub fn from_dom(pointer_type: &str) -> Self {
        match pointer_type {
            "touch" => Self::Touch,
            "pen" => Self::Pen,
            _ => Self::Mouse,
        }
    }
}

/// A pointer event in container-local CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub id: i32,
    pub position: Point,
    pub kind: PointerKind,
}

/// A wheel notch. `delta > 0` zooms in, `delta < 0` zooms out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    pub position: Point,
    pub delta: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

pub struct PanZoomViewer<S> {
    config: ViewerConfig,
    view: ViewState,
    pointers: ActivePointers,
    session: GestureSession,
    disabled: bool,
    surface: S,
}

impl<S: Surface> PanZoomViewer<S> {
    #[must_use]
    pub fn new(surface: S, config: ViewerConfig) -> Self {
        Self {
            config: config.normalized(),
            view: ViewState::default(),
            pointers: ActivePointers::default(),
            session: GestureSession::default(),
            disabled: false,
            surface,
        }
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn pointers(&self) -> &ActivePointers {
        &self.pointers
    }

    #[must_use]
    pub fn session(&self) -> GestureSession {
        self.session
    }

    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Suppresses move and wheel handling. Registered pointers are kept.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    // --- Pointer input ---

    pub fn on_pointer_down(&mut self, pointer: PointerInput) {
        if self.disabled {
            return;
        }

        // Some touch devices drop pointerup; a third finger means the
        // current gesture is stale.
        if self.pointers.is_full() && !self.pointers.contains(pointer.id) {
            log::debug!("pointer {} while {} active: restarting gesture", pointer.id, self.pointers.len());
            self.pointers.clear();
            self.end_session();
        }

        if self.pointers.is_empty() {
            self.session = GestureSession::begin(pointer.position, self.view.translate());
        }
        self.pointers.press(pointer.id, pointer.position);
        log::trace!("pointerdown {:?} {} active={}", pointer.kind, pointer.id, self.pointers.len());
    }

    pub fn on_pointer_move(&mut self, pointer: PointerInput) {
        if self.disabled || !self.session.is_active() {
            return;
        }
        if !self.pointers.update(pointer.id, pointer.position) {
            return;
        }

        match self.pointers.len() {
            1 => self.pan(pointer.position),
            _ => self.pinch(),
        }
        self.apply_transform();
    }

    pub fn on_pointer_up(&mut self, pointer: PointerInput) {
        self.release(pointer.id);
    }

    pub fn on_pointer_cancel(&mut self, pointer: PointerInput) {
        self.release(pointer.id);
    }

    pub fn on_wheel(&mut self, wheel: WheelInput) {
        if self.disabled || wheel.delta == 0.0 {
            return;
        }
        let direction = if wheel.delta > 0.0 { ZoomDirection::In } else { ZoomDirection::Out };
        self.zoom_at(wheel.position, direction);
    }

    // --- Programmatic view changes ---

    /// One wheel notch around the middle of the container.
    pub fn zoom_step(&mut self, direction: ZoomDirection) {
        let center = self.surface.container_size().center();
        self.zoom_at(center, direction);
    }

    pub fn reset_view(&mut self) {
        self.view = ViewState::default();
        self.apply_transform();
    }

    /// Clamps translate into the content bounds and writes the transform.
    pub fn apply_transform(&mut self) -> String {
        let container = self.surface.container_size();
        let content = self.surface.content_size();
        self.view.clamp_translate(content, container);
        let css = self.view.css_transform();
        log::trace!("{css}");
        self.surface.write_transform(&css);
        css
    }

    // --- Internals ---

    fn pan(&mut self, position: Point) {
        let anchor = match self.session.anchor() {
            Some(anchor) => anchor,
            None => return,
        };
        self.session = GestureSession::Panning { anchor };
        self.view.translate_x = position.x - anchor.x;
        self.view.translate_y = position.y - anchor.y;
    }

    fn pinch(&mut self) {
        let (Some(distance), Some(first), Some(anchor)) =
            (self.pointers.pinch_distance(), self.pointers.first(), self.session.anchor())
        else {
            return;
        };

        let prev_distance = self.session.prev_pinch_distance();
        if prev_distance > 0.0 {
            let mut scale = self.view.scale;
            if distance > prev_distance {
                scale += self.config.pinch_step;
            } else if distance < prev_distance {
                scale -= self.config.pinch_step * self.config.pinch_out_factor;
            }
            let scale = clamp_scale(scale, self.config.max_scale);
            self.view.zoom_about(first.position, scale);
        }
        self.session = GestureSession::Pinching { anchor, prev_distance: distance };
    }

    fn zoom_at(&mut self, position: Point, direction: ZoomDirection) {
        let scale = match direction {
            ZoomDirection::In => self.view.scale * self.config.speed,
            ZoomDirection::Out => self.view.scale / self.config.speed,
        };
        let scale = clamp_scale(scale, self.config.max_scale);
        match self.config.wheel_anchor {
            WheelAnchor::Cursor => self.view.zoom_about(position, scale),
            WheelAnchor::Origin => self.view.scale = scale,
        }
        self.apply_transform();
    }

    fn release(&mut self, id: i32) {
        if !self.pointers.release(id) {
            return;
        }
        match self.pointers.first() {
            None => self.end_session(),
            // Back to a one-finger drag; re-anchor so the layer does not jump.
            Some(remaining) => {
                self.session = GestureSession::begin(remaining.position, self.view.translate());
            }
        }
        log::trace!("pointer {id} released, active={}", self.pointers.len());
    }

    fn end_session(&mut self) {
        self.session = GestureSession::Idle;
    }
}
