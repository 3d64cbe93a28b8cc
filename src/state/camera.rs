// View transform of the map layer: uniform scale plus translate, in CSS pixels.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

/// The layer is never shown smaller than its natural size.
pub const MIN_SCALE: f64 = 1.0;

/// A point in container-local screen space or in content space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Current pan/zoom transform applied to the content layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { scale: MIN_SCALE, translate_x: 0.0, translate_y: 0.0 }
    }
}

/// Clamps a scale into `[MIN_SCALE, max_scale]`; the lower bound wins.
#[must_use]
pub fn clamp_scale(scale: f64, max_scale: f64) -> f64 {
    scale.min(max_scale).max(MIN_SCALE)
}

impl ViewState {
    #[must_use]
    pub fn translate(&self) -> Point {
        Point::new(self.translate_x, self.translate_y)
    }

    /// Content-space coordinate currently drawn at `screen`.
    #[must_use]
    pub fn screen_to_content(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.translate_x) / self.scale,
            (screen.y - self.translate_y) / self.scale,
        )
    }

    /// Sets `scale` and moves the translate so the content point under
    /// `anchor` stays under it.
    pub fn zoom_about(&mut self, anchor: Point, scale: f64) {
        let content = self.screen_to_content(anchor);
        self.scale = scale;
        self.translate_x = anchor.x - content.x * scale;
        self.translate_y = anchor.y - content.y * scale;
    }

    /// Keeps the scaled content covering the container: translate ends up in
    /// `[-(content * scale - container), 0]` on each axis.
    pub fn clamp_translate(&mut self, content: Size, container: Size) {
        let min_x = -(content.width * self.scale - container.width);
        let min_y = -(content.height * self.scale - container.height);
        self.translate_x = self.translate_x.max(min_x).min(0.0);
        self.translate_y = self.translate_y.max(min_y).min(0.0);
    }

    #[must_use]
    pub fn css_transform(&self) -> String {
        // + 0.0 folds -0 so it never renders as "-0px"
        format!(
            "translate({}px, {}px) scale({})",
            self.translate_x + 0.0,
            self.translate_y + 0.0,
            self.scale
        )
    }
}
