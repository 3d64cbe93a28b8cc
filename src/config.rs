//! Map and viewer configuration.
//!
//! Every field has a default so the page only needs to supply the values it
//! wants to change, as a JSON block:
//!
//! ```html
//! <script id="interactive-map-config" type="application/json">
//!   { "project_id": 265, "viewer": { "max_scale": 10 } }
//! </script>
//! ```

use serde::Deserialize;

use crate::error::MapError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_ELEMENT_ID: &str = "interactive-map-config";

/// Where the wheel keeps the content fixed while zooming.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WheelAnchor {
    /// The content point under the cursor stays under the cursor.
    #[default]
    Cursor,
    /// Scale changes around the layer origin; translate is left alone.
    Origin,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub max_scale: f64,
    /// Multiplicative factor per wheel notch.
    pub speed: f64,
    /// Scale added per pinch move that widens the pointers.
    pub pinch_step: f64,
    /// Contraction shrinks by `pinch_step * pinch_out_factor`.
    pub pinch_out_factor: f64,
    pub wheel_anchor: WheelAnchor,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            max_scale: 15.0,
            speed: 1.2,
            pinch_step: 0.02,
            pinch_out_factor: 4.0,
            wheel_anchor: WheelAnchor::Cursor,
        }
    }
}

impl ViewerConfig {
    /// Replaces values that would break the scale invariants with defaults.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.max_scale >= 1.0) {
            self.max_scale = 1.0;
        }
        if !(self.speed > 1.0) {
            self.speed = defaults.speed;
        }
        if !(self.pinch_step >= 0.0) {
            self.pinch_step = defaults.pinch_step;
        }
        if !(self.pinch_out_factor >= 1.0) {
            self.pinch_out_factor = defaults.pinch_out_factor;
        }
        self
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub container_id: String,
    pub project_id: u32,
    /// Listing API root, with trailing slash.
    pub api_base_url: String,
    /// Path of the SVG assets on the page origin, with leading and trailing slash.
    pub assets_path: String,
    pub log_level: String,
    pub viewer: ViewerConfig,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container_id: "interactive-map".to_string(),
            project_id: 265,
            api_base_url: "https://040acc5.netsolhost.com/".to_string(),
            assets_path: "/games/gore_homes/assets/".to_string(),
            log_level: if cfg!(debug_assertions) { "debug" } else { "warn" }.to_string(),
            viewer: ViewerConfig::default(),
        }
    }
}

impl MapConfig {
    pub fn from_json(raw: &str) -> Result<Self, MapError> {
        let config: Self = serde_json::from_str(raw).map_err(MapError::Config)?;
        Ok(config.normalized())
    }

    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.viewer = self.viewer.normalized();
        self
    }

    /// Reads the page's config block, falling back to defaults.
    #[must_use]
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|err| {
                web_sys::console::warn_1(&format!("{err}; using defaults").into());
                Self::default()
            }),
            None => Self::default(),
        }
    }

    #[must_use]
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    #[must_use]
    pub fn listing_url(&self) -> String {
        format!("{}wp-json/wp/v2/posts/{}", self.api_base_url, self.project_id)
    }

    /// Map asset URL, relative to the page origin.
    #[must_use]
    pub fn asset_url(&self, origin: &str, file_name: &str) -> String {
        format!("{origin}{}{file_name}", self.assets_path)
    }

    #[must_use]
    pub fn map_file_name(&self) -> String {
        format!("projectId_{}.svg", self.project_id)
    }
}
