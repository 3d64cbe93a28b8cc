mod components;
mod config;
mod error;
mod interactive_map;
mod model;
mod state;
mod surface;
mod util;
mod viewer;

use components::app::{App, AppProps};
use config::MapConfig;

fn main() {
    console_error_panic_hook::set_once();
    let config = MapConfig::load();
    if let Err(err) = console_log::init_with_level(config.level()) {
        web_sys::console::warn_1(&format!("logger already set: {err}").into());
    }
    log::info!("interactive map for project {}", config.project_id);
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
