pub mod app;
pub mod legend;
pub mod legend_panel;
pub mod lot_panel;
pub mod map_controls;
