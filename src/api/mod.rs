//! HTTP API handlers

pub mod buildinfo;
pub mod health;
pub mod summary;
pub mod ui;

pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use summary::summary_routes;
pub use ui::ui_routes;
