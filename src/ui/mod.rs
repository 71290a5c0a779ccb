//! GUI module for Gobang

pub mod app;
pub mod canvas_view;
pub mod list_view;
pub mod theme;

pub use app::GobangApp;
pub use canvas_view::CanvasView;
pub use list_view::ListView;
