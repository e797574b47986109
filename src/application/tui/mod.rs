pub mod month_view;
pub mod theme;
pub mod tui;

pub use month_view::*;
pub use theme::*;
pub use tui::*;
