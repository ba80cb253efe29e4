//! Widgets of the detail page

pub mod alert_dialog;
pub mod detail_description;
pub mod detail_header;
pub mod modal_overlay;
pub mod nav_bar;

pub use alert_dialog::AlertDialog;
pub use detail_description::{wrapped_height, DetailDescription};
pub use detail_header::DetailHeader;
pub use nav_bar::NavBar;
