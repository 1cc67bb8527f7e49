//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering
//! logic. Components communicate through Actions rather than direct state
//! mutation.

pub mod accent;
pub mod category_dialog;
pub mod detail;
pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod quit_dialog;
pub mod sort_dialog;

pub use accent::category_accent;
pub use category_dialog::CategoryDialog;
pub use detail::DetailDialog;
pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeComponent, HomeRenderContext};
pub use layout::{calculate_main_layout, centered_popup};
pub use quit_dialog::QuitDialog;
pub use sort_dialog::SortDialog;
