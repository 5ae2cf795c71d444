// Submodules for the page UI
pub mod main_ui;
pub mod keyboard_input;
pub mod hero;
pub mod ticker_bar;
pub mod contact_panel;
pub mod statusbar;
pub mod theme;
