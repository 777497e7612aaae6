pub mod menu;

pub use menu::{default_menu_entries, MenuError};
