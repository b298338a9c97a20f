pub mod main_menu;
pub mod sub_menu;

pub use main_menu::{MainAction, MainMenu};
pub use sub_menu::{categories_menu, export_menu, reports_menu, SubChoice, SubMenu, SubMenuItem};
