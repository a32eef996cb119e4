pub mod menu_data;
pub mod navbar;
pub mod sidebar;
pub mod state;
