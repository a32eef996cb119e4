pub mod api_utils;
pub mod notifications;
pub mod scroll_lock;
