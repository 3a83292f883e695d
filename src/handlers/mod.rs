pub mod auth_handler;
pub mod form_handler;
pub mod list_handler;
