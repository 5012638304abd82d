//! HTTP request handlers.

pub mod redirect;
pub mod save;

pub use redirect::redirect_handler;
pub use save::save_handler;
