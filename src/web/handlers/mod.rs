//! HTML template rendering handlers.

mod home;
mod shorten;
mod stats;
mod view;

pub use home::home_handler;
pub use shorten::shorten_form_handler;
pub use stats::stats_handler;
