mod app;
pub mod event_dialog;
pub mod label_filter;
pub mod palette;

pub use app::CalendarApp;
