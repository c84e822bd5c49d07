// Calendar Panels Library
// Event modal and label filter components, plus the state they talk to

pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;
