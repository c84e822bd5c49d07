// Module exports for models

pub mod event;
pub mod label;
pub mod settings;
