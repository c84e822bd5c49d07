pub mod context;
pub mod id;
pub mod settings;
pub mod store;
