// Module exports for models

pub mod event;
pub mod header;
pub mod settings;
