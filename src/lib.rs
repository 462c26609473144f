// Weekly Schedule Library
// Exports all modules for embedding and testing

pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;
