// Service module exports

pub mod export;
pub mod layout;
pub mod schedule;
pub mod settings;
