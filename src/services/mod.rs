// Service module exports

pub mod event;
pub mod print;
pub mod schedule;
pub mod settings;
