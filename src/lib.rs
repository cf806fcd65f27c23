// OR Board Library
// Scheduling core for the operating-room board: models, services, time helpers

pub mod models;
pub mod services;
pub mod utils;
