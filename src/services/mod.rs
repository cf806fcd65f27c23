// Service module exports

pub mod conflict;
pub mod placement;
pub mod projections;
pub mod schedule;
pub mod settings;
