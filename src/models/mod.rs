// Module exports for models

pub mod department;
pub mod drape;
pub mod room;
pub mod settings;
pub mod surgery;
