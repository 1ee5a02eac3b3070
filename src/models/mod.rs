// Module exports for models

pub mod date_range;
pub mod settings;
