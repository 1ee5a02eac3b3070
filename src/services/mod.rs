// Service module exports

pub mod range;
pub mod settings;
pub mod weekend;
