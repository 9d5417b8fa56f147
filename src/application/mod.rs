// Process context assembled at startup
pub mod bootstrap;

// Sales prediction
pub mod ml;
