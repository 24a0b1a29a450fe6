pub mod app;
pub mod cell;
pub mod config;
pub mod events;
pub mod grid;
pub mod io;
pub mod render;
pub mod rules;
pub mod world;

/// Number of evaluation passes run so far
pub type Generation = u64;
