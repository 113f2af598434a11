pub mod energy;
pub mod geometry;
pub mod models;
