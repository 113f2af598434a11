pub mod attraction;
pub mod context;
pub mod gravity;
pub mod params;
pub mod repulsion;
pub mod term;
