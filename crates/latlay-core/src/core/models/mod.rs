pub mod ids;
pub mod lattice;
pub mod layout;
