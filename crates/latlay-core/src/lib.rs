//! # latlay
//!
//! A force-directed layout engine for line diagrams of finite lattices, as
//! drawn for concept lattices. Given a candidate diagram (node positions plus
//! covering edges), the engine refines the positions of the lattice's
//! infimum-irreducible elements by minimizing a composite physical energy
//! (repulsive, attractive and gravitational terms) and rebuilds the full
//! diagram from the optimized irreducible positions.
//!
//! ## Architecture
//!
//! The library is split into three layers with a strict dependency direction:
//!
//! - **[`core`]: The Foundation.** Stateless data models ([`core::models`]
//!   with `Layout` and `Lattice`), 2D geometry primitives
//!   ([`core::geometry`]) and the pure energy/force mathematics
//!   ([`core::energy`]).
//!
//! - **[`engine`]: The Logic Core.** The placement reconstruction that turns
//!   irreducible positions back into a full diagram, the numerical
//!   minimizer, the composite objective handed to it, and the configuration
//!   and error types of an optimization pass.
//!
//! - **[`workflows`]: The Public API.** The `force_layout` driver that ties
//!   the layers together into one complete layout pass.

pub mod core;
pub mod engine;
pub mod workflows;
