//! # mbuild Core Library
//!
//! Hierarchical molecular building: compounds made of atoms and
//! sub-compounds, ports that mark attachment sites, and rigid alignment that
//! docks one compound onto another.
//!
//! ## Layout
//!
//! - **[`core`]: The Foundation.** The compound tree (`Compound`, `Atom`,
//!   ports), the rigid [`CoordinateTransform`](core::transform::CoordinateTransform)
//!   with its Kabsch fit, element data and structure I/O.
//!
//! - **[`workflows`]: The Public API.** Docking, the built-in building blocks
//!   and chain assembly.

pub mod core;
pub mod workflows;
