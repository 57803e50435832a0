//! # Core Models Module
//!
//! The composition tree: atoms as leaves, compounds as labeled composites,
//! and ports as marker compounds that define docking frames.
//!
//! ## Key Components
//!
//! - [`atom`] - Typed point with rendering metadata
//! - [`compound`] - Labeled composite node, path lookup, flattening and rigid
//!   alignment of whole subtrees
//! - [`port`] - Ghost-atom docking frames and their non-owning references
//! - [`bounding_box`] - Axis-aligned extents
//! - [`error`] - Structural and alignment failures
//!
//! ## Usage
//!
//! ```ignore
//! use mbuild::core::models::{atom::Atom, compound::Compound};
//!
//! let mut methane = Compound::with_label("methane");
//! methane.add(Atom::new("C", Point3::origin()), Some("C_1"))?;
//! let carbon = methane.atom("C_1");
//! ```

pub mod atom;
pub mod bounding_box;
pub mod compound;
pub mod error;
pub mod identity;
pub mod port;
