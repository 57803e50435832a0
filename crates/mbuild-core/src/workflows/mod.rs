//! # Workflows Module
//!
//! High-level assembly procedures built on top of [`crate::core`].
//!
//! - **Docking** ([`dock`]) - Moves a piece so one of its ports lands on a
//!   port of an assembly, then adds it.
//! - **Building blocks** ([`blocks`]) - Ready-made methyl, ethane and alkane
//!   units with their ports.
//! - **Chains** ([`chain`]) - Repeats a body unit between a head and a tail,
//!   e.g. to build an n-alkane.

pub mod blocks;
pub mod chain;
pub mod dock;
