//! # Core Module
//!
//! Fundamental building blocks for assembling molecular structures from
//! reusable compounds.
//!
//! - **Composition tree** ([`models`]) - Atoms, compounds and ports
//! - **Rigid alignment** ([`transform`]) - Best-fit rotation and translation
//!   between corresponding point sets
//! - **Element data** ([`elements`]) - Per-type rendering metadata and the
//!   ghost convention
//! - **File I/O** ([`io`]) - XYZ export and TOML building-block templates
//! - **Math** ([`utils`]) - Isolated linear algebra and geometry helpers

pub mod elements;
pub mod io;
pub mod models;
pub mod transform;
pub mod utils;
