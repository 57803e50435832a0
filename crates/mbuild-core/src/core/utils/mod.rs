pub mod geometry;
pub mod linalg;
