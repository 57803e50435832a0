//! Fixed-size 3D linear algebra used by the alignment code.
//!
//! Everything the tree and transform layers need from a linear-algebra
//! library goes through this module, so the backing implementation
//! (currently `nalgebra`) can be swapped without touching them.

use nalgebra::{Matrix3, Point3, Vector3};

pub type Point = Point3<f64>;
pub type Vector = Vector3<f64>;
pub type Matrix = Matrix3<f64>;

/// Result of a 3×3 singular value decomposition, `m = u * diag(singular_values) * v_t`.
///
/// Singular values are sorted in descending order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Svd3 {
    pub u: Matrix,
    pub singular_values: Vector,
    pub v_t: Matrix,
}

/// Arithmetic mean of a point set, or `None` for an empty set.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum: Vector = points.iter().map(|p| p.coords).sum();
    Some(Point::from(sum / points.len() as f64))
}

/// Translates a point set so that its centroid sits at the origin.
pub fn centered(points: &[Point], centroid: &Point) -> Vec<Vector> {
    points.iter().map(|p| p - centroid).collect()
}

/// Cross-covariance `Σ bᵢ aᵢᵀ` of two centered, equally sized vector sets.
pub fn cross_covariance(a: &[Vector], b: &[Vector]) -> Matrix {
    a.iter()
        .zip(b.iter())
        .fold(Matrix::zeros(), |acc, (a, b)| acc + b * a.transpose())
}

/// Scatter matrix `Σ aᵢ aᵢᵀ` of a centered vector set.
pub fn scatter(a: &[Vector]) -> Matrix {
    cross_covariance(a, a)
}

pub fn svd3(m: &Matrix) -> Option<Svd3> {
    let svd = m.svd(true, true);
    Some(Svd3 {
        u: svd.u?,
        singular_values: svd.singular_values,
        v_t: svd.v_t?,
    })
}

pub fn determinant(m: &Matrix) -> f64 {
    m.determinant()
}
