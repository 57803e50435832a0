use super::utils::geometry::{rotation_from_axis_angle, rotation_to_align_any};
use super::utils::linalg::{self, Matrix, Point, Vector};
use nalgebra::{Isometry3, Rotation3, Translation3, Unit, UnitQuaternion};
use thiserror::Error;
use tracing::warn;

/// Minimum number of correspondence pairs for a fully determined rotation.
pub const MIN_WELL_POSED_PAIRS: usize = 3;

/// Relative tolerance on the scatter singular values below which a point set
/// is treated as collinear (or coincident).
pub const COLLINEARITY_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransformError {
    #[error("Point sets differ in size: {source_len} source points, {target_len} target points")]
    LengthMismatch { source_len: usize, target_len: usize },

    #[error(
        "Insufficient correspondence pairs for a rigid alignment: requires at least {required}, but found {found}"
    )]
    InsufficientPoints { found: usize, required: usize },

    #[error("Source points are collinear; the rotation about their common axis is undetermined")]
    Collinear,

    #[error("Singular value decomposition of the covariance matrix failed")]
    Svd,

    #[error("Rotation axis has zero length")]
    ZeroAxis,
}

/// How [`CoordinateTransform::compute`] treats under-determined inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Fewer than three pairs, or a collinear source set, is an error.
    #[default]
    Reject,
    /// Fall back to the smallest motion consistent with the input: a pure
    /// translation for a single pair, and the minimal rotation aligning the
    /// principal directions for two pairs or a collinear set.
    MinimalMotion,
}

/// An immutable rigid transform (rotation followed by translation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransform {
    isometry: Isometry3<f64>,
}

impl Default for CoordinateTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl CoordinateTransform {
    pub fn identity() -> Self {
        Self {
            isometry: Isometry3::identity(),
        }
    }

    pub fn from_parts(rotation: Rotation3<f64>, translation: Vector) -> Self {
        Self {
            isometry: Isometry3::from_parts(
                Translation3::from(translation),
                UnitQuaternion::from_rotation_matrix(&rotation),
            ),
        }
    }

    pub fn translation(offset: Vector) -> Self {
        Self::from_parts(Rotation3::identity(), offset)
    }

    /// Rotation by `angle_radians` about `axis` through the origin.
    pub fn rotation(axis: &Vector, angle_radians: f64) -> Result<Self, TransformError> {
        let rotation =
            rotation_from_axis_angle(axis, angle_radians).ok_or(TransformError::ZeroAxis)?;
        Ok(Self::from_parts(rotation, Vector::zeros()))
    }

    /// Rotation about a coordinate axis or any other axis known to be unit length.
    pub fn rotation_about(axis: &Unit<Vector>, angle_radians: f64) -> Self {
        Self::from_parts(Rotation3::from_axis_angle(axis, angle_radians), Vector::zeros())
    }

    /// Best-fit rigid transform mapping `source` onto `target` under the
    /// strict [`DegeneratePolicy::Reject`] policy.
    pub fn compute(source: &[Point], target: &[Point]) -> Result<Self, TransformError> {
        Self::compute_with_policy(source, target, DegeneratePolicy::Reject)
    }

    /// Best-fit rigid transform minimising `Σ |R sᵢ + t − tᵢ|²`.
    ///
    /// The rotation is always proper (determinant +1).
    pub fn compute_with_policy(
        source: &[Point],
        target: &[Point],
        policy: DegeneratePolicy,
    ) -> Result<Self, TransformError> {
        if source.len() != target.len() {
            return Err(TransformError::LengthMismatch {
                source_len: source.len(),
                target_len: target.len(),
            });
        }
        let (Some(source_centroid), Some(target_centroid)) =
            (linalg::centroid(source), linalg::centroid(target))
        else {
            return Err(TransformError::InsufficientPoints {
                found: 0,
                required: 1,
            });
        };

        let centered_source = linalg::centered(source, &source_centroid);
        let centered_target = linalg::centered(target, &target_centroid);

        let degenerate = if source.len() < MIN_WELL_POSED_PAIRS {
            Some(TransformError::InsufficientPoints {
                found: source.len(),
                required: MIN_WELL_POSED_PAIRS,
            })
        } else if is_collinear(&centered_source)? {
            Some(TransformError::Collinear)
        } else {
            None
        };

        if let Some(err) = degenerate {
            return match policy {
                DegeneratePolicy::Reject => Err(err),
                DegeneratePolicy::MinimalMotion => {
                    warn!(
                        "Degenerate alignment input ({}); using minimal-motion fallback.",
                        err
                    );
                    Ok(minimal_motion(
                        &centered_source,
                        &centered_target,
                        &source_centroid,
                        &target_centroid,
                    ))
                }
            };
        }

        let h = linalg::cross_covariance(&centered_source, &centered_target);
        let svd = linalg::svd3(&h).ok_or(TransformError::Svd)?;

        let d = linalg::determinant(&(svd.u * svd.v_t));
        let mut correction = Matrix::identity();
        if d < 0.0 {
            let smallest = svd.singular_values.imin();
            correction[(smallest, smallest)] = -1.0;
        }

        let rotation_matrix = svd.u * correction * svd.v_t;
        let rotation = Rotation3::from_matrix_unchecked(rotation_matrix);
        let translation = target_centroid.coords - rotation * source_centroid.coords;

        Ok(Self::from_parts(rotation, translation))
    }

    pub fn rotation_matrix(&self) -> Matrix {
        self.isometry.rotation.to_rotation_matrix().into_inner()
    }

    pub fn translation_vector(&self) -> Vector {
        self.isometry.translation.vector
    }

    /// Transform that applies `self` first, then `next`.
    pub fn then(&self, next: &CoordinateTransform) -> Self {
        Self {
            isometry: next.isometry * self.isometry,
        }
    }

    pub fn inverse(&self) -> Self {
        Self {
            isometry: self.isometry.inverse(),
        }
    }

    pub fn apply_point(&self, point: &Point) -> Point {
        self.isometry.transform_point(point)
    }

    pub fn apply(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|p| self.apply_point(p)).collect()
    }
}

fn is_collinear(centered: &[Vector]) -> Result<bool, TransformError> {
    let svd = linalg::svd3(&linalg::scatter(centered)).ok_or(TransformError::Svd)?;
    let largest = svd.singular_values.max();
    // The singular values sum to the total squared spread, so both checks
    // scale with the coordinates.
    let spread: f64 = centered.iter().map(|v| v.norm_squared()).sum();
    if spread == 0.0 || largest <= f64::EPSILON * spread {
        return Ok(true);
    }
    let mut sorted = [
        svd.singular_values[0],
        svd.singular_values[1],
        svd.singular_values[2],
    ];
    sorted.sort_by(|a, b| b.total_cmp(a));
    Ok(sorted[1] <= COLLINEARITY_TOLERANCE * largest)
}

fn principal_direction(centered: &[Vector]) -> Option<Vector> {
    let svd = linalg::svd3(&linalg::scatter(centered))?;
    let axis = svd.u.column(svd.singular_values.imax()).into_owned();
    // Orient along the first point that has a component on the axis so the
    // direction follows the correspondence order.
    let reference = centered.iter().find(|v| v.dot(&axis).abs() > 1e-12)?;
    Some(if reference.dot(&axis) < 0.0 { -axis } else { axis })
}

fn minimal_motion(
    centered_source: &[Vector],
    centered_target: &[Vector],
    source_centroid: &Point,
    target_centroid: &Point,
) -> CoordinateTransform {
    let rotation = match (
        principal_direction(centered_source),
        principal_direction(centered_target),
    ) {
        (Some(from), Some(to)) => {
            rotation_to_align_any(&from, &to).unwrap_or_else(Rotation3::identity)
        }
        _ => Rotation3::identity(),
    };
    let translation = target_centroid.coords - rotation * source_centroid.coords;
    CoordinateTransform::from_parts(rotation, translation)
}
