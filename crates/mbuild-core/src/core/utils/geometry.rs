use super::linalg::{Point, Vector};
use nalgebra::{Rotation3, Unit};
use std::collections::BTreeMap;

/// Smallest rotation carrying direction `from` onto direction `to`.
///
/// Returns `None` when either vector is zero or the two are exactly opposite,
/// in which case the rotation axis is not unique.
pub fn rotation_to_align(from: &Vector, to: &Vector) -> Option<Rotation3<f64>> {
    Rotation3::rotation_between(from, to)
}

/// Same as [`rotation_to_align`], but resolves the antiparallel case with a
/// half turn about an axis perpendicular to `from`.
pub fn rotation_to_align_any(from: &Vector, to: &Vector) -> Option<Rotation3<f64>> {
    if from.norm_squared() == 0.0 || to.norm_squared() == 0.0 {
        return None;
    }
    rotation_to_align(from, to).or_else(|| {
        let helper = if from.x.abs() < 0.9 {
            Vector::x()
        } else {
            Vector::y()
        };
        let axis = from.cross(&helper);
        Some(Rotation3::from_axis_angle(
            &Unit::new_normalize(axis),
            std::f64::consts::PI,
        ))
    })
}

/// Rotation by `angle_radians` about `axis`; `None` for a zero-length axis.
pub fn rotation_from_axis_angle(axis: &Vector, angle_radians: f64) -> Option<Rotation3<f64>> {
    let axis = Unit::try_new(*axis, f64::EPSILON)?;
    Some(Rotation3::from_axis_angle(&axis, angle_radians))
}

pub fn calculate_rmsd(coords1: &[Point], coords2: &[Point]) -> Option<f64> {
    if coords1.len() != coords2.len() || coords1.is_empty() {
        return None;
    }
    let n = coords1.len() as f64;
    let squared_dist_sum: f64 = coords1
        .iter()
        .zip(coords2.iter())
        .map(|(p1, p2)| (p1 - p2).norm_squared())
        .sum();
    Some((squared_dist_sum / n).sqrt())
}

/// RMSD over the labels present in both maps; `None` if they share no label.
pub fn calculate_named_rmsd(
    coords1: &BTreeMap<String, Point>,
    coords2: &BTreeMap<String, Point>,
) -> Option<f64> {
    let mut squared_dist_sum = 0.0;
    let mut count = 0;

    for (name, p1) in coords1 {
        if let Some(p2) = coords2.get(name) {
            squared_dist_sum += (p1 - p2).norm_squared();
            count += 1;
        }
    }
    if count == 0 {
        None
    } else {
        Some((squared_dist_sum / count as f64).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn rotation_to_align_maps_direction() {
        let from = Vector::new(1.0, 0.0, 0.0);
        let to = Vector::new(0.0, 0.0, 2.0);
        let rot = rotation_to_align(&from, &to).unwrap();
        let mapped = rot * from;
        assert!((mapped - Vector::new(0.0, 0.0, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn rotation_to_align_any_handles_opposite_vectors() {
        let from = Vector::new(0.0, 1.0, 0.0);
        let to = Vector::new(0.0, -3.0, 0.0);
        let rot = rotation_to_align_any(&from, &to).unwrap();
        assert!((rot * from - Vector::new(0.0, -1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn rotation_to_align_any_rejects_zero_vectors() {
        assert!(rotation_to_align_any(&Vector::zeros(), &Vector::x()).is_none());
        assert!(rotation_to_align_any(&Vector::x(), &Vector::zeros()).is_none());
    }

    #[test]
    fn rotation_from_axis_angle_quarter_turn_about_z() {
        let rot = rotation_from_axis_angle(&Vector::z(), FRAC_PI_2).unwrap();
        let mapped = rot * Vector::x();
        assert!((mapped - Vector::y()).norm() < 1e-12);
    }

    #[test]
    fn rotation_from_axis_angle_normalizes_axis() {
        let rot = rotation_from_axis_angle(&Vector::new(0.0, 0.0, 5.0), PI).unwrap();
        let mapped = rot * Vector::x();
        assert!((mapped + Vector::x()).norm() < 1e-12);
    }

    #[test]
    fn rotation_from_axis_angle_rejects_zero_axis() {
        assert!(rotation_from_axis_angle(&Vector::zeros(), 1.0).is_none());
        assert!(rotation_from_axis_angle(&Vector::new(0.0, 1e-300, 0.0), 1.0).is_none());
    }

    #[test]
    fn calculate_rmsd_of_identical_sets_is_zero() {
        let points = vec![Point::new(1.0, 2.0, 3.0), Point::new(-1.0, 0.0, 4.0)];
        assert_eq!(calculate_rmsd(&points, &points), Some(0.0));
    }

    #[test]
    fn calculate_rmsd_of_shifted_set_equals_shift() {
        let a = vec![Point::new(0.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0)];
        let b = vec![Point::new(0.0, 2.0, 0.0), Point::new(1.0, 2.0, 0.0)];
        let rmsd = calculate_rmsd(&a, &b).unwrap();
        assert!((rmsd - 2.0).abs() < 1e-12);
    }

    #[test]
    fn calculate_rmsd_rejects_mismatched_or_empty_sets() {
        let a = vec![Point::origin()];
        assert!(calculate_rmsd(&a, &[]).is_none());
        assert!(calculate_rmsd(&[], &[]).is_none());
    }

    #[test]
    fn calculate_named_rmsd_uses_shared_labels_only() {
        let mut a = BTreeMap::new();
        a.insert("C_1".to_string(), Point::new(0.0, 0.0, 0.0));
        a.insert("H_1".to_string(), Point::new(1.0, 0.0, 0.0));
        let mut b = BTreeMap::new();
        b.insert("C_1".to_string(), Point::new(0.0, 0.0, 3.0));
        b.insert("O_1".to_string(), Point::new(9.0, 9.0, 9.0));

        let rmsd = calculate_named_rmsd(&a, &b).unwrap();
        assert!((rmsd - 3.0).abs() < 1e-12);
    }

    #[test]
    fn calculate_named_rmsd_without_overlap_is_none() {
        let mut a = BTreeMap::new();
        a.insert("A".to_string(), Point::origin());
        let mut b = BTreeMap::new();
        b.insert("B".to_string(), Point::origin());
        assert!(calculate_named_rmsd(&a, &b).is_none());
    }
}
