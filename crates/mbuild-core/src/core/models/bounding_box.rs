use nalgebra::Point3;

/// An axis-aligned bounding box defined by two opposite corners (`min` and `max`).
/// `min.x <= max.x`, `min.y <= max.y`, `min.z <= max.z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl BoundingBox {
    /// The degenerate box containing exactly `point`.
    pub fn from_point(point: Point3<f64>) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Smallest box containing every point, or `None` for an empty iterator.
    pub fn enclosing(points: impl IntoIterator<Item = Point3<f64>>) -> Option<Self> {
        let mut points = points.into_iter();
        let mut bbox = Self::from_point(points.next()?);
        for point in points {
            bbox.enclose_point(point);
        }
        Some(bbox)
    }

    /// Grows this `BoundingBox` in-place to ensure that it will contain a given `point`.
    pub fn enclose_point(&mut self, point: Point3<f64>) {
        self.min = self.min.inf(&point);
        self.max = self.max.sup(&point);
    }

    pub fn contains(&self, point: &Point3<f64>) -> bool {
        (0..3).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }

    pub fn extent(&self) -> nalgebra::Vector3<f64> {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enclosing_empty_iterator_is_none() {
        assert!(BoundingBox::enclosing(std::iter::empty()).is_none());
    }

    #[test]
    fn enclosing_single_point_is_degenerate() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let bbox = BoundingBox::enclosing([p]).unwrap();
        assert_eq!(bbox.min, p);
        assert_eq!(bbox.max, p);
        assert_eq!(bbox.extent(), nalgebra::Vector3::zeros());
    }

    #[test]
    fn enclosing_takes_componentwise_extremes() {
        let bbox = BoundingBox::enclosing([
            Point3::new(1.0, -2.0, 3.0),
            Point3::new(-1.0, 5.0, 0.0),
            Point3::new(0.5, 0.0, 7.0),
        ])
        .unwrap();
        assert_eq!(bbox.min, Point3::new(-1.0, -2.0, 0.0));
        assert_eq!(bbox.max, Point3::new(1.0, 5.0, 7.0));
    }

    #[test]
    fn contains_includes_boundary() {
        let bbox = BoundingBox::enclosing([Point3::origin(), Point3::new(1.0, 1.0, 1.0)]).unwrap();
        assert!(bbox.contains(&Point3::new(1.0, 0.5, 0.0)));
        assert!(!bbox.contains(&Point3::new(1.1, 0.5, 0.0)));
    }
}
