use super::identity::Identity;
use crate::core::elements;
use crate::core::transform::CoordinateTransform;
use nalgebra::Point3;

/// A leaf of the composition tree: a typed point in space.
///
/// Only the position takes part in alignment; the radius and color are
/// carried along for renderers and exporters.
#[derive(Debug, Clone)]
pub struct Atom {
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// The type tag (usually an element symbol). `"G"` marks a ghost.
    pub atom_type: String,
    /// Display radius in Angstroms.
    pub radius: f64,
    /// Display color as linear RGB.
    pub color: [f32; 3],
    label: Option<String>,
    identity: Identity,
}

impl Atom {
    /// Creates an atom of the given type, with rendering metadata taken from
    /// the element table.
    pub fn new(atom_type: &str, position: Point3<f64>) -> Self {
        Self {
            position,
            atom_type: atom_type.to_string(),
            radius: elements::vdw_radius(atom_type),
            color: elements::display_color(atom_type),
            label: None,
            identity: Identity::next(),
        }
    }

    pub fn ghost(position: Point3<f64>) -> Self {
        Self::new(elements::GHOST_ATOM_TYPE, position)
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    /// The explicit label, or `Atom_<identity>` when none was set.
    pub fn label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("Atom_{}", self.identity.value()),
        }
    }

    pub fn is_ghost(&self) -> bool {
        elements::is_ghost(&self.atom_type)
    }

    pub fn apply_transformation(&mut self, transform: &CoordinateTransform) {
        self.position = transform.apply_point(&self.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn new_atom_takes_metadata_from_element_table() {
        let atom = Atom::new("C", Point3::new(1.0, 2.0, 3.0));

        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.atom_type, "C");
        assert_eq!(atom.radius, elements::vdw_radius("C"));
        assert_eq!(atom.color, elements::display_color("C"));
        assert!(!atom.is_ghost());
    }

    #[test]
    fn ghost_atom_is_flagged() {
        let atom = Atom::ghost(Point3::origin());
        assert!(atom.is_ghost());
        assert_eq!(atom.atom_type, "G");
        assert_eq!(atom.radius, 0.0);
    }

    #[test]
    fn default_label_uses_type_name_and_identity() {
        let a = Atom::new("H", Point3::origin());
        let b = Atom::new("H", Point3::origin());

        assert!(a.label().starts_with("Atom_"));
        assert_ne!(a.label(), b.label());
    }

    #[test]
    fn explicit_label_overrides_default() {
        let atom = Atom::new("O", Point3::origin()).with_label("O_1");
        assert_eq!(atom.label(), "O_1");
    }

    #[test]
    fn cloned_unlabeled_atom_gets_fresh_default_label() {
        let atom = Atom::new("N", Point3::origin());
        let copy = atom.clone();
        assert_ne!(atom.label(), copy.label());
        assert_eq!(atom.position, copy.position);
    }

    #[test]
    fn apply_transformation_moves_position() {
        let mut atom = Atom::new("C", Point3::new(1.0, 0.0, 0.0));
        atom.apply_transformation(&CoordinateTransform::translation(Vector3::new(0.0, 2.0, 0.0)));
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 0.0));
    }
}
