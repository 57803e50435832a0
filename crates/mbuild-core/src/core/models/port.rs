//! Docking ports.
//!
//! A port is a compound made of four ghost atoms laid out as a small,
//! asymmetric tetrahedron. Its only job is to define a local frame: when a
//! port is aligned onto another port, all four ghosts correspond by label, so
//! the alignment is always fully determined. Ports are moved into place with
//! the rigid helpers on [`Compound`] before being added to their host.
//!
//! A port may also carry non-owning references (for example to the atom it
//! bonds through). These are stored as paths relative to the compound that
//! directly contains the port and are never traversed, transformed or
//! exported.

use super::atom::Atom;
use super::compound::{Compound, CompoundKind, validate_label};
use super::error::CompoundError;
use nalgebra::Point3;

/// Ghost atom labels and local coordinates defining a port frame.
pub const PORT_GHOSTS: [(&str, [f64; 3]); 4] = [
    ("G_1", [0.0, 0.0, 0.0]),
    ("G_2", [0.0, 0.3, 0.0]),
    ("G_3", [0.15, 0.0, 0.0]),
    ("G_4", [0.0, 0.0, 0.1]),
];

impl Compound {
    /// Creates an unlabeled port at the origin.
    pub fn port() -> Self {
        let mut port = Compound::with_kind(CompoundKind::Port);
        for (label, [x, y, z]) in PORT_GHOSTS {
            // PORT_GHOSTS labels are distinct valid segments and the port starts empty.
            port.add(Atom::ghost(Point3::new(x, y, z)).with_label(label), None)
                .expect("port ghost labels are distinct");
        }
        port
    }

    /// Records a non-owning reference under `label`.
    ///
    /// `path` is resolved relative to the compound that directly contains
    /// this one; see [`Compound::resolve_reference`].
    pub fn reference(&mut self, label: &str, path: &str) -> Result<&mut Self, CompoundError> {
        validate_label(label)?;
        if self.references.contains_key(label) || self.contains(label) {
            return Err(CompoundError::DuplicateLabel {
                label: label.to_string(),
                parent: self.label(),
            });
        }
        self.references.insert(label.to_string(), path.to_string());
        Ok(self)
    }

    pub fn referenced_path(&self, label: &str) -> Option<&str> {
        self.references.get(label).map(String::as_str)
    }

    pub fn references(&self) -> impl Iterator<Item = (&str, &str)> {
        self.references
            .iter()
            .map(|(label, path)| (label.as_str(), path.as_str()))
    }

    /// Follows the reference `label` of the port at `port_path`.
    pub fn resolve_reference(&self, port_path: &str, label: &str) -> Option<&Atom> {
        let relative = self.compound(port_path)?.referenced_path(label)?;
        match port_path.rsplit_once('.') {
            Some((host, _)) => self.atom(&format!("{host}.{relative}")),
            None => self.atom(relative),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::compound::NodeRef;
    use crate::core::transform::CoordinateTransform;
    use nalgebra::Vector3;
    use std::f64::consts::PI;

    fn host() -> Compound {
        let mut host = Compound::with_label("host");
        host.add(Atom::new("C", Point3::origin()), Some("C_1"))
            .unwrap();
        let mut up = Compound::port();
        up.rotate_around_z(PI)
            .translate(Vector3::new(0.0, -0.7, 0.0));
        up.reference("C_1", "C_1").unwrap();
        host.add(up, Some("up")).unwrap();
        host
    }

    #[test]
    fn new_port_holds_four_ghosts() {
        let port = Compound::port();
        assert!(port.is_port());
        assert_eq!(port.len(), 4);
        assert!(port.atoms().values().all(|a| a.is_ghost()));
        assert!(port.label().starts_with("Port_"));
    }

    #[test]
    fn port_ghosts_are_a_well_posed_frame() {
        let port = Compound::port();
        let mut moved = port.clone();
        moved
            .rotate_around_axis(&Vector3::new(1.0, 1.0, 0.0), 0.9)
            .unwrap();
        let transform = port
            .create_equivalence_transform(&[("", NodeRef::from(&moved))])
            .unwrap();
        let expected = CoordinateTransform::rotation(&Vector3::new(1.0, 1.0, 0.0), 0.9).unwrap();
        assert!((transform.rotation_matrix() - expected.rotation_matrix()).norm() < 1e-9);
    }

    #[test]
    fn references_are_not_owned_atoms() {
        let host = host();
        assert_eq!(host.compound("up").unwrap().referenced_path("C_1"), Some("C_1"));
        assert_eq!(host.atoms().len(), 5);
        assert!(host.atom("up.C_1").is_none());
        assert!(host.boundingbox(true).unwrap().extent().norm() < 1e-12);
    }

    #[test]
    fn resolve_reference_finds_atom_relative_to_port_host() {
        let host = host();
        let carbon = host.resolve_reference("up", "C_1").unwrap();
        assert!(std::ptr::eq(carbon, host.atom("C_1").unwrap()));

        let mut root = Compound::new();
        root.add(host, Some("methyl")).unwrap();
        let carbon = root.resolve_reference("methyl.up", "C_1").unwrap();
        assert_eq!(carbon.atom_type, "C");
        assert!(root.resolve_reference("methyl.up", "absent").is_none());
        assert!(root.resolve_reference("methyl.down", "C_1").is_none());
    }

    #[test]
    fn references_follow_the_referenced_atom_through_transforms() {
        let mut root = Compound::new();
        root.add(host(), Some("methyl")).unwrap();
        root.translate(Vector3::new(0.0, 0.0, 4.0));
        let carbon = root.resolve_reference("methyl.up", "C_1").unwrap();
        assert_eq!(carbon.position, Point3::new(0.0, 0.0, 4.0));
    }

    #[test]
    fn reference_labels_must_be_path_segments() {
        let mut port = Compound::port();
        for label in ["", "C.1"] {
            assert_eq!(
                port.reference(label, "C_1").unwrap_err(),
                CompoundError::InvalidLabel {
                    label: label.to_string()
                }
            );
        }
        assert_eq!(port.references().count(), 0);
    }

    #[test]
    fn duplicate_reference_label_is_rejected() {
        let mut port = Compound::port();
        port.reference("C_1", "C_1").unwrap();
        assert!(matches!(
            port.reference("C_1", "C_2"),
            Err(CompoundError::DuplicateLabel { .. })
        ));
        assert!(matches!(
            port.reference("G_1", "C_2"),
            Err(CompoundError::DuplicateLabel { .. })
        ));
        assert!(matches!(
            port.add(Atom::new("C", Point3::origin()), Some("C_1")),
            Err(CompoundError::DuplicateLabel { .. })
        ));
    }
}
