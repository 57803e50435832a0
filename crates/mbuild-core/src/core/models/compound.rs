use super::atom::Atom;
use super::bounding_box::BoundingBox;
use super::error::{CompoundError, NodeKind};
use super::identity::Identity;
use crate::core::transform::{CoordinateTransform, DegeneratePolicy};
use crate::core::utils::linalg::{Point, Vector};
use std::collections::BTreeMap;
use std::f64::consts::PI;
use tracing::{debug, trace};

/// A node of the composition tree.
#[derive(Debug, Clone)]
pub enum Component {
    Atom(Atom),
    Compound(Compound),
}

impl Component {
    /// The node's own label (explicit or synthesized).
    pub fn label(&self) -> String {
        match self {
            Component::Atom(atom) => atom.label(),
            Component::Compound(compound) => compound.label(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Component::Atom(_) => NodeKind::Atom,
            Component::Compound(_) => NodeKind::Compound,
        }
    }

    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Component::Atom(atom) => Some(atom),
            Component::Compound(_) => None,
        }
    }

    pub fn as_atom_mut(&mut self) -> Option<&mut Atom> {
        match self {
            Component::Atom(atom) => Some(atom),
            Component::Compound(_) => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Component::Compound(compound) => Some(compound),
            Component::Atom(_) => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Component::Compound(compound) => Some(compound),
            Component::Atom(_) => None,
        }
    }

    pub fn apply_transformation(&mut self, transform: &CoordinateTransform) {
        match self {
            Component::Atom(atom) => atom.apply_transformation(transform),
            Component::Compound(compound) => compound.apply_transformation(transform),
        }
    }
}

impl From<Atom> for Component {
    fn from(atom: Atom) -> Self {
        Component::Atom(atom)
    }
}

impl From<Compound> for Component {
    fn from(compound: Compound) -> Self {
        Component::Compound(compound)
    }
}

/// A borrowed node used on either side of an equivalence pair.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Atom(&'a Atom),
    Compound(&'a Compound),
}

impl NodeRef<'_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::Atom(_) => NodeKind::Atom,
            NodeRef::Compound(_) => NodeKind::Compound,
        }
    }
}

impl<'a> From<&'a Atom> for NodeRef<'a> {
    fn from(atom: &'a Atom) -> Self {
        NodeRef::Atom(atom)
    }
}

impl<'a> From<&'a Compound> for NodeRef<'a> {
    fn from(compound: &'a Compound) -> Self {
        NodeRef::Compound(compound)
    }
}

impl<'a> From<&'a Component> for NodeRef<'a> {
    fn from(component: &'a Component) -> Self {
        match component {
            Component::Atom(atom) => NodeRef::Atom(atom),
            Component::Compound(compound) => NodeRef::Compound(compound),
        }
    }
}

/// Distinguishes plain assemblies from docking ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompoundKind {
    #[default]
    Assembly,
    Port,
}

impl CompoundKind {
    fn type_name(&self) -> &'static str {
        match self {
            CompoundKind::Assembly => "Compound",
            CompoundKind::Port => "Port",
        }
    }
}

/// A labeled composite node owning an ordered set of children.
///
/// Children are keyed by label and iterated in label order, so every
/// traversal (and therefore every export) is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Compound {
    label: Option<String>,
    identity: Identity,
    kind: CompoundKind,
    children: BTreeMap<String, Component>,
    /// Non-owning cross references (label → path relative to the compound
    /// that directly contains this one). Only ports use them.
    pub(super) references: BTreeMap<String, String>,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(label: &str) -> Self {
        Self {
            label: Some(label.to_string()),
            ..Self::default()
        }
    }

    pub(super) fn with_kind(kind: CompoundKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// The explicit label, or `<TypeName>_<identity>` when none was set.
    pub fn label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("{}_{}", self.kind.type_name(), self.identity.value()),
        }
    }

    pub fn set_label(&mut self, label: &str) {
        self.label = Some(label.to_string());
    }

    pub fn kind(&self) -> CompoundKind {
        self.kind
    }

    pub fn is_port(&self) -> bool {
        self.kind == CompoundKind::Port
    }

    /// Adds `child` under `label`, or under the child's own label when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`CompoundError::InvalidLabel`] for an empty label or one
    /// containing `.`, and [`CompoundError::DuplicateLabel`] if an immediate
    /// child already uses the label. The compound is left unchanged in both
    /// cases.
    pub fn add(
        &mut self,
        child: impl Into<Component>,
        label: Option<&str>,
    ) -> Result<(), CompoundError> {
        let child = child.into();
        let label = match label {
            Some(label) => label.to_string(),
            None => child.label(),
        };
        validate_label(&label)?;
        if self.children.contains_key(&label) || self.references.contains_key(&label) {
            return Err(CompoundError::DuplicateLabel {
                label,
                parent: self.label(),
            });
        }
        trace!("Adding {} '{}' to '{}'", child.kind(), label, self.label());
        self.children.insert(label, child);
        Ok(())
    }

    pub fn get(&self, label: &str) -> Option<&Component> {
        self.children.get(label)
    }

    pub fn get_mut(&mut self, label: &str) -> Option<&mut Component> {
        self.children.get_mut(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.children.contains_key(label)
    }

    /// Immediate children in label order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Component)> {
        self.children.iter().map(|(label, child)| (label.as_str(), child))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Resolves a dotted label path such as `"body_2.male_port"`.
    ///
    /// Returns `None` when any segment is missing, or when a non-final
    /// segment names an atom.
    pub fn component(&self, path: &str) -> Option<&Component> {
        match path.split_once('.') {
            Some((head, rest)) => match self.children.get(head)? {
                Component::Compound(compound) => compound.component(rest),
                Component::Atom(_) => None,
            },
            None => self.children.get(path),
        }
    }

    pub fn component_mut(&mut self, path: &str) -> Option<&mut Component> {
        match path.split_once('.') {
            Some((head, rest)) => match self.children.get_mut(head)? {
                Component::Compound(compound) => compound.component_mut(rest),
                Component::Atom(_) => None,
            },
            None => self.children.get_mut(path),
        }
    }

    pub fn atom(&self, path: &str) -> Option<&Atom> {
        self.component(path)?.as_atom()
    }

    pub fn compound(&self, path: &str) -> Option<&Compound> {
        self.component(path)?.as_compound()
    }

    pub fn compound_mut(&mut self, path: &str) -> Option<&mut Compound> {
        self.component_mut(path)?.as_compound_mut()
    }

    /// Every atom reachable from this compound, keyed by dotted path.
    pub fn atoms(&self) -> BTreeMap<String, &Atom> {
        let mut atoms = BTreeMap::new();
        self.collect_atoms("", &mut atoms);
        atoms
    }

    fn collect_atoms<'a>(&'a self, prefix: &str, atoms: &mut BTreeMap<String, &'a Atom>) {
        for (label, child) in &self.children {
            match child {
                Component::Atom(atom) => {
                    atoms.insert(format!("{prefix}{label}"), atom);
                }
                Component::Compound(compound) => {
                    compound.collect_atoms(&format!("{prefix}{label}."), atoms);
                }
            }
        }
    }

    /// Positions of every atom, keyed by dotted path.
    pub fn positions(&self) -> BTreeMap<String, Point> {
        self.atoms()
            .into_iter()
            .map(|(label, atom)| (label, atom.position))
            .collect()
    }

    /// Axis-aligned box around the atoms, skipping ghosts if `exclude_ghost`.
    ///
    /// Returns `None` when no atom qualifies.
    pub fn boundingbox(&self, exclude_ghost: bool) -> Option<BoundingBox> {
        BoundingBox::enclosing(
            self.atoms()
                .into_values()
                .filter(|atom| !(exclude_ghost && atom.is_ghost()))
                .map(|atom| atom.position),
        )
    }

    /// Applies `transform` to every descendant atom.
    pub fn apply_transformation(&mut self, transform: &CoordinateTransform) {
        for child in self.children.values_mut() {
            child.apply_transformation(transform);
        }
    }

    /// Computes the rigid transform carrying this compound's reference points
    /// onto the given counterparts.
    ///
    /// The left side of each pair is a dotted path resolved inside `self`
    /// (the empty path denotes `self`); the right side is any node outside
    /// it. See [`create_equivalence_transform`] for the pairing rules.
    pub fn create_equivalence_transform(
        &self,
        equivalences: &[(&str, NodeRef<'_>)],
    ) -> Result<CoordinateTransform, CompoundError> {
        self.create_equivalence_transform_with_policy(equivalences, DegeneratePolicy::default())
    }

    pub fn create_equivalence_transform_with_policy(
        &self,
        equivalences: &[(&str, NodeRef<'_>)],
        policy: DegeneratePolicy,
    ) -> Result<CoordinateTransform, CompoundError> {
        let pairs = equivalences
            .iter()
            .map(|&(path, right)| Ok((self.resolve(path)?, right)))
            .collect::<Result<Vec<_>, CompoundError>>()?;
        create_equivalence_transform(&pairs, policy)
    }

    /// Moves this whole compound so that its reference points land on the
    /// given counterparts, returning `self` for chaining.
    pub fn transform(
        &mut self,
        equivalences: &[(&str, NodeRef<'_>)],
    ) -> Result<&mut Self, CompoundError> {
        self.transform_with_policy(equivalences, DegeneratePolicy::default())
    }

    pub fn transform_with_policy(
        &mut self,
        equivalences: &[(&str, NodeRef<'_>)],
        policy: DegeneratePolicy,
    ) -> Result<&mut Self, CompoundError> {
        let transform = self.create_equivalence_transform_with_policy(equivalences, policy)?;
        debug!(
            "Transforming '{}' with rotation {:?} and translation {:?}",
            self.label(),
            transform.rotation_matrix(),
            transform.translation_vector()
        );
        self.apply_transformation(&transform);
        Ok(self)
    }

    pub fn translate(&mut self, offset: Vector) -> &mut Self {
        self.apply_transformation(&CoordinateTransform::translation(offset));
        self
    }

    /// Rotates the compound about `axis` through the origin.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::ZeroAxis`](crate::core::transform::TransformError::ZeroAxis)
    /// (wrapped) for a zero-length axis;
    /// nothing moves in that case.
    pub fn rotate_around_axis(
        &mut self,
        axis: &Vector,
        angle_radians: f64,
    ) -> Result<&mut Self, CompoundError> {
        let rotation = CoordinateTransform::rotation(axis, angle_radians)?;
        self.apply_transformation(&rotation);
        Ok(self)
    }

    pub fn rotate_around_x(&mut self, angle_radians: f64) -> &mut Self {
        self.apply_transformation(&CoordinateTransform::rotation_about(
            &Vector::x_axis(),
            angle_radians,
        ));
        self
    }

    pub fn rotate_around_y(&mut self, angle_radians: f64) -> &mut Self {
        self.apply_transformation(&CoordinateTransform::rotation_about(
            &Vector::y_axis(),
            angle_radians,
        ));
        self
    }

    pub fn rotate_around_z(&mut self, angle_radians: f64) -> &mut Self {
        self.apply_transformation(&CoordinateTransform::rotation_about(
            &Vector::z_axis(),
            angle_radians,
        ));
        self
    }

    /// Half turn about z, the usual flip between a port and its mate.
    pub fn flip(&mut self) -> &mut Self {
        self.rotate_around_z(PI)
    }

    fn resolve(&self, path: &str) -> Result<NodeRef<'_>, CompoundError> {
        if path.is_empty() {
            return Ok(NodeRef::Compound(self));
        }
        self.component(path)
            .map(NodeRef::from)
            .ok_or_else(|| CompoundError::ComponentNotFound {
                path: path.to_string(),
            })
    }
}

/// Labels are path segments: non-empty and free of the `.` separator.
pub(super) fn validate_label(label: &str) -> Result<(), CompoundError> {
    if label.is_empty() || label.contains('.') {
        return Err(CompoundError::InvalidLabel {
            label: label.to_string(),
        });
    }
    Ok(())
}

/// Computes the rigid transform mapping the left nodes onto the right nodes.
///
/// Each pair must be (atom, atom) or (compound, compound). An atom pair
/// contributes one correspondence; a compound pair contributes one per atom
/// of the left compound, matched by dotted label inside the right compound.
///
/// # Errors
///
/// - [`CompoundError::TypeMismatch`] for a mixed pair.
/// - [`CompoundError::Correspondence`] when a left atom label has no atom
///   counterpart on the right.
/// - [`CompoundError::Transform`] when the collected points do not determine
///   a rigid motion under `policy`.
pub fn create_equivalence_transform(
    equivalences: &[(NodeRef<'_>, NodeRef<'_>)],
    policy: DegeneratePolicy,
) -> Result<CoordinateTransform, CompoundError> {
    let mut self_points = Vec::new();
    let mut other_points = Vec::new();

    for (index, (left, right)) in equivalences.iter().enumerate() {
        match (left, right) {
            (NodeRef::Atom(a), NodeRef::Atom(b)) => {
                self_points.push(a.position);
                other_points.push(b.position);
            }
            (NodeRef::Compound(a), NodeRef::Compound(b)) => {
                for (label, atom) in a.atoms() {
                    let counterpart =
                        b.atom(&label)
                            .ok_or_else(|| CompoundError::Correspondence {
                                index,
                                label: label.clone(),
                            })?;
                    trace!("Pair {}: matched '{}'", index, label);
                    self_points.push(atom.position);
                    other_points.push(counterpart.position);
                }
            }
            _ => {
                return Err(CompoundError::TypeMismatch {
                    index,
                    left: left.kind(),
                    right: right.kind(),
                });
            }
        }
    }

    debug!(
        "Computing equivalence transform from {} correspondence points",
        self_points.len()
    );
    Ok(CoordinateTransform::compute_with_policy(
        &self_points,
        &other_points,
        policy,
    )?)
}
