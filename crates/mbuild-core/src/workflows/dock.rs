use crate::core::models::compound::{Compound, NodeRef};
use crate::core::models::error::CompoundError;
use tracing::{debug, instrument};

/// Aligns `piece` so that its `piece_port` lands on the port at
/// `anchor_port` inside `assembly`, then adds the moved piece to the
/// assembly under `label`.
///
/// The whole piece moves, not just its port. The anchor may be any node
/// whose kind matches the piece's port (normally both are ports).
///
/// # Errors
///
/// - [`CompoundError::DuplicateLabel`] if `label` is already taken; this is
///   checked before anything moves.
/// - [`CompoundError::ComponentNotFound`] if either port path is missing.
/// - Any error from the alignment itself.
#[instrument(skip_all, fields(label = %label, anchor = %anchor_port))]
pub fn dock(
    assembly: &mut Compound,
    mut piece: Compound,
    piece_port: &str,
    anchor_port: &str,
    label: &str,
) -> Result<(), CompoundError> {
    if assembly.contains(label) {
        return Err(CompoundError::DuplicateLabel {
            label: label.to_string(),
            parent: assembly.label(),
        });
    }

    let anchor = assembly
        .component(anchor_port)
        .ok_or_else(|| CompoundError::ComponentNotFound {
            path: anchor_port.to_string(),
        })?;
    piece.transform(&[(piece_port, NodeRef::from(anchor))])?;

    debug!("Docked '{}' onto '{}'", label, anchor_port);
    assembly.add(piece, Some(label))
}
