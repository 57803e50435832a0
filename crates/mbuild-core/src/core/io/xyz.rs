use super::traits::StructureWriter;
use crate::core::models::compound::Compound;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XyzOptions {
    /// Also write ghost (port marker) atoms.
    pub include_ghosts: bool,
}

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Plain XYZ export: atom count, a comment line holding the compound label,
/// then one `type x y z` line per atom in path order.
pub struct XyzFile;

impl StructureWriter for XyzFile {
    type Options = XyzOptions;
    type Error = XyzError;

    fn write_to(
        compound: &Compound,
        options: &Self::Options,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        let atoms: Vec<_> = compound
            .atoms()
            .into_values()
            .filter(|atom| options.include_ghosts || !atom.is_ghost())
            .collect();

        writeln!(writer, "{}", atoms.len())?;
        writeln!(writer, "{}", compound.label())?;
        for atom in atoms {
            writeln!(
                writer,
                "{}\t{:.6}\t{:.6}\t{:.6}",
                atom.atom_type, atom.position.x, atom.position.y, atom.position.z
            )?;
        }
        Ok(())
    }
}
