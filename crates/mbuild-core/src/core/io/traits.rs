use crate::core::models::compound::Compound;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Defines the interface for exporting a compound to a structure file format.
///
/// Implementors handle format-specific serialization; the path-based
/// convenience method is provided.
pub trait StructureWriter {
    /// Format-specific output switches.
    type Options;

    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Writes a compound to a writer.
    ///
    /// # Arguments
    ///
    /// * `compound` - The compound to write.
    /// * `options` - Format-specific output switches.
    /// * `writer` - The writer to output to.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(
        compound: &Compound,
        options: &Self::Options,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Writes a compound to a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(
        compound: &Compound,
        options: &Self::Options,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(compound, options, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
