pub mod alkane;
pub mod chain;
pub mod info;

use crate::config::BuildConfig;
use crate::error::Result;
use mbuild::core::io::traits::StructureWriter;
use mbuild::core::io::xyz::{XyzFile, XyzOptions};
use mbuild::core::models::compound::Compound;
use tracing::info;

fn write_structure(compound: &Compound, config: &BuildConfig) -> Result<()> {
    let options = XyzOptions {
        include_ghosts: config.include_ports,
    };
    info!("Writing '{}' to {:?}", compound.label(), &config.output);
    XyzFile::write_to_path(compound, &options, &config.output)?;
    println!(
        "✓ '{}' ({} atoms) written to: {}",
        compound.label(),
        compound.atoms().len(),
        config.output.display()
    );
    Ok(())
}
