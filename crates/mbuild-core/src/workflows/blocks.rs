//! Built-in building blocks.
//!
//! Every block is built with its carbon at the origin and the chain axis
//! along +y. Entry ports (`male_port`, `up`) sit below the carbon; exit ports
//! (`female_port`, `down`) are turned so that a docked neighbour continues
//! the chain.

use super::dock::dock;
use crate::core::models::atom::Atom;
use crate::core::models::compound::Compound;
use crate::core::models::error::CompoundError;
use nalgebra::{Point3, Vector3};
use std::f64::consts::PI;

/// Half of a C–C single bond, in Angstroms.
pub const HALF_CC_BOND: f64 = 0.77;

/// Port offset used by the methyl block (half of its C–C distance).
pub const METHYL_PORT_OFFSET: f64 = 0.7;

// Tetrahedral hydrogens at 1.09 Å, pointing away from a bond along -y.
const METHYL_HYDROGENS: [[f64; 3]; 3] = [
    [1.028, 0.363, 0.0],
    [-0.514, 0.363, 0.890],
    [-0.514, 0.363, -0.890],
];

// Methylene hydrogens at 1.09 Å, perpendicular to the chain axis.
const METHYLENE_HYDROGENS: [[f64; 3]; 2] = [[0.63, 0.0, 0.89], [-0.63, 0.0, 0.89]];

fn add_carbon_with_hydrogens(
    compound: &mut Compound,
    hydrogens: &[[f64; 3]],
) -> Result<(), CompoundError> {
    compound.add(Atom::new("C", Point3::origin()), Some("C_1"))?;
    for (i, [x, y, z]) in hydrogens.iter().enumerate() {
        compound.add(Atom::new("H", Point3::new(*x, *y, *z)), Some(&format!("H_{}", i + 1)))?;
    }
    Ok(())
}

fn entry_port() -> Result<Compound, CompoundError> {
    let mut port = Compound::port();
    port.translate(Vector3::new(0.0, -HALF_CC_BOND, 0.0))
        .reference("C_1", "C_1")?;
    Ok(port)
}

fn exit_port() -> Result<Compound, CompoundError> {
    let mut port = Compound::port();
    port.rotate_around_y(PI)
        .translate(Vector3::new(0.0, HALF_CC_BOND, 0.0))
        .reference("C_1", "C_1")?;
    Ok(port)
}

/// CH3 with two ports at the same site below the carbon: `down`, and `up`
/// turned half way about z so that `up` of one methyl docks onto `down` of
/// another.
pub fn methyl() -> Result<Compound, CompoundError> {
    let mut methyl = Compound::with_label("Methyl");
    add_carbon_with_hydrogens(&mut methyl, &METHYL_HYDROGENS)?;

    let mut up = Compound::port();
    up.rotate_around_z(PI)
        .translate(Vector3::new(0.0, -METHYL_PORT_OFFSET, 0.0))
        .reference("C_1", "C_1")?;
    methyl.add(up, Some("up"))?;

    let mut down = Compound::port();
    down.translate(Vector3::new(0.0, -METHYL_PORT_OFFSET, 0.0))
        .reference("C_1", "C_1")?;
    methyl.add(down, Some("down"))?;

    Ok(methyl)
}

/// Two methyls joined through their `up` and `down` ports.
pub fn ethane() -> Result<Compound, CompoundError> {
    let mut ethane = Compound::with_label("Ethane");
    ethane.add(methyl()?, Some("methyl_1"))?;
    dock(&mut ethane, methyl()?, "up", "methyl_1.down", "methyl_2")?;
    Ok(ethane)
}

/// CH2 chain unit with `male_port` below and `female_port` above the carbon.
pub fn alkane_body() -> Result<Compound, CompoundError> {
    let mut body = Compound::with_label("AlkaneBody");
    add_carbon_with_hydrogens(&mut body, &METHYLENE_HYDROGENS)?;
    body.add(entry_port()?, Some("male_port"))?;
    body.add(exit_port()?, Some("female_port"))?;
    Ok(body)
}

/// CH3 chain terminator with a single `male_port`.
pub fn alkane_tail() -> Result<Compound, CompoundError> {
    let mut tail = Compound::with_label("AlkaneTail");
    add_carbon_with_hydrogens(&mut tail, &METHYL_HYDROGENS)?;
    tail.add(entry_port()?, Some("male_port"))?;
    Ok(tail)
}
