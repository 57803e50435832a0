use crate::core::models::atom::Atom;
use crate::core::models::compound::Compound;
use crate::core::models::error::CompoundError;
use nalgebra::{Point3, Vector3};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// An atom entry of a building-block template.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AtomTemplate {
    pub label: String,
    #[serde(rename = "type")]
    pub atom_type: String,
    pub position: [f64; 3],
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct RotationTemplate {
    pub axis: [f64; 3],
    pub angle_degrees: f64,
}

/// A port entry: a fresh port rotated (about the origin) and then translated
/// into place, optionally referencing an atom of the same template.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PortTemplate {
    pub label: String,
    pub rotation: Option<RotationTemplate>,
    #[serde(default)]
    pub translation: [f64; 3],
    pub reference: Option<String>,
}

/// A building block described as data.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct CompoundTemplate {
    pub label: Option<String>,
    #[serde(default)]
    pub atoms: Vec<AtomTemplate>,
    #[serde(default)]
    pub ports: Vec<PortTemplate>,
}

#[derive(Debug, Error)]
pub enum TemplateLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

pub fn load_template(path: &Path) -> Result<CompoundTemplate, TemplateLoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| TemplateLoadError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| TemplateLoadError::Toml {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}

impl CompoundTemplate {
    /// Instantiates the template as a fresh compound.
    ///
    /// # Errors
    ///
    /// Returns [`CompoundError::DuplicateLabel`] for repeated labels and
    /// [`CompoundError::ComponentNotFound`] when a port references an atom
    /// the template does not define.
    pub fn build(&self) -> Result<Compound, CompoundError> {
        let mut compound = match &self.label {
            Some(label) => Compound::with_label(label),
            None => Compound::new(),
        };

        for atom in &self.atoms {
            let [x, y, z] = atom.position;
            compound.add(
                Atom::new(&atom.atom_type, Point3::new(x, y, z)).with_label(&atom.label),
                Some(&atom.label),
            )?;
        }

        for spec in &self.ports {
            let mut port = Compound::port();
            if let Some(rotation) = &spec.rotation {
                port.rotate_around_axis(
                    &Vector3::from(rotation.axis),
                    rotation.angle_degrees.to_radians(),
                )?;
            }
            port.translate(Vector3::from(spec.translation));

            if let Some(path) = &spec.reference {
                if compound.atom(path).is_none() {
                    return Err(CompoundError::ComponentNotFound { path: path.clone() });
                }
                let label = path.rsplit('.').next().unwrap_or(path);
                port.reference(label, path)?;
            }
            compound.add(port, Some(&spec.label))?;
        }

        Ok(compound)
    }
}
