use crate::core::transform::TransformError;
use thiserror::Error;

/// The kind of node on one side of an equivalence pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Atom,
    Compound,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Atom => write!(f, "atom"),
            NodeKind::Compound => write!(f, "compound"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompoundError {
    #[error("Invalid label '{label}': labels must be non-empty and must not contain '.'")]
    InvalidLabel { label: String },

    #[error("Label '{label}' already exists in '{parent}'")]
    DuplicateLabel { label: String, parent: String },

    #[error(
        "Equivalence pair {index} type mismatch: left side is a {left} and right side is a {right}"
    )]
    TypeMismatch {
        index: usize,
        left: NodeKind,
        right: NodeKind,
    },

    #[error("Equivalence pair {index}: atom '{label}' has no counterpart on the right side")]
    Correspondence { index: usize, label: String },

    #[error("No component found at path '{path}'")]
    ComponentNotFound { path: String },

    #[error("Alignment is geometrically ill-posed: {0}")]
    Transform(#[from] TransformError),
}
