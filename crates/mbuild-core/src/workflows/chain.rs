use super::blocks::{alkane_body, alkane_tail};
use super::dock::dock;
use crate::core::models::compound::Compound;
use crate::core::models::error::CompoundError;
use thiserror::Error;
use tracing::{info, instrument};

pub const MIN_CHAIN_LENGTH: usize = 2;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("Chain length must be at least {MIN_CHAIN_LENGTH}, but {0} was requested")]
    TooShort(usize),

    #[error("Failed to assemble chain: {0}")]
    Compound(#[from] CompoundError),
}

/// Recipe for a linear chain: a head unit, `length - 2` body units and a
/// tail unit, each docked onto the previous unit's exit port.
#[derive(Debug, Clone)]
pub struct ChainSpec {
    pub label: String,
    pub length: usize,
    /// First unit; defaults to a copy of `body`.
    pub head: Option<Compound>,
    pub body: Compound,
    pub tail: Compound,
    /// Port each new unit docks with.
    pub entry_port: String,
    /// Port of the previous unit that receives the next one.
    pub exit_port: String,
    pub head_label: String,
    pub body_prefix: String,
    pub tail_label: String,
}

impl ChainSpec {
    pub fn new(body: Compound, tail: Compound, length: usize) -> Self {
        Self {
            label: "Chain".to_string(),
            length,
            head: None,
            body,
            tail,
            entry_port: "male_port".to_string(),
            exit_port: "female_port".to_string(),
            head_label: "bottom".to_string(),
            body_prefix: "body".to_string(),
            tail_label: "top".to_string(),
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn head(mut self, head: Compound) -> Self {
        self.head = Some(head);
        self
    }

    pub fn ports(mut self, entry: &str, exit: &str) -> Self {
        self.entry_port = entry.to_string();
        self.exit_port = exit.to_string();
        self
    }

    pub fn unit_labels(mut self, head: &str, body_prefix: &str, tail: &str) -> Self {
        self.head_label = head.to_string();
        self.body_prefix = body_prefix.to_string();
        self.tail_label = tail.to_string();
        self
    }
}

/// Assembles the chain described by `spec`.
///
/// Body units are labeled `<body_prefix>_2` through
/// `<body_prefix>_<length - 1>`, so unit numbers match carbon positions in
/// an alkane.
#[instrument(skip_all, name = "chain_assembly", fields(length = spec.length))]
pub fn build_chain(spec: &ChainSpec) -> Result<Compound, ChainError> {
    if spec.length < MIN_CHAIN_LENGTH {
        return Err(ChainError::TooShort(spec.length));
    }

    let mut chain = Compound::with_label(&spec.label);
    let head = spec.head.as_ref().unwrap_or(&spec.body).clone();
    chain.add(head, Some(&spec.head_label))?;

    let mut last = spec.head_label.clone();
    for index in 2..spec.length {
        let label = format!("{}_{}", spec.body_prefix, index);
        dock(
            &mut chain,
            spec.body.clone(),
            &spec.entry_port,
            &format!("{}.{}", last, spec.exit_port),
            &label,
        )?;
        last = label;
    }

    dock(
        &mut chain,
        spec.tail.clone(),
        &spec.entry_port,
        &format!("{}.{}", last, spec.exit_port),
        &spec.tail_label,
    )?;

    info!(
        "Assembled '{}' from {} units ({} atoms).",
        spec.label,
        spec.length,
        chain.atoms().len()
    );
    Ok(chain)
}

/// Builds an n-alkane from the built-in CH2 and CH3 blocks.
pub fn build_alkane(length: usize) -> Result<Compound, ChainError> {
    let spec = ChainSpec::new(alkane_body()?, alkane_tail()?, length)
        .label(&format!("Alkane_{length}"))
        .unit_labels("bottom_ch2", "body", "top_ch3");
    build_chain(&spec)
}
