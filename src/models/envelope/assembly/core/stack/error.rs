use thiserror::Error;

use crate::models::envelope::assembly::core::{
    material::{Family, MaterialId},
    validate::LayerRuleViolation,
};

/// Errors returned by layer stack mutations.
///
/// A stack that returns any of these is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayerError {
    /// The proposed layers break a structural rule.
    #[error(transparent)]
    Rule(#[from] LayerRuleViolation),

    /// The index does not address a layer once null layers are compacted out.
    #[error("layer index {index} is out of range for {len} layers")]
    IndexOutOfRange { index: usize, len: usize },

    /// The change would leave fewer layers than the assembly kind allows.
    #[error("assembly needs at least {min} layers, change leaves {proposed}")]
    BelowMinimumLayerCount { min: usize, proposed: usize },

    /// A referenced material does not exist.
    #[error("{0} not found")]
    MaterialNotFound(MaterialId),

    /// The material belongs to the wrong family for this operation.
    #[error("expected a {expected} material, found a {found} one")]
    FamilyMismatch { expected: Family, found: Family },
}
