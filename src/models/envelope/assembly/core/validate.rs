//! Structural rules for ordered material layers.
//!
//! [`validate_layers`] is a pure function over category tags: it never sees a
//! stack or a catalog, and it never mutates anything. Layer stacks call it on
//! the proposed sequence before committing any change.
//!
//! Position 0 is the first layer as supplied (the exterior-most layer).

use thiserror::Error;

use super::material::{Family, MaterialCategory};

/// A reason why a layer sequence is not a legal assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayerRuleViolation {
    /// Layers from more than one family appear in the same sequence.
    #[error("layers mix opaque, fenestration and partition materials")]
    MixedFamily,

    /// An air gap is first, or directly follows another air gap.
    #[error("air gap at layer {0} must directly follow a non-air-gap layer")]
    InvalidAirGapPlacement(usize),

    /// The last layer is an air gap.
    #[error("an opaque assembly must not end with an air gap")]
    TrailingAirGap,

    /// A vegetated layer appears anywhere but first.
    #[error("roof vegetation at layer {0} must be the first layer")]
    InvalidVegetationPlacement(usize),

    /// A simple glazing shares the sequence with other glazing or gas layers.
    #[error("a simple glazing must be the only layer of its assembly")]
    SimpleGlazingNotExclusive,

    /// A gas layer is not enclosed by glazing on both sides.
    #[error("gas layer at layer {0} must be enclosed by glazing on both sides")]
    UnenclosedGasLayer(usize),

    /// A partition assembly has more than one layer.
    #[error("a partition assembly must have exactly one layer")]
    MultiplePartitionLayers,
}

/// Checks an ordered sequence of material categories and classifies it.
///
/// An empty sequence is legal and has family [`Family::Empty`].
///
/// # Errors
///
/// Returns the first [`LayerRuleViolation`] found, scanning in stack order.
pub fn validate_layers(categories: &[MaterialCategory]) -> Result<Family, LayerRuleViolation> {
    let Some(first) = categories.first() else {
        return Ok(Family::Empty);
    };

    let family = first.family();
    if categories.iter().any(|c| c.family() != family) {
        return Err(LayerRuleViolation::MixedFamily);
    }

    match family {
        Family::Opaque => check_opaque(categories)?,
        Family::Fenestration => check_fenestration(categories)?,
        Family::Partition => check_partition(categories)?,
        Family::Empty => unreachable!("materials always belong to a concrete family"),
    }

    Ok(family)
}

fn check_opaque(categories: &[MaterialCategory]) -> Result<(), LayerRuleViolation> {
    let mut previous = None;

    for (index, &category) in categories.iter().enumerate() {
        match category {
            MaterialCategory::AirGap => {
                if matches!(previous, None | Some(MaterialCategory::AirGap)) {
                    return Err(LayerRuleViolation::InvalidAirGapPlacement(index));
                }
            }
            MaterialCategory::RoofVegetation if index > 0 => {
                return Err(LayerRuleViolation::InvalidVegetationPlacement(index));
            }
            _ => {}
        }
        previous = Some(category);
    }

    if previous == Some(MaterialCategory::AirGap) {
        return Err(LayerRuleViolation::TrailingAirGap);
    }
    Ok(())
}

fn check_fenestration(categories: &[MaterialCategory]) -> Result<(), LayerRuleViolation> {
    let has_simple = categories.contains(&MaterialCategory::SimpleGlazing);
    if has_simple && categories.len() > 1 {
        return Err(LayerRuleViolation::SimpleGlazingNotExclusive);
    }

    for (index, &category) in categories.iter().enumerate() {
        if category != MaterialCategory::GasLayer {
            continue;
        }

        let (before, after) = categories.split_at(index);
        let follows_non_gas = before
            .last()
            .is_some_and(|&c| c != MaterialCategory::GasLayer);
        let glazing_before = before.iter().any(|c| c.is_glazing());
        let glazing_after = after[1..].iter().any(|c| c.is_glazing());

        if !(follows_non_gas && glazing_before && glazing_after) {
            return Err(LayerRuleViolation::UnenclosedGasLayer(index));
        }
    }
    Ok(())
}

fn check_partition(categories: &[MaterialCategory]) -> Result<(), LayerRuleViolation> {
    if categories.len() > 1 {
        return Err(LayerRuleViolation::MultiplePartitionLayers);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use MaterialCategory::{
        AirGap, GasLayer, Massless, ModelPartition, RefractionExtinctionGlazing, RoofVegetation,
        SimpleGlazing, StandardGlazing, StandardOpaque,
    };

    #[test]
    fn empty_sequence_is_legal() {
        assert_eq!(validate_layers(&[]), Ok(Family::Empty));
    }

    #[test]
    fn classifies_families() {
        assert_eq!(
            validate_layers(&[StandardOpaque, AirGap, Massless]),
            Ok(Family::Opaque)
        );
        assert_eq!(
            validate_layers(&[StandardGlazing, GasLayer, RefractionExtinctionGlazing]),
            Ok(Family::Fenestration)
        );
        assert_eq!(validate_layers(&[ModelPartition]), Ok(Family::Partition));
    }

    #[test]
    fn rejects_mixed_families() {
        assert_eq!(
            validate_layers(&[StandardOpaque, StandardGlazing]),
            Err(LayerRuleViolation::MixedFamily)
        );
        assert_eq!(
            validate_layers(&[ModelPartition, StandardOpaque]),
            Err(LayerRuleViolation::MixedFamily)
        );
    }

    #[test]
    fn air_gap_placement() {
        assert_eq!(
            validate_layers(&[AirGap]),
            Err(LayerRuleViolation::InvalidAirGapPlacement(0))
        );
        assert_eq!(
            validate_layers(&[AirGap, StandardOpaque]),
            Err(LayerRuleViolation::InvalidAirGapPlacement(0))
        );
        assert_eq!(
            validate_layers(&[StandardOpaque, AirGap, AirGap, StandardOpaque]),
            Err(LayerRuleViolation::InvalidAirGapPlacement(2))
        );
        assert_eq!(
            validate_layers(&[StandardOpaque, AirGap]),
            Err(LayerRuleViolation::TrailingAirGap)
        );
        assert!(
            validate_layers(&[StandardOpaque, AirGap, StandardOpaque, AirGap, Massless]).is_ok()
        );
    }

    #[test]
    fn vegetation_must_be_first() {
        assert_eq!(
            validate_layers(&[StandardOpaque, RoofVegetation]),
            Err(LayerRuleViolation::InvalidVegetationPlacement(1))
        );
        assert!(validate_layers(&[RoofVegetation, StandardOpaque]).is_ok());
        assert!(validate_layers(&[RoofVegetation]).is_ok());
    }

    #[test]
    fn simple_glazing_is_exclusive() {
        assert!(validate_layers(&[SimpleGlazing]).is_ok());
        assert_eq!(
            validate_layers(&[SimpleGlazing, GasLayer]),
            Err(LayerRuleViolation::SimpleGlazingNotExclusive)
        );
        assert_eq!(
            validate_layers(&[StandardGlazing, SimpleGlazing]),
            Err(LayerRuleViolation::SimpleGlazingNotExclusive)
        );
    }

    #[test]
    fn gas_layers_are_enclosed() {
        assert!(validate_layers(&[StandardGlazing, GasLayer, StandardGlazing]).is_ok());
        assert!(
            validate_layers(&[
                StandardGlazing,
                GasLayer,
                StandardGlazing,
                GasLayer,
                StandardGlazing
            ])
            .is_ok()
        );
        assert_eq!(
            validate_layers(&[StandardGlazing, GasLayer]),
            Err(LayerRuleViolation::UnenclosedGasLayer(1))
        );
        assert_eq!(
            validate_layers(&[GasLayer, StandardGlazing]),
            Err(LayerRuleViolation::UnenclosedGasLayer(0))
        );
        assert_eq!(
            validate_layers(&[StandardGlazing, GasLayer, GasLayer, StandardGlazing]),
            Err(LayerRuleViolation::UnenclosedGasLayer(2))
        );
    }

    #[test]
    fn single_partition_layer() {
        assert_eq!(
            validate_layers(&[ModelPartition, ModelPartition]),
            Err(LayerRuleViolation::MultiplePartitionLayers)
        );
    }
}
