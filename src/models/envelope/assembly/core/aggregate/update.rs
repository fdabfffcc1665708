//! Setting an assembly's aggregate properties by editing its only layer.

use thiserror::Error;
use uom::si::f64::{Length, ThermalConductivity};

use crate::{
    models::envelope::assembly::core::{
        catalog::{CatalogError, MaterialCatalog, Materials},
        material::{MaterialCategory, MaterialId, MaterialKind},
        stack::{LayerError, LayerStack},
    },
    support::{
        constraint::{Constrained, ConstraintError, StrictlyPositive},
        units::{HeatTransferCoefficient, ThermalInsulance},
    },
};

/// Errors raised when setting an aggregate property.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PropertyUpdateError {
    /// The stack's visible layers could not be resolved.
    #[error(transparent)]
    Layer(#[from] LayerError),

    /// Aggregate setters only apply to single-layer assemblies.
    #[error("assembly has {0} layers, setters need exactly one")]
    NotSingleLayer(usize),

    /// The sole layer's category has no attribute that sets this property.
    #[error("property cannot be set on a {0:?} layer")]
    NotApplicable(MaterialCategory),

    /// The target or the derived attribute is not physical.
    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    /// The material could not be updated.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Sets the conductance of a single-layer assembly.
///
/// Thickness-based layers get `thickness = k / target`; resistance-based
/// layers get `R = 1 / target`.
///
/// # Errors
///
/// Returns [`PropertyUpdateError`] if the stack is not a single resolvable
/// layer, the layer has no conductance attribute, or the target is not
/// strictly positive.
pub fn set_thermal_conductance(
    stack: &LayerStack,
    materials: &mut Materials,
    target: HeatTransferCoefficient,
) -> Result<(), PropertyUpdateError> {
    let target = StrictlyPositive::new(target)?.into_inner();
    let (id, kind) = sole_layer(stack, materials)?;

    let thickness_for = |k: Constrained<ThermalConductivity, StrictlyPositive>| {
        let thickness: Length = k.into_inner() / target;
        StrictlyPositive::new(thickness)
    };
    let resistance = || {
        let resistance: ThermalInsulance = target.recip();
        StrictlyPositive::new(resistance)
    };

    let updated = match kind {
        MaterialKind::StandardOpaque(mut m) => {
            m.thickness = thickness_for(m.conductivity)?;
            MaterialKind::StandardOpaque(m)
        }
        MaterialKind::RoofVegetation(mut m) => {
            m.thickness = thickness_for(m.conductivity)?;
            MaterialKind::RoofVegetation(m)
        }
        MaterialKind::StandardGlazing(mut m) => {
            m.thickness = thickness_for(m.conductivity)?;
            MaterialKind::StandardGlazing(m)
        }
        MaterialKind::RefractionExtinctionGlazing(mut m) => {
            m.thickness = thickness_for(m.conductivity)?;
            MaterialKind::RefractionExtinctionGlazing(m)
        }
        MaterialKind::Massless(mut m) => {
            m.resistance = resistance()?;
            MaterialKind::Massless(m)
        }
        MaterialKind::AirGap(mut m) => {
            m.resistance = resistance()?;
            MaterialKind::AirGap(m)
        }
        other => return Err(PropertyUpdateError::NotApplicable(other.category())),
    };

    tracing::debug!(
        assembly = %stack.id(),
        material = %id,
        conductance = target.value,
        "set conductance"
    );
    materials.modify(id, |kind| *kind = updated)?;
    Ok(())
}

/// Sets the resistance of a single-layer assembly.
///
/// # Errors
///
/// See [`set_thermal_conductance`].
pub fn set_thermal_resistance(
    stack: &LayerStack,
    materials: &mut Materials,
    target: ThermalInsulance,
) -> Result<(), PropertyUpdateError> {
    let target = StrictlyPositive::new(target)?.into_inner();
    set_thermal_conductance(stack, materials, target.recip())
}

/// Sets the U-factor of an assembly whose only layer is a simple glazing.
///
/// # Errors
///
/// Returns [`PropertyUpdateError`] if the stack is not a single simple
/// glazing or the target is not strictly positive.
pub fn set_u_factor(
    stack: &LayerStack,
    materials: &mut Materials,
    target: HeatTransferCoefficient,
) -> Result<(), PropertyUpdateError> {
    let target = StrictlyPositive::new(target)?;
    let (id, kind) = sole_layer(stack, materials)?;

    let MaterialKind::SimpleGlazing(mut glazing) = kind else {
        return Err(PropertyUpdateError::NotApplicable(kind.category()));
    };
    glazing.u_factor = target;

    materials.modify(id, |kind| *kind = MaterialKind::SimpleGlazing(glazing))?;
    Ok(())
}

fn sole_layer(
    stack: &LayerStack,
    catalog: &impl MaterialCatalog,
) -> Result<(MaterialId, MaterialKind), PropertyUpdateError> {
    let resolved = stack.resolve(catalog)?;
    let material = resolved
        .single()
        .ok_or(PropertyUpdateError::NotSingleLayer(resolved.len()))?;

    Ok((material.id(), *material.kind()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{
        models::envelope::assembly::core::{
            aggregate::{thermal_conductance, thermal_resistance, u_factor},
            stack::{AssemblyId, AssemblyKind},
            test_support::Fixture,
        },
        support::units::{heat_transfer_coefficient, thermal_insulance},
    };

    fn single(f: &Fixture, material: MaterialId) -> LayerStack {
        LayerStack::with_layers(
            AssemblyId::new(0),
            "Single",
            AssemblyKind::Standard,
            &[material],
            &f.materials,
        )
        .unwrap()
    }

    #[test]
    fn conductance_sets_thickness() {
        let mut f = Fixture::new();
        let stack = single(&f, f.brick);

        set_thermal_conductance(&stack, &mut f.materials, heat_transfer_coefficient(4.45))
            .unwrap();

        let MaterialKind::StandardOpaque(brick) = *f.materials.material(f.brick).unwrap().kind()
        else {
            panic!("brick changed category");
        };
        assert_relative_eq!(brick.thickness.into_inner().value, 0.2, max_relative = 1e-12);

        let resolved = stack.resolve(&f.materials).unwrap();
        assert_relative_eq!(
            thermal_conductance(&resolved).unwrap().value,
            4.45,
            max_relative = 1e-12
        );
    }

    #[test]
    fn resistance_requires_a_legal_single_layer() {
        let mut f = Fixture::new();
        let stack = LayerStack::rehydrate(
            AssemblyId::new(0),
            "Gap",
            AssemblyKind::Standard,
            vec![f.air_gap],
        );

        // A lone air gap is not a legal assembly, so it cannot be edited through one.
        assert!(matches!(
            set_thermal_resistance(&stack, &mut f.materials, thermal_insulance(0.2)),
            Err(PropertyUpdateError::Layer(_))
        ));

        let stack = single(&f, f.gypsum);
        set_thermal_resistance(&stack, &mut f.materials, thermal_insulance(0.5)).unwrap();
        let resolved = stack.resolve(&f.materials).unwrap();
        assert_relative_eq!(
            thermal_resistance(&resolved).unwrap().value,
            0.5,
            max_relative = 1e-12
        );
    }

    #[test]
    fn u_factor_for_simple_glazing_only() {
        let mut f = Fixture::new();
        let window = single(&f, f.simple_window);

        set_u_factor(&window, &mut f.materials, heat_transfer_coefficient(1.4)).unwrap();
        let resolved = window.resolve(&f.materials).unwrap();
        assert_relative_eq!(
            u_factor(&resolved, thermal_insulance(0.15)).unwrap().value,
            1.4
        );

        let glass = single(&f, f.glass);
        assert_eq!(
            set_u_factor(&glass, &mut f.materials, heat_transfer_coefficient(5.0)),
            Err(PropertyUpdateError::NotApplicable(
                MaterialCategory::StandardGlazing
            ))
        );
        assert_eq!(
            set_thermal_conductance(&window, &mut f.materials, heat_transfer_coefficient(5.0)),
            Err(PropertyUpdateError::NotApplicable(
                MaterialCategory::SimpleGlazing
            ))
        );
    }

    #[test]
    fn multi_layer_stacks_are_rejected() {
        let mut f = Fixture::new();
        let wall = LayerStack::with_layers(
            AssemblyId::new(0),
            "Wall",
            AssemblyKind::Standard,
            &[f.brick, f.gypsum],
            &f.materials,
        )
        .unwrap();

        assert_eq!(
            set_thermal_conductance(&wall, &mut f.materials, heat_transfer_coefficient(1.0)),
            Err(PropertyUpdateError::NotSingleLayer(2))
        );
    }

    #[test]
    fn targets_must_be_positive() {
        let mut f = Fixture::new();
        let stack = single(&f, f.brick);

        assert_eq!(
            set_thermal_conductance(&stack, &mut f.materials, heat_transfer_coefficient(0.0)),
            Err(PropertyUpdateError::Constraint(ConstraintError::Zero))
        );
        assert_eq!(
            set_thermal_resistance(&stack, &mut f.materials, thermal_insulance(-1.0)),
            Err(PropertyUpdateError::Constraint(ConstraintError::Negative))
        );
    }
}
