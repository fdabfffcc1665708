//! Whole-assembly thermal and optical properties.
//!
//! Every aggregate is a pure function of a stack's [`ResolvedLayers`]. A
//! property that does not apply to the assembly's family or shape is `None`,
//! which is an expected outcome rather than an error.

mod film;
mod update;

pub use film::FilmResistance;
pub use update::{
    PropertyUpdateError, set_thermal_conductance, set_thermal_resistance, set_u_factor,
};

use super::{
    material::{Family, Material, MaterialCategory, MaterialKind},
    stack::ResolvedLayers,
};
use crate::support::units::{
    ArealHeatCapacity, HeatTransferCoefficient, ThermalInsulance, areal_heat_capacity,
    thermal_insulance,
};

/// Every aggregate property of one assembly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalSummary {
    pub family: Family,
    pub thermal_conductance: Option<HeatTransferCoefficient>,
    pub thermal_resistance: Option<ThermalInsulance>,
    pub heat_capacity: Option<ArealHeatCapacity>,
    pub u_factor: Option<HeatTransferCoefficient>,
    pub visible_transmittance: Option<f64>,
    pub interior_visible_absorptance: Option<f64>,
    pub exterior_visible_absorptance: Option<f64>,
}

impl ThermalSummary {
    /// Computes every aggregate, using `film_resistance` for the U-factor.
    #[must_use]
    pub fn new(layers: &ResolvedLayers<'_>, film_resistance: ThermalInsulance) -> Self {
        Self {
            family: layers.family(),
            thermal_conductance: thermal_conductance(layers),
            thermal_resistance: thermal_resistance(layers),
            heat_capacity: heat_capacity(layers),
            u_factor: u_factor(layers, film_resistance),
            visible_transmittance: visible_transmittance(layers),
            interior_visible_absorptance: interior_visible_absorptance(layers),
            exterior_visible_absorptance: exterior_visible_absorptance(layers),
        }
    }
}

/// Surface-to-surface conductance of the assembly.
///
/// An opaque assembly with one layer reports that layer's conductance; with
/// several layers it reports `1 / Σ Rᵢ`. A fenestration assembly has a
/// conductance only when its sole layer is a glass pane.
#[must_use]
pub fn thermal_conductance(layers: &ResolvedLayers<'_>) -> Option<HeatTransferCoefficient> {
    match layers.family() {
        Family::Opaque => match layers.materials() {
            [] => None,
            [only] => only.thermal_conductance(),
            many => {
                let total = many.iter().try_fold(thermal_insulance(0.0), |sum, m| {
                    Some(sum + m.thermal_resistance()?)
                })?;
                Some(total.recip())
            }
        },
        Family::Fenestration => layers
            .single()
            .filter(|m| {
                matches!(
                    m.category(),
                    MaterialCategory::StandardGlazing
                        | MaterialCategory::RefractionExtinctionGlazing
                )
            })
            .and_then(Material::thermal_conductance),
        Family::Partition | Family::Empty => None,
    }
}

/// Surface-to-surface resistance, always the reciprocal of [`thermal_conductance`].
#[must_use]
pub fn thermal_resistance(layers: &ResolvedLayers<'_>) -> Option<ThermalInsulance> {
    thermal_conductance(layers).map(|c| -> ThermalInsulance { c.recip() })
}

/// Sum of the layers' heat capacities, for opaque assemblies only.
///
/// Layers without mass contribute nothing.
#[must_use]
pub fn heat_capacity(layers: &ResolvedLayers<'_>) -> Option<ArealHeatCapacity> {
    if layers.family() != Family::Opaque {
        return None;
    }

    Some(
        layers
            .materials()
            .iter()
            .filter_map(|m| m.heat_capacity())
            .fold(areal_heat_capacity(0.0), |sum, c| sum + c),
    )
}

/// Air-to-air U-factor including surface films.
///
/// A sole simple glazing reports its rated U-factor; otherwise
/// `1 / (1/conductance + film_resistance)`.
#[must_use]
pub fn u_factor(
    layers: &ResolvedLayers<'_>,
    film_resistance: ThermalInsulance,
) -> Option<HeatTransferCoefficient> {
    if let Some(MaterialKind::SimpleGlazing(glazing)) = layers.single().map(Material::kind) {
        return Some(glazing.u_factor.into_inner());
    }

    let conductance = thermal_conductance(layers)?;
    let resistance: ThermalInsulance = conductance.recip();
    Some((resistance + film_resistance).recip())
}

/// Visible transmittance: zero when opaque, the sole layer's value for a
/// single-layer fenestration, `None` otherwise.
#[must_use]
pub fn visible_transmittance(layers: &ResolvedLayers<'_>) -> Option<f64> {
    match layers.family() {
        Family::Opaque => Some(0.0),
        Family::Fenestration => layers.single().and_then(Material::visible_transmittance),
        Family::Partition | Family::Empty => None,
    }
}

/// Visible absorptance of the innermost (last) layer.
#[must_use]
pub fn interior_visible_absorptance(layers: &ResolvedLayers<'_>) -> Option<f64> {
    layers
        .materials()
        .last()
        .and_then(|m| m.interior_visible_absorptance())
}

/// Visible absorptance of the outermost (first) layer.
#[must_use]
pub fn exterior_visible_absorptance(layers: &ResolvedLayers<'_>) -> Option<f64> {
    layers
        .materials()
        .first()
        .and_then(|m| m.exterior_visible_absorptance())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::envelope::assembly::core::{
        material::MaterialId,
        stack::{AssemblyId, AssemblyKind, LayerStack},
        test_support::Fixture,
    };

    const FILM: f64 = 0.150;

    fn summary(f: &Fixture, layers: &[MaterialId]) -> ThermalSummary {
        let stack = LayerStack::with_layers(
            AssemblyId::new(0),
            "Test",
            AssemblyKind::Standard,
            layers,
            &f.materials,
        )
        .unwrap();
        ThermalSummary::new(&stack.resolve(&f.materials).unwrap(), thermal_insulance(FILM))
    }

    #[test]
    fn single_opaque_layer_round_trips() {
        let f = Fixture::new();
        let s = summary(&f, &[f.brick]);

        let conductance = s.thermal_conductance.unwrap().value;
        let resistance = s.thermal_resistance.unwrap().value;
        assert_relative_eq!(conductance, 8.9, max_relative = 1e-12);
        assert_relative_eq!(1.0 / resistance, conductance, max_relative = 1e-12);
        assert_relative_eq!(1.0 / conductance, resistance, max_relative = 1e-12);
    }

    #[test]
    fn layered_wall_sums_resistances() {
        let f = Fixture::new();
        let s = summary(&f, &[f.brick, f.air_gap, f.insulation, f.gypsum]);

        let expected = 0.1 / 0.89 + 0.15 + 0.05 / 0.04 + 0.0127 / 0.16;
        assert_relative_eq!(
            s.thermal_resistance.unwrap().value,
            expected,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            s.u_factor.unwrap().value,
            1.0 / (expected + FILM),
            max_relative = 1e-12
        );
        assert_eq!(s.visible_transmittance, Some(0.0));
    }

    #[test]
    fn heat_capacity_skips_massless_layers() {
        let f = Fixture::new();
        let s = summary(&f, &[f.brick, f.air_gap, f.gypsum]);

        let expected = 0.1 * 1920.0 * 790.0 + 0.0127 * 800.0 * 1090.0;
        assert_relative_eq!(
            s.heat_capacity.unwrap().value,
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn absorptance_follows_layer_order() {
        let mut f = Fixture::new();
        f.materials
            .modify(f.gypsum, |kind| {
                if let MaterialKind::StandardOpaque(m) = kind {
                    m.absorptance.visible =
                        crate::support::constraint::UnitInterval::new(0.5).unwrap();
                }
            })
            .unwrap();

        let s = summary(&f, &[f.brick, f.gypsum]);
        assert_relative_eq!(s.exterior_visible_absorptance.unwrap(), 0.7);
        assert_relative_eq!(s.interior_visible_absorptance.unwrap(), 0.5);

        let s = summary(&f, &[f.gypsum, f.brick]);
        assert_relative_eq!(s.exterior_visible_absorptance.unwrap(), 0.5);
        assert_relative_eq!(s.interior_visible_absorptance.unwrap(), 0.7);
    }

    #[test]
    fn simple_glazing_reports_rated_values() {
        let f = Fixture::new();
        let s = summary(&f, &[f.simple_window]);

        assert_eq!(s.family, Family::Fenestration);
        assert_relative_eq!(s.u_factor.unwrap().value, 2.0);
        assert_relative_eq!(s.visible_transmittance.unwrap(), 0.6);
        assert!(s.thermal_conductance.is_none());
        assert!(s.heat_capacity.is_none());
    }

    #[test]
    fn single_pane_has_conductance() {
        let f = Fixture::new();
        let s = summary(&f, &[f.glass]);

        assert_relative_eq!(
            s.thermal_conductance.unwrap().value,
            0.9 / 0.003,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            s.u_factor.unwrap().value,
            1.0 / (0.003 / 0.9 + FILM),
            max_relative = 1e-12
        );
        assert_relative_eq!(s.visible_transmittance.unwrap(), 0.899);
    }

    #[test]
    fn multi_pane_window_is_not_derivable() {
        let f = Fixture::new();
        let s = summary(&f, &[f.glass, f.argon, f.glass]);

        assert!(s.thermal_conductance.is_none());
        assert!(s.thermal_resistance.is_none());
        assert!(s.u_factor.is_none());
        assert!(s.visible_transmittance.is_none());
        assert_relative_eq!(
            s.exterior_visible_absorptance.unwrap(),
            1.0 - (0.899 + 0.079),
            max_relative = 1e-12
        );
    }

    #[test]
    fn empty_and_partition_have_nothing() {
        let f = Fixture::new();

        let stack = LayerStack::new(AssemblyId::new(0), "Empty", AssemblyKind::Standard);
        let s = ThermalSummary::new(&stack.resolve(&f.materials).unwrap(), thermal_insulance(FILM));
        assert_eq!(s.family, Family::Empty);
        assert!(s.thermal_conductance.is_none());
        assert!(s.heat_capacity.is_none());
        assert!(s.visible_transmittance.is_none());
        assert!(s.interior_visible_absorptance.is_none());

        let s = summary(&f, &[f.partition]);
        assert_eq!(s.family, Family::Partition);
        assert!(s.u_factor.is_none());
        assert!(s.visible_transmittance.is_none());
    }
}
