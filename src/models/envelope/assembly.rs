//! Layered wall, roof and window assemblies.
//!
//! This module provides a [`twine_core::Model`] implementation that reports
//! the aggregate properties of an assembly. The layer model itself (materials,
//! validated stacks and the assembly registry) lives in the internal `core`
//! module and is re-exported here.

mod config;
mod core;

pub use self::core::{
    AirGap, Assemblies, AssemblyId, AssemblyKind, AssemblyRegistry, CatalogError, CustomGas,
    Family, FilmResistance, GasCoefficients, GasLayer, GasType, LayerError, LayerRuleViolation,
    LayerStack, Massless, Material, MaterialCatalog, MaterialCategory, MaterialId, MaterialKind,
    Materials, PropertyUpdateError, RefractionExtinctionGlazing, RegistryError, ResolvedLayers,
    ReversedAssemblies, RoofVegetation, Roughness, SimpleGlazing, StandardGlazing,
    StandardOpaque, SurfaceAbsorptance, ThermalSummary, exterior_visible_absorptance,
    find_or_create_reverse, heat_capacity, interior_visible_absorptance, set_thermal_conductance,
    set_thermal_resistance, set_u_factor, thermal_conductance, thermal_resistance, u_factor,
    validate_layers, visible_transmittance,
};
pub use config::AssemblyPropertiesConfig;

use twine_core::Model;

/// Model adapter computing a [`ThermalSummary`] for a layer stack.
///
/// Layers are resolved through the borrowed catalog on every call, so the
/// summary always reflects the catalog's current materials.
#[derive(Debug, Clone, Copy)]
pub struct AssemblyProperties<'a, C> {
    catalog: &'a C,
    config: AssemblyPropertiesConfig,
}

impl<'a, C: MaterialCatalog> AssemblyProperties<'a, C> {
    #[must_use]
    pub fn new(catalog: &'a C, config: AssemblyPropertiesConfig) -> Self {
        Self { catalog, config }
    }
}

impl<C: MaterialCatalog> Model for AssemblyProperties<'_, C> {
    type Input = LayerStack;
    type Output = ThermalSummary;
    type Error = LayerError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let resolved = input.resolve(self.catalog)?;
        Ok(ThermalSummary::new(&resolved, self.config.film_resistance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, MassDensity, SpecificHeatCapacity, ThermalConductivity},
        length::millimeter,
        mass_density::kilogram_per_cubic_meter,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    use crate::support::units::thermal_insulance;

    fn board(thickness_mm: f64, conductivity: f64) -> MaterialKind {
        MaterialKind::StandardOpaque(
            StandardOpaque::new(
                Length::new::<millimeter>(thickness_mm),
                ThermalConductivity::new::<watt_per_meter_kelvin>(conductivity),
                MassDensity::new::<kilogram_per_cubic_meter>(800.0),
                SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1090.0),
            )
            .unwrap(),
        )
    }

    #[test]
    fn default_film_is_exterior_wall() {
        let config = AssemblyPropertiesConfig::default();
        assert_relative_eq!(config.film_resistance.value, 0.150, max_relative = 1e-12);
    }

    #[test]
    fn summarizes_a_wall() {
        let mut materials = Materials::new();
        let gypsum = materials.insert("Gypsum", board(12.7, 0.16));
        let gap = materials.insert(
            "Air Gap",
            MaterialKind::AirGap(AirGap::new(thermal_insulance(0.15)).unwrap()),
        );

        let wall = LayerStack::with_layers(
            AssemblyId::new(0),
            "Partition Wall",
            AssemblyKind::Standard,
            &[gypsum, gap, gypsum],
            &materials,
        )
        .unwrap();

        let model = AssemblyProperties::new(&materials, AssemblyPropertiesConfig::default());
        let summary = model.call(&wall).unwrap();

        let resistance = 2.0 * 0.0127 / 0.16 + 0.15;
        assert_eq!(summary.family, Family::Opaque);
        assert_relative_eq!(
            summary.thermal_resistance.unwrap().value,
            resistance,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            summary.u_factor.unwrap().value,
            1.0 / (resistance + 0.150),
            max_relative = 1e-12
        );
    }

    #[test]
    fn rejects_illegal_rehydrated_stack() {
        let mut materials = Materials::new();
        let gypsum = materials.insert("Gypsum", board(12.7, 0.16));
        let gap = materials.insert(
            "Air Gap",
            MaterialKind::AirGap(AirGap::new(thermal_insulance(0.15)).unwrap()),
        );

        let stack = LayerStack::rehydrate(
            AssemblyId::new(0),
            "Imported",
            AssemblyKind::Standard,
            vec![gypsum, gap],
        );

        let model = AssemblyProperties::new(&materials, AssemblyPropertiesConfig::default());
        assert_eq!(
            model.call(&stack),
            Err(LayerError::Rule(LayerRuleViolation::TrailingAirGap))
        );
    }
}
