//! Layered envelope assemblies.
//!
//! An assembly is an ordered stack of material layers, exterior first. The
//! pieces, bottom up:
//!
//! - [`Material`]s live in a [`MaterialCatalog`] and are referenced by id.
//! - [`validate_layers`] decides whether a sequence of categories is legal.
//! - [`LayerStack`] applies mutations transactionally, so a stack is never
//!   observed in an illegal state.
//! - The aggregate functions derive whole-assembly properties.
//! - [`AssemblyRegistry`] owns stacks and finds or creates reversed ones.

mod aggregate;
mod catalog;
mod material;
mod registry;
mod stack;
mod validate;

#[cfg(test)]
mod test_support;

pub use aggregate::{
    FilmResistance, PropertyUpdateError, ThermalSummary, exterior_visible_absorptance,
    heat_capacity, interior_visible_absorptance, set_thermal_conductance, set_thermal_resistance,
    set_u_factor, thermal_conductance, thermal_resistance, u_factor, visible_transmittance,
};
pub use catalog::{CatalogError, MaterialCatalog, Materials};
pub use material::{
    AirGap, CustomGas, Family, GasCoefficients, GasLayer, GasType, Massless, Material,
    MaterialCategory, MaterialId, MaterialKind, RefractionExtinctionGlazing, RoofVegetation,
    Roughness, SimpleGlazing, StandardGlazing, StandardOpaque, SurfaceAbsorptance,
};
pub use registry::{
    Assemblies, AssemblyRegistry, RegistryError, ReversedAssemblies, find_or_create_reverse,
};
pub use stack::{AssemblyId, AssemblyKind, LayerError, LayerStack, ResolvedLayers};
pub use validate::{LayerRuleViolation, validate_layers};
