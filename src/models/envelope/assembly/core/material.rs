//! Material records and their category-specific attributes.
//!
//! A [`Material`] is one physical sheet of an assembly. Its [`MaterialKind`]
//! is fixed when the material is created; only the attributes inside the kind
//! may change afterwards (see [`Materials::modify`](super::Materials::modify)).

mod gas;

pub use gas::{CustomGas, GasCoefficients, GasLayer, GasType};

use std::fmt;

use uom::si::{
    f64::{Length, MassDensity, SpecificHeatCapacity, ThermalConductivity},
    length::meter,
};

use crate::support::{
    constraint::{
        Constrained, ConstraintResult, NonNegative, StrictlyPositive, UnitInterval,
    },
    units::{ArealHeatCapacity, HeatTransferCoefficient, ThermalInsulance},
};

/// Stable identifier of a [`Material`] within its owning catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(usize);

impl MaterialId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "material #{}", self.0)
    }
}

/// The broad family of a material or of a whole layer stack.
///
/// Individual materials are always `Opaque`, `Fenestration` or `Partition`.
/// `Empty` only describes a stack with no layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Opaque,
    Fenestration,
    Partition,
    Empty,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Family::Opaque => "opaque",
            Family::Fenestration => "fenestration",
            Family::Partition => "partition",
            Family::Empty => "empty",
        };
        f.write_str(name)
    }
}

/// The closed set of material categories.
///
/// This is the tag the layer rules operate on; the attributes live in
/// [`MaterialKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialCategory {
    StandardOpaque,
    Massless,
    AirGap,
    RoofVegetation,
    SimpleGlazing,
    StandardGlazing,
    RefractionExtinctionGlazing,
    GasLayer,
    ModelPartition,
}

impl MaterialCategory {
    /// Returns the family this category belongs to.
    #[must_use]
    pub fn family(self) -> Family {
        match self {
            Self::StandardOpaque | Self::Massless | Self::AirGap | Self::RoofVegetation => {
                Family::Opaque
            }
            Self::SimpleGlazing
            | Self::StandardGlazing
            | Self::RefractionExtinctionGlazing
            | Self::GasLayer => Family::Fenestration,
            Self::ModelPartition => Family::Partition,
        }
    }

    /// Returns `true` for the three glazing categories.
    #[must_use]
    pub fn is_glazing(self) -> bool {
        matches!(
            self,
            Self::SimpleGlazing | Self::StandardGlazing | Self::RefractionExtinctionGlazing
        )
    }
}

/// Surface roughness of an opaque material's exposed face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Roughness {
    VeryRough,
    Rough,
    MediumRough,
    MediumSmooth,
    #[default]
    Smooth,
    VerySmooth,
}

/// Thermal, solar and visible absorptance of an opaque surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceAbsorptance {
    pub thermal: Constrained<f64, UnitInterval>,
    pub solar: Constrained<f64, UnitInterval>,
    pub visible: Constrained<f64, UnitInterval>,
}

impl SurfaceAbsorptance {
    /// Creates absorptances from scalar fractions.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any fraction lies outside `[0, 1]`.
    pub fn new(thermal: f64, solar: f64, visible: f64) -> ConstraintResult<Self> {
        Ok(Self {
            thermal: UnitInterval::new(thermal)?,
            solar: UnitInterval::new(solar)?,
            visible: UnitInterval::new(visible)?,
        })
    }
}

impl Default for SurfaceAbsorptance {
    fn default() -> Self {
        Self::new(0.9, 0.7, 0.7).expect("default absorptances lie in [0, 1]")
    }
}

/// A homogeneous opaque layer with mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardOpaque {
    pub roughness: Roughness,
    pub thickness: Constrained<Length, StrictlyPositive>,
    pub conductivity: Constrained<ThermalConductivity, StrictlyPositive>,
    pub density: Constrained<MassDensity, StrictlyPositive>,
    pub specific_heat: Constrained<SpecificHeatCapacity, StrictlyPositive>,
    pub absorptance: SurfaceAbsorptance,
}

impl StandardOpaque {
    /// Creates a smooth opaque layer with default absorptances.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any property is not strictly positive.
    pub fn new(
        thickness: Length,
        conductivity: ThermalConductivity,
        density: MassDensity,
        specific_heat: SpecificHeatCapacity,
    ) -> ConstraintResult<Self> {
        Ok(Self {
            roughness: Roughness::default(),
            thickness: StrictlyPositive::new(thickness)?,
            conductivity: StrictlyPositive::new(conductivity)?,
            density: StrictlyPositive::new(density)?,
            specific_heat: StrictlyPositive::new(specific_heat)?,
            absorptance: SurfaceAbsorptance::default(),
        })
    }
}

/// An opaque layer described only by its thermal resistance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Massless {
    pub roughness: Roughness,
    pub resistance: Constrained<ThermalInsulance, StrictlyPositive>,
    pub absorptance: SurfaceAbsorptance,
}

impl Massless {
    /// Creates a smooth massless layer with default absorptances.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the resistance is not strictly positive.
    pub fn new(resistance: ThermalInsulance) -> ConstraintResult<Self> {
        Ok(Self {
            roughness: Roughness::default(),
            resistance: StrictlyPositive::new(resistance)?,
            absorptance: SurfaceAbsorptance::default(),
        })
    }
}

/// An enclosed air cavity inside an opaque assembly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirGap {
    pub resistance: Constrained<ThermalInsulance, StrictlyPositive>,
}

impl AirGap {
    /// # Errors
    ///
    /// Returns `Err` if the resistance is not strictly positive.
    pub fn new(resistance: ThermalInsulance) -> ConstraintResult<Self> {
        Ok(Self {
            resistance: StrictlyPositive::new(resistance)?,
        })
    }
}

/// A vegetated soil layer; only legal as the outermost layer of a roof.
///
/// The thermal properties are those of the dry soil.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoofVegetation {
    pub roughness: Roughness,
    pub thickness: Constrained<Length, StrictlyPositive>,
    pub conductivity: Constrained<ThermalConductivity, StrictlyPositive>,
    pub density: Constrained<MassDensity, StrictlyPositive>,
    pub specific_heat: Constrained<SpecificHeatCapacity, StrictlyPositive>,
    pub absorptance: SurfaceAbsorptance,
    pub plant_height: Constrained<Length, NonNegative>,
    pub leaf_area_index: Constrained<f64, StrictlyPositive>,
    pub leaf_reflectivity: Constrained<f64, UnitInterval>,
    pub leaf_emissivity: Constrained<f64, UnitInterval>,
    /// Minimum stomatal resistance, s/m.
    pub minimum_stomatal_resistance: Constrained<f64, StrictlyPositive>,
}

impl RoofVegetation {
    /// Creates a vegetated layer from its dry-soil properties.
    ///
    /// Plant properties default to a 0.2 m canopy with a leaf area index of 1,
    /// leaf reflectivity 0.22, leaf emissivity 0.95 and a minimum stomatal
    /// resistance of 180 s/m. Absorptances default to 0.9/0.7/0.75.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any soil property is not strictly positive.
    pub fn new(
        thickness: Length,
        conductivity: ThermalConductivity,
        density: MassDensity,
        specific_heat: SpecificHeatCapacity,
    ) -> ConstraintResult<Self> {
        Ok(Self {
            roughness: Roughness::MediumRough,
            thickness: StrictlyPositive::new(thickness)?,
            conductivity: StrictlyPositive::new(conductivity)?,
            density: StrictlyPositive::new(density)?,
            specific_heat: StrictlyPositive::new(specific_heat)?,
            absorptance: SurfaceAbsorptance::new(0.9, 0.7, 0.75)?,
            plant_height: NonNegative::new(Length::new::<meter>(0.2))?,
            leaf_area_index: StrictlyPositive::new(1.0)?,
            leaf_reflectivity: UnitInterval::new(0.22)?,
            leaf_emissivity: UnitInterval::new(0.95)?,
            minimum_stomatal_resistance: StrictlyPositive::new(180.0)?,
        })
    }
}

/// A whole window described by its rated performance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleGlazing {
    pub u_factor: Constrained<HeatTransferCoefficient, StrictlyPositive>,
    pub solar_heat_gain_coefficient: Constrained<f64, UnitInterval>,
    pub visible_transmittance: Option<Constrained<f64, UnitInterval>>,
}

impl SimpleGlazing {
    /// # Errors
    ///
    /// Returns `Err` if the U-factor is not strictly positive or the SHGC lies
    /// outside `[0, 1]`.
    pub fn new(
        u_factor: HeatTransferCoefficient,
        solar_heat_gain_coefficient: f64,
    ) -> ConstraintResult<Self> {
        Ok(Self {
            u_factor: StrictlyPositive::new(u_factor)?,
            solar_heat_gain_coefficient: UnitInterval::new(solar_heat_gain_coefficient)?,
            visible_transmittance: None,
        })
    }

    /// Sets the visible transmittance.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the transmittance lies outside `[0, 1]`.
    pub fn with_visible_transmittance(mut self, value: f64) -> ConstraintResult<Self> {
        self.visible_transmittance = Some(UnitInterval::new(value)?);
        Ok(self)
    }
}

/// A glass pane described by its normal-incidence optical properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardGlazing {
    pub thickness: Constrained<Length, StrictlyPositive>,
    pub conductivity: Constrained<ThermalConductivity, StrictlyPositive>,
    pub solar_transmittance: Option<Constrained<f64, UnitInterval>>,
    pub visible_transmittance: Option<Constrained<f64, UnitInterval>>,
    pub front_visible_reflectance: Option<Constrained<f64, UnitInterval>>,
    pub back_visible_reflectance: Option<Constrained<f64, UnitInterval>>,
}

impl StandardGlazing {
    /// Creates a pane with no optical data set.
    ///
    /// # Errors
    ///
    /// Returns `Err` if thickness or conductivity is not strictly positive.
    pub fn new(thickness: Length, conductivity: ThermalConductivity) -> ConstraintResult<Self> {
        Ok(Self {
            thickness: StrictlyPositive::new(thickness)?,
            conductivity: StrictlyPositive::new(conductivity)?,
            solar_transmittance: None,
            visible_transmittance: None,
            front_visible_reflectance: None,
            back_visible_reflectance: None,
        })
    }

    /// Sets visible transmittance and front/back visible reflectance.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any value lies outside `[0, 1]`.
    pub fn with_visible_optics(
        mut self,
        transmittance: f64,
        front_reflectance: f64,
        back_reflectance: f64,
    ) -> ConstraintResult<Self> {
        self.visible_transmittance = Some(UnitInterval::new(transmittance)?);
        self.front_visible_reflectance = Some(UnitInterval::new(front_reflectance)?);
        self.back_visible_reflectance = Some(UnitInterval::new(back_reflectance)?);
        Ok(self)
    }

    fn visible_absorptance(
        &self,
        reflectance: Option<Constrained<f64, UnitInterval>>,
    ) -> Option<f64> {
        let tau = self.visible_transmittance?.into_inner();
        let rho = reflectance?.into_inner();
        Some(1.0 - (tau + rho))
    }
}

/// A glass pane described by index of refraction and extinction coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefractionExtinctionGlazing {
    pub thickness: Constrained<Length, StrictlyPositive>,
    pub conductivity: Constrained<ThermalConductivity, StrictlyPositive>,
    pub solar_index_of_refraction: Constrained<f64, StrictlyPositive>,
    /// Solar extinction coefficient, 1/m.
    pub solar_extinction_coefficient: Constrained<f64, StrictlyPositive>,
    pub visible_index_of_refraction: Constrained<f64, StrictlyPositive>,
    /// Visible extinction coefficient, 1/m.
    pub visible_extinction_coefficient: Constrained<f64, StrictlyPositive>,
}

impl RefractionExtinctionGlazing {
    /// # Errors
    ///
    /// Returns `Err` if any property is not strictly positive.
    pub fn new(
        thickness: Length,
        conductivity: ThermalConductivity,
        solar: (f64, f64),
        visible: (f64, f64),
    ) -> ConstraintResult<Self> {
        Ok(Self {
            thickness: StrictlyPositive::new(thickness)?,
            conductivity: StrictlyPositive::new(conductivity)?,
            solar_index_of_refraction: StrictlyPositive::new(solar.0)?,
            solar_extinction_coefficient: StrictlyPositive::new(solar.1)?,
            visible_index_of_refraction: StrictlyPositive::new(visible.0)?,
            visible_extinction_coefficient: StrictlyPositive::new(visible.1)?,
        })
    }
}

/// Category-specific attributes of a material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaterialKind {
    StandardOpaque(StandardOpaque),
    Massless(Massless),
    AirGap(AirGap),
    RoofVegetation(RoofVegetation),
    SimpleGlazing(SimpleGlazing),
    StandardGlazing(StandardGlazing),
    RefractionExtinctionGlazing(RefractionExtinctionGlazing),
    GasLayer(GasLayer),
    /// A non-physical boundary with no thermal properties.
    ModelPartition,
}

impl MaterialKind {
    #[must_use]
    pub fn category(&self) -> MaterialCategory {
        match self {
            Self::StandardOpaque(_) => MaterialCategory::StandardOpaque,
            Self::Massless(_) => MaterialCategory::Massless,
            Self::AirGap(_) => MaterialCategory::AirGap,
            Self::RoofVegetation(_) => MaterialCategory::RoofVegetation,
            Self::SimpleGlazing(_) => MaterialCategory::SimpleGlazing,
            Self::StandardGlazing(_) => MaterialCategory::StandardGlazing,
            Self::RefractionExtinctionGlazing(_) => MaterialCategory::RefractionExtinctionGlazing,
            Self::GasLayer(_) => MaterialCategory::GasLayer,
            Self::ModelPartition => MaterialCategory::ModelPartition,
        }
    }
}

/// A named material record.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    id: MaterialId,
    name: String,
    kind: MaterialKind,
}

impl Material {
    pub(crate) fn new(id: MaterialId, name: String, kind: MaterialKind) -> Self {
        Self { id, name, kind }
    }

    #[must_use]
    pub fn id(&self) -> MaterialId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn kind(&self) -> &MaterialKind {
        &self.kind
    }

    pub(crate) fn kind_mut(&mut self) -> &mut MaterialKind {
        &mut self.kind
    }

    #[must_use]
    pub fn category(&self) -> MaterialCategory {
        self.kind.category()
    }

    #[must_use]
    pub fn family(&self) -> Family {
        self.category().family()
    }

    /// Returns the conductance of this layer alone, if it has a fixed one.
    ///
    /// Thickness-based materials use `k / thickness`; resistance-based
    /// materials use `1 / R`. Simple glazings, gases (temperature dependent)
    /// and partitions have none.
    #[must_use]
    pub fn thermal_conductance(&self) -> Option<HeatTransferCoefficient> {
        match &self.kind {
            MaterialKind::StandardOpaque(m) => Some(conduction(m.conductivity, m.thickness)),
            MaterialKind::RoofVegetation(m) => Some(conduction(m.conductivity, m.thickness)),
            MaterialKind::StandardGlazing(m) => Some(conduction(m.conductivity, m.thickness)),
            MaterialKind::RefractionExtinctionGlazing(m) => {
                Some(conduction(m.conductivity, m.thickness))
            }
            MaterialKind::Massless(m) => Some(m.resistance.into_inner().recip()),
            MaterialKind::AirGap(m) => Some(m.resistance.into_inner().recip()),
            MaterialKind::SimpleGlazing(_)
            | MaterialKind::GasLayer(_)
            | MaterialKind::ModelPartition => None,
        }
    }

    /// Returns the thermal resistance of this layer alone.
    ///
    /// Resistance-based materials report their stored value; all others
    /// report the reciprocal of [`Material::thermal_conductance`].
    #[must_use]
    pub fn thermal_resistance(&self) -> Option<ThermalInsulance> {
        match &self.kind {
            MaterialKind::Massless(m) => Some(m.resistance.into_inner()),
            MaterialKind::AirGap(m) => Some(m.resistance.into_inner()),
            _ => self.thermal_conductance().map(|c| -> ThermalInsulance { c.recip() }),
        }
    }

    /// Returns `c·ρ·thickness` for materials with mass, `None` otherwise.
    #[must_use]
    pub fn heat_capacity(&self) -> Option<ArealHeatCapacity> {
        match &self.kind {
            MaterialKind::StandardOpaque(m) => Some(
                m.specific_heat.into_inner() * m.density.into_inner() * m.thickness.into_inner(),
            ),
            MaterialKind::RoofVegetation(m) => Some(
                m.specific_heat.into_inner() * m.density.into_inner() * m.thickness.into_inner(),
            ),
            _ => None,
        }
    }

    /// Returns the visible transmittance at normal incidence.
    ///
    /// Opaque materials transmit nothing.
    #[must_use]
    pub fn visible_transmittance(&self) -> Option<f64> {
        match &self.kind {
            MaterialKind::StandardOpaque(_)
            | MaterialKind::Massless(_)
            | MaterialKind::AirGap(_)
            | MaterialKind::RoofVegetation(_) => Some(0.0),
            MaterialKind::SimpleGlazing(m) => m.visible_transmittance.map(Constrained::into_inner),
            MaterialKind::StandardGlazing(m) => {
                m.visible_transmittance.map(Constrained::into_inner)
            }
            MaterialKind::RefractionExtinctionGlazing(_)
            | MaterialKind::GasLayer(_)
            | MaterialKind::ModelPartition => None,
        }
    }

    /// Returns the visible absorptance of the face toward the interior.
    #[must_use]
    pub fn interior_visible_absorptance(&self) -> Option<f64> {
        match &self.kind {
            MaterialKind::StandardGlazing(m) => m.visible_absorptance(m.back_visible_reflectance),
            _ => self.opaque_visible_absorptance(),
        }
    }

    /// Returns the visible absorptance of the face toward the exterior.
    #[must_use]
    pub fn exterior_visible_absorptance(&self) -> Option<f64> {
        match &self.kind {
            MaterialKind::StandardGlazing(m) => m.visible_absorptance(m.front_visible_reflectance),
            _ => self.opaque_visible_absorptance(),
        }
    }

    fn opaque_visible_absorptance(&self) -> Option<f64> {
        match &self.kind {
            MaterialKind::StandardOpaque(StandardOpaque { absorptance, .. })
            | MaterialKind::Massless(Massless { absorptance, .. })
            | MaterialKind::RoofVegetation(RoofVegetation { absorptance, .. }) => {
                Some(absorptance.visible.into_inner())
            }
            _ => None,
        }
    }
}

fn conduction(
    conductivity: Constrained<ThermalConductivity, StrictlyPositive>,
    thickness: Constrained<Length, StrictlyPositive>,
) -> HeatTransferCoefficient {
    conductivity.into_inner() / thickness.into_inner()
}
