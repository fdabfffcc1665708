//! Fill gases for the cavities of multi-pane windows.
//!
//! Gas properties vary with temperature and follow quadratic correlations
//! `A + B·T + C·T²` with `T` in kelvin.

use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, Length, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constrained, ConstraintResult, StrictlyPositive},
    units::HeatTransferCoefficient,
};

/// Coefficients of a quadratic temperature correlation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl GasCoefficients {
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    fn evaluate(&self, temperature: ThermodynamicTemperature) -> f64 {
        let t = temperature.get::<kelvin>();
        self.a + self.b * t + self.c * t * t
    }
}

/// User-supplied correlations for a gas not in the standard set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomGas {
    /// Conductivity correlation, W/m·K.
    pub conductivity: GasCoefficients,
    /// Dynamic viscosity correlation, Pa·s.
    pub viscosity: GasCoefficients,
    /// Specific heat correlation, J/kg·K.
    pub specific_heat: GasCoefficients,
    /// Molecular weight, g/mol.
    pub molecular_weight: f64,
}

/// The gas filling a window cavity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GasType {
    Air,
    Argon,
    Krypton,
    Xenon,
    Custom(CustomGas),
}

impl GasType {
    fn correlations(&self) -> CustomGas {
        match self {
            Self::Air => CustomGas {
                conductivity: GasCoefficients::new(2.873e-3, 7.760e-5, 0.0),
                viscosity: GasCoefficients::new(3.723e-6, 4.940e-8, 0.0),
                specific_heat: GasCoefficients::new(1002.737, 1.2324e-2, 0.0),
                molecular_weight: 28.97,
            },
            Self::Argon => CustomGas {
                conductivity: GasCoefficients::new(2.285e-3, 5.149e-5, 0.0),
                viscosity: GasCoefficients::new(3.379e-6, 6.451e-8, 0.0),
                specific_heat: GasCoefficients::new(521.929, 0.0, 0.0),
                molecular_weight: 39.948,
            },
            Self::Krypton => CustomGas {
                conductivity: GasCoefficients::new(9.443e-4, 2.826e-5, 0.0),
                viscosity: GasCoefficients::new(2.213e-6, 7.777e-8, 0.0),
                specific_heat: GasCoefficients::new(248.091, 0.0, 0.0),
                molecular_weight: 83.8,
            },
            Self::Xenon => CustomGas {
                conductivity: GasCoefficients::new(4.538e-4, 1.723e-5, 0.0),
                viscosity: GasCoefficients::new(1.069e-6, 7.414e-8, 0.0),
                specific_heat: GasCoefficients::new(158.340, 0.0, 0.0),
                molecular_weight: 131.3,
            },
            Self::Custom(custom) => *custom,
        }
    }

    #[must_use]
    pub fn thermal_conductivity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> ThermalConductivity {
        ThermalConductivity::new::<watt_per_meter_kelvin>(
            self.correlations().conductivity.evaluate(temperature),
        )
    }

    #[must_use]
    pub fn viscosity(&self, temperature: ThermodynamicTemperature) -> DynamicViscosity {
        DynamicViscosity::new::<pascal_second>(self.correlations().viscosity.evaluate(temperature))
    }

    #[must_use]
    pub fn specific_heat(&self, temperature: ThermodynamicTemperature) -> SpecificHeatCapacity {
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(
            self.correlations().specific_heat.evaluate(temperature),
        )
    }

    /// Molecular weight, g/mol.
    #[must_use]
    pub fn molecular_weight(&self) -> f64 {
        self.correlations().molecular_weight
    }
}

/// A gas-filled cavity between two panes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasLayer {
    pub gas: GasType,
    pub thickness: Constrained<Length, StrictlyPositive>,
}

impl GasLayer {
    /// # Errors
    ///
    /// Returns `Err` if the thickness is not strictly positive.
    pub fn new(gas: GasType, thickness: Length) -> ConstraintResult<Self> {
        Ok(Self {
            gas,
            thickness: StrictlyPositive::new(thickness)?,
        })
    }

    /// Conductance across the cavity at the given mean gas temperature.
    #[must_use]
    pub fn thermal_conductance(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> HeatTransferCoefficient {
        self.gas.thermal_conductivity(temperature) / self.thickness.into_inner()
    }
}
