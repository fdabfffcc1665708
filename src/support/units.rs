//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., thickness,
//! conductivity, density). Envelope calculations are carried out per unit of
//! surface area, which needs three quantities that [`uom`] does not provide:
//!
//! - [`ThermalInsulance`]: area-specific thermal resistance, m²·K/W
//! - [`HeatTransferCoefficient`]: area-specific conductance (and U-factor), W/m²·K
//! - [`ArealHeatCapacity`]: heat capacity per unit area, J/m²·K
//!
//! They are plain [`uom::si::Quantity`] aliases, so they compose with the
//! built-in quantities through ordinary arithmetic:
//!
//! ```
//! use uom::si::{
//!     f64::{Length, ThermalConductivity},
//!     length::meter,
//!     thermal_conductivity::watt_per_meter_kelvin,
//! };
//! use twine_envelope::support::units::{HeatTransferCoefficient, ThermalInsulance};
//!
//! let thickness = Length::new::<meter>(0.2);
//! let conductivity = ThermalConductivity::new::<watt_per_meter_kelvin>(0.5);
//!
//! let resistance: ThermalInsulance = thickness / conductivity;
//! let conductance: HeatTransferCoefficient = conductivity / thickness;
//! assert!((resistance.value - 0.4).abs() < 1e-12);
//! assert!((conductance.value - 2.5).abs() < 1e-12);
//! ```
//!
//! Values of these aliases are stored in SI base units and read back through
//! the quantity's `value` field.

mod quantities;

pub use quantities::{
    ArealHeatCapacity, HeatTransferCoefficient, ThermalInsulance, areal_heat_capacity,
    heat_transfer_coefficient, thermal_insulance,
};
