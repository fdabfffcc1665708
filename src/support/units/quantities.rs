use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Length, ThermalConductivity, Time},
        length::meter,
        thermal_conductivity::watt_per_meter_kelvin,
        time::second,
    },
    typenum::{N1, N2, N3, P1, P3, Z0},
};

/// Area-specific thermal resistance, m²·K/W in SI.
pub type ThermalInsulance = Quantity<ISQ<Z0, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Area-specific thermal conductance, W/m²·K in SI.
pub type HeatTransferCoefficient = Quantity<ISQ<Z0, P1, N3, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Heat capacity per unit area, J/m²·K in SI.
pub type ArealHeatCapacity = Quantity<ISQ<Z0, P1, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`ThermalInsulance`] from a value in m²·K/W.
#[must_use]
pub fn thermal_insulance(square_meter_kelvin_per_watt: f64) -> ThermalInsulance {
    Length::new::<meter>(square_meter_kelvin_per_watt)
        / ThermalConductivity::new::<watt_per_meter_kelvin>(1.0)
}

/// Creates a [`HeatTransferCoefficient`] from a value in W/m²·K.
#[must_use]
pub fn heat_transfer_coefficient(watt_per_square_meter_kelvin: f64) -> HeatTransferCoefficient {
    ThermalConductivity::new::<watt_per_meter_kelvin>(watt_per_square_meter_kelvin)
        / Length::new::<meter>(1.0)
}

/// Creates an [`ArealHeatCapacity`] from a value in J/m²·K.
#[must_use]
pub fn areal_heat_capacity(joule_per_square_meter_kelvin: f64) -> ArealHeatCapacity {
    heat_transfer_coefficient(joule_per_square_meter_kelvin) * Time::new::<second>(1.0)
}
