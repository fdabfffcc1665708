use uom::si::{
    f64::{Length, MassDensity, SpecificHeatCapacity, ThermalConductivity},
    length::{meter, millimeter},
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::units::{heat_transfer_coefficient, thermal_insulance};

use super::{
    catalog::Materials,
    material::{
        AirGap, GasLayer, GasType, MaterialId, MaterialKind, RoofVegetation, SimpleGlazing,
        StandardGlazing, StandardOpaque,
    },
};

fn opaque(thickness: f64, conductivity: f64, density: f64, specific_heat: f64) -> StandardOpaque {
    StandardOpaque::new(
        Length::new::<meter>(thickness),
        ThermalConductivity::new::<watt_per_meter_kelvin>(conductivity),
        MassDensity::new::<kilogram_per_cubic_meter>(density),
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(specific_heat),
    )
    .unwrap()
}

/// 100 mm face brick.
pub(super) fn brick() -> MaterialKind {
    MaterialKind::StandardOpaque(opaque(0.1, 0.89, 1920.0, 790.0))
}

/// 1/2 in gypsum board.
pub(super) fn gypsum() -> MaterialKind {
    MaterialKind::StandardOpaque(opaque(0.0127, 0.16, 800.0, 1090.0))
}

/// 50 mm mineral wool batt.
pub(super) fn insulation() -> MaterialKind {
    MaterialKind::StandardOpaque(opaque(0.05, 0.04, 30.0, 840.0))
}

/// 200 mm heavyweight concrete.
pub(super) fn concrete() -> MaterialKind {
    MaterialKind::StandardOpaque(opaque(0.2, 1.95, 2240.0, 900.0))
}

pub(super) fn air_gap() -> MaterialKind {
    MaterialKind::AirGap(AirGap::new(thermal_insulance(0.15)).unwrap())
}

/// 100 mm of vegetated soil.
pub(super) fn sod_roof() -> MaterialKind {
    MaterialKind::RoofVegetation(
        RoofVegetation::new(
            Length::new::<meter>(0.1),
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.35),
            MassDensity::new::<kilogram_per_cubic_meter>(1100.0),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1200.0),
        )
        .unwrap(),
    )
}

/// 3 mm clear float glass.
pub(super) fn clear_glass() -> MaterialKind {
    MaterialKind::StandardGlazing(
        StandardGlazing::new(
            Length::new::<millimeter>(3.0),
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.9),
        )
        .unwrap()
        .with_visible_optics(0.899, 0.079, 0.08)
        .unwrap(),
    )
}

/// 12.7 mm argon fill.
pub(super) fn argon() -> MaterialKind {
    MaterialKind::GasLayer(GasLayer::new(GasType::Argon, Length::new::<millimeter>(12.7)).unwrap())
}

/// A rated window with U = 2.0 W/m²·K, SHGC 0.4 and visible transmittance 0.6.
pub(super) fn simple_window() -> MaterialKind {
    MaterialKind::SimpleGlazing(
        SimpleGlazing::new(heat_transfer_coefficient(2.0), 0.4)
            .unwrap()
            .with_visible_transmittance(0.6)
            .unwrap(),
    )
}

pub(super) fn partition() -> MaterialKind {
    MaterialKind::ModelPartition
}

/// A catalog holding one of each fixture material.
pub(super) struct Fixture {
    pub materials: Materials,
    pub brick: MaterialId,
    pub gypsum: MaterialId,
    pub insulation: MaterialId,
    pub concrete: MaterialId,
    pub air_gap: MaterialId,
    pub sod: MaterialId,
    pub glass: MaterialId,
    pub argon: MaterialId,
    pub simple_window: MaterialId,
    pub partition: MaterialId,
}

impl Fixture {
    pub(super) fn new() -> Self {
        let mut materials = Materials::new();
        Self {
            brick: materials.insert("Brick", brick()),
            gypsum: materials.insert("Gypsum", gypsum()),
            insulation: materials.insert("Insulation", insulation()),
            concrete: materials.insert("Concrete", concrete()),
            air_gap: materials.insert("Air Gap", air_gap()),
            sod: materials.insert("Sod", sod_roof()),
            glass: materials.insert("Clear 3mm", clear_glass()),
            argon: materials.insert("Argon 13mm", argon()),
            simple_window: materials.insert("Rated Window", simple_window()),
            partition: materials.insert("Partition", partition()),
            materials,
        }
    }
}
