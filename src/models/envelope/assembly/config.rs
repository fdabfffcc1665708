use crate::support::units::ThermalInsulance;

use super::FilmResistance;

/// Configuration for [`AssemblyProperties`](super::AssemblyProperties).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssemblyPropertiesConfig {
    /// Combined interior and exterior surface film used for the U-factor.
    pub film_resistance: ThermalInsulance,
}

impl Default for AssemblyPropertiesConfig {
    /// An exterior wall: 15 mph wind outside, still air on a vertical surface inside.
    fn default() -> Self {
        Self {
            film_resistance: FilmResistance::combined(
                FilmResistance::MovingAir15Mph,
                FilmResistance::StillAirVertical,
            ),
        }
    }
}
