use crate::support::units::{ThermalInsulance, thermal_insulance};

/// Surface film resistances for still and moving air.
///
/// Values are the standard ASHRAE design films for non-reflective surfaces.
/// Still-air films are named by surface orientation and heat flow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilmResistance {
    /// Horizontal surface, heat flowing up.
    StillAirHorizontalUp,
    /// 45° sloped surface, heat flowing up.
    StillAir45DegreeUp,
    /// Vertical surface, horizontal heat flow.
    StillAirVertical,
    /// 45° sloped surface, heat flowing down.
    StillAir45DegreeDown,
    /// Horizontal surface, heat flowing down.
    StillAirHorizontalDown,
    /// Any orientation, 15 mph (6.7 m/s) wind.
    MovingAir15Mph,
    /// Any orientation, 7.5 mph (3.4 m/s) wind.
    MovingAir7Point5Mph,
}

impl FilmResistance {
    #[must_use]
    pub fn resistance(self) -> ThermalInsulance {
        thermal_insulance(match self {
            Self::StillAirHorizontalUp => 0.107,
            Self::StillAir45DegreeUp => 0.109,
            Self::StillAirVertical => 0.120,
            Self::StillAir45DegreeDown => 0.134,
            Self::StillAirHorizontalDown => 0.162,
            Self::MovingAir15Mph => 0.030,
            Self::MovingAir7Point5Mph => 0.044,
        })
    }

    /// Combined exterior and interior film for an assembly.
    #[must_use]
    pub fn combined(exterior: Self, interior: Self) -> ThermalInsulance {
        exterior.resistance() + interior.resistance()
    }
}
