//! Mission status evaluation.
//!
//! Classifies each tick into exactly one status, checked in priority order:
//! - Fuel depleted: the tank is empty, the satellite drifts away
//! - Atmospheric entry: at or below the top of the atmosphere, it burns up
//! - Mapping enabled: low-eccentricity orbit inside the mapping band
//! - Nominal: anything else

use bevy::math::DVec2;

use crate::config::MissionConfig;
use crate::satellite::Satellite;

/// Discrete mission status for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MissionStatus {
    #[default]
    Nominal,
    /// Propellant exhausted.
    FuelDepleted,
    /// Distance at or below the atmosphere threshold.
    AtmosphericEntry,
    /// Orbit is circular enough, and at the right altitude, to map soil moisture.
    MappingEnabled,
}

impl MissionStatus {
    /// Banner text shown for this status, if any.
    pub fn banner(self) -> Option<&'static str> {
        match self {
            MissionStatus::Nominal => None,
            MissionStatus::FuelDepleted => Some("Fuel Depleted!"),
            MissionStatus::AtmosphericEntry => Some("Atmospheric Entry!"),
            MissionStatus::MappingEnabled => Some("Press & hold M to map soil moisture"),
        }
    }

    /// Whether the soil-moisture view may be shown.
    pub fn is_mapping_enabled(self) -> bool {
        matches!(self, MissionStatus::MappingEnabled)
    }
}

/// Evaluate the mission status from the current telemetry.
///
/// First match wins, so an empty tank always reports `FuelDepleted` even
/// inside the mapping band.
pub fn evaluate_mission(
    fuel: u32,
    distance: f64,
    eccentricity: f64,
    config: &MissionConfig,
) -> MissionStatus {
    if fuel == 0 {
        MissionStatus::FuelDepleted
    } else if distance <= config.atmosphere_distance {
        MissionStatus::AtmosphericEntry
    } else if eccentricity < config.mapping_max_eccentricity
        && (config.mapping_min_distance..=config.mapping_max_distance).contains(&distance)
    {
        MissionStatus::MappingEnabled
    } else {
        MissionStatus::Nominal
    }
}

/// Apply the velocity override a status imposes on the satellite.
///
/// Fuel depletion forces a horizontal drift; atmospheric entry stops the
/// satellite dead, which is what marks it as crashed.
pub fn apply_status_effects(status: MissionStatus, satellite: &mut Satellite, config: &MissionConfig) {
    match status {
        MissionStatus::FuelDepleted => satellite.set_velocity(DVec2::new(config.drift_dx, 0.0)),
        MissionStatus::AtmosphericEntry => satellite.set_velocity(DVec2::ZERO),
        MissionStatus::MappingEnabled | MissionStatus::Nominal => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OrbiterConfig;

    fn cfg() -> MissionConfig {
        MissionConfig::default()
    }

    #[test]
    fn test_atmosphere_boundary_is_inclusive() {
        assert_eq!(evaluate_mission(50, 68.0, 1.0, &cfg()), MissionStatus::AtmosphericEntry);
        assert_eq!(evaluate_mission(50, 68.0001, 1.0, &cfg()), MissionStatus::Nominal);
    }

    #[test]
    fn test_mapping_eccentricity_boundary_is_strict() {
        assert_eq!(evaluate_mission(50, 69.0, 0.049, &cfg()), MissionStatus::MappingEnabled);
        assert_eq!(evaluate_mission(50, 69.0, 0.05, &cfg()), MissionStatus::Nominal);
    }

    #[test]
    fn test_mapping_band_edges() {
        assert_eq!(evaluate_mission(50, 120.0, 0.01, &cfg()), MissionStatus::MappingEnabled);
        assert_eq!(evaluate_mission(50, 120.5, 0.01, &cfg()), MissionStatus::Nominal);
        // Between the atmosphere and the band
        assert_eq!(evaluate_mission(50, 68.5, 0.01, &cfg()), MissionStatus::Nominal);
    }

    #[test]
    fn test_fuel_depleted_wins() {
        assert_eq!(evaluate_mission(0, 90.0, 0.01, &cfg()), MissionStatus::FuelDepleted);
        assert_eq!(evaluate_mission(0, 10.0, 0.01, &cfg()), MissionStatus::FuelDepleted);
    }

    #[test]
    fn test_atmospheric_entry_beats_mapping() {
        let mut config = cfg();
        config.mapping_min_distance = 0.0;
        assert_eq!(evaluate_mission(50, 60.0, 0.0, &config), MissionStatus::AtmosphericEntry);
    }

    #[test]
    fn test_fuel_depleted_forces_drift() {
        let config = OrbiterConfig::default();
        let mut sat = Satellite::new(DVec2::ZERO, DVec2::new(-1.5, 0.7), &config);

        apply_status_effects(MissionStatus::FuelDepleted, &mut sat, &config.mission);

        assert_eq!(sat.vel(), DVec2::new(2.0, 0.0));
        assert!(!sat.is_crashed());
    }

    #[test]
    fn test_atmospheric_entry_crashes() {
        let config = OrbiterConfig::default();
        let mut sat = Satellite::new(DVec2::ZERO, DVec2::new(-1.5, 0.7), &config);

        apply_status_effects(MissionStatus::AtmosphericEntry, &mut sat, &config.mission);

        assert!(sat.is_crashed());
    }

    #[test]
    fn test_nominal_and_mapping_leave_velocity_alone() {
        let config = OrbiterConfig::default();
        let mut sat = Satellite::new(DVec2::ZERO, DVec2::new(-1.5, 0.7), &config);

        apply_status_effects(MissionStatus::Nominal, &mut sat, &config.mission);
        apply_status_effects(MissionStatus::MappingEnabled, &mut sat, &config.mission);

        assert_eq!(sat.vel(), DVec2::new(-1.5, 0.7));
    }

    #[test]
    fn test_banner_text() {
        assert_eq!(MissionStatus::Nominal.banner(), None);
        assert_eq!(MissionStatus::FuelDepleted.banner(), Some("Fuel Depleted!"));
        assert_eq!(MissionStatus::AtmosphericEntry.banner(), Some("Atmospheric Entry!"));
        assert!(MissionStatus::MappingEnabled.is_mapping_enabled());
    }
}
