//! Deterministic travel-time providers for tests and demos.

use geo::Coord;

use crate::travel_time::{LegEstimate, TravelMode, TravelTimeError, TravelTimeProvider};

/// Provider answering every leg with one fixed estimate per mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTravelTimeProvider {
    driving: LegEstimate,
    walking: LegEstimate,
}

impl FixedTravelTimeProvider {
    /// Construct a provider returning `driving` and `walking` regardless of
    /// the coordinates.
    pub const fn new(driving: LegEstimate, walking: LegEstimate) -> Self {
        Self { driving, walking }
    }
}

impl TravelTimeProvider for FixedTravelTimeProvider {
    fn estimate(
        &self,
        _origin: Coord<f64>,
        _destination: Coord<f64>,
        mode: TravelMode,
    ) -> Result<LegEstimate, TravelTimeError> {
        Ok(match mode {
            TravelMode::Driving => self.driving,
            TravelMode::Walking => self.walking,
        })
    }
}

/// Provider that is always unavailable.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FailingTravelTimeProvider;

impl TravelTimeProvider for FailingTravelTimeProvider {
    fn estimate(
        &self,
        _origin: Coord<f64>,
        _destination: Coord<f64>,
        _mode: TravelMode,
    ) -> Result<LegEstimate, TravelTimeError> {
        Err(TravelTimeError::Unavailable {
            reason: "test provider is offline".to_owned(),
        })
    }
}
