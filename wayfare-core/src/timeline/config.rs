//! Defaults applied when an itinerary leaves a value unset.

use std::ops::RangeInclusive;

use crate::duration::PARSED_MINUTES_BOUNDS;
use crate::travel_time::{DEFAULT_LEG_ESTIMATE, LegEstimate, TravelMode};

/// Default visit length when a stop has no duration source.
pub const DEFAULT_VISIT_MINUTES: u32 = 60;

/// Default dining dwell when a dining stop has none.
pub const DEFAULT_DWELL_MINUTES: u32 = 60;

/// Configuration for [`Composer`](super::Composer).
///
/// # Examples
/// ```
/// use wayfare_core::{TimelineConfig, TravelMode};
///
/// let config = TimelineConfig::default().with_default_mode(TravelMode::Walking);
/// assert_eq!(config.default_visit_minutes, 60);
/// assert_eq!(config.default_mode, TravelMode::Walking);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineConfig {
    /// Visit length used when a stop has no override, computed value or
    /// typical time spent.
    pub default_visit_minutes: u32,
    /// Dwell used for dining stops without one.
    pub default_dwell_minutes: u32,
    /// Last-resort travel estimate for a leg nobody knows about.
    pub default_leg: LegEstimate,
    /// Mode assumed for legs the user has not chosen a mode for.
    pub default_mode: TravelMode,
    /// Clamp applied to visit lengths parsed from free text.
    pub parsed_visit_bounds: RangeInclusive<u32>,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            default_visit_minutes: DEFAULT_VISIT_MINUTES,
            default_dwell_minutes: DEFAULT_DWELL_MINUTES,
            default_leg: DEFAULT_LEG_ESTIMATE,
            default_mode: TravelMode::default(),
            parsed_visit_bounds: PARSED_MINUTES_BOUNDS,
        }
    }
}

impl TimelineConfig {
    /// Set the default visit length.
    #[must_use]
    pub const fn with_default_visit_minutes(mut self, minutes: u32) -> Self {
        self.default_visit_minutes = minutes;
        self
    }

    /// Set the default dining dwell.
    #[must_use]
    pub const fn with_default_dwell_minutes(mut self, minutes: u32) -> Self {
        self.default_dwell_minutes = minutes;
        self
    }

    /// Set the mode assumed for unselected legs.
    #[must_use]
    pub const fn with_default_mode(mut self, mode: TravelMode) -> Self {
        self.default_mode = mode;
        self
    }
}
